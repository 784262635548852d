//! Presentation slides.
//!
//! Shared between the in-app presentation state and the interactive HTML
//! export: both group the selected events by month and prepend a
//! synthesized overview slide.

use crate::datetime::month_label;
use crate::event::Event;
use crate::export::ExportSelection;
use chrono::NaiveDate;

/// One month's bucket of events, labelled "March 2024" style.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub label: String,
    pub events: Vec<Event>,
}

/// Group events by month label in first-encountered order.
///
/// A single pass appends to an existing bucket or opens a new one at the
/// end, so the first time a month is seen fixes its position. This is
/// insertion order, not chronological order: callers that want
/// chronological slides sort the events by date before grouping.
pub fn group_by_month(events: &[Event]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for event in events {
        let label = month_label(event.date);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(MonthGroup {
                label,
                events: vec![event.clone()],
            }),
        }
    }
    groups
}

/// One unit of presentation content.
#[derive(Debug, Clone, PartialEq)]
pub enum Slide {
    /// Synthesized first slide: date range and aggregate counts.
    Overview {
        start: NaiveDate,
        end: NaiveDate,
        /// Count of distinct month keys in the selection.
        month_count: usize,
        /// Total selected events.
        event_count: usize,
    },
    /// One slide per distinct month, in first-encountered order.
    Month(MonthGroup),
}

/// Build the ordered slide sequence for a selection: overview first, then
/// one slide per distinct month.
pub fn build_slides(selection: &ExportSelection) -> Vec<Slide> {
    let groups = group_by_month(&selection.events);
    let mut slides = Vec::with_capacity(groups.len() + 1);
    slides.push(Slide::Overview {
        start: selection.start,
        end: selection.end,
        month_count: groups.len(),
        event_count: selection.events.len(),
    });
    slides.extend(groups.into_iter().map(Slide::Month));
    slides
}

/// Navigation state for stepping through slides.
///
/// The index is clamped to `[0, len - 1]`; navigation is bounded, never
/// exited. Full-screen display is an orthogonal flag, toggled
/// independently of the slide index.
#[derive(Debug, Clone)]
pub struct SlideShow {
    slides: Vec<Slide>,
    index: usize,
    fullscreen: bool,
}

impl SlideShow {
    pub fn new(selection: &ExportSelection) -> Self {
        SlideShow {
            slides: build_slides(selection),
            index: 0,
            fullscreen: false,
        }
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    pub fn at_last(&self) -> bool {
        self.index + 1 == self.slides.len()
    }

    pub fn next(&mut self) {
        if !self.at_last() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }
}
