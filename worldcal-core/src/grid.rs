//! Calendar month grid.
//!
//! Lays out one month as a Sunday-first 7-column grid: leading blanks,
//! the days of the month with their event buckets, trailing blanks.

use chrono::{Datelike, NaiveDate};

use crate::error::{WorldCalError, WorldCalResult};
use crate::event::Event;

/// One month laid out for a 7-column week grid.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    /// Blank cells before day 1 (the weekday index of day 1, Sunday = 0).
    pub leading_blanks: u32,
    /// Blank cells after the last day (6 - weekday index of the last day).
    pub trailing_blanks: u32,
    /// The days of the month in order, each with its event bucket.
    pub days: Vec<GridDay>,
}

/// One grid cell: a date and the events bucketed under it, in store order.
#[derive(Debug, Clone)]
pub struct GridDay {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

/// What selecting a day yields.
///
/// A day with a single event focuses that event; a day with several opens
/// the day list; a day with none is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum DaySelection {
    None,
    Event(Event),
    DayList(Vec<Event>),
}

impl MonthGrid {
    /// Build the grid for `year`/`month` from the given event collection.
    ///
    /// Bucketing compares calendar-date components only: an event lands in
    /// a cell iff its year/month/day equal the cell's, regardless of any
    /// clock times it carries. Events outside the month are ignored.
    pub fn build(year: i32, month: u32, events: &[Event]) -> WorldCalResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(WorldCalError::InvalidMonth(month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(WorldCalError::InvalidDate { year, month })?;

        let days: Vec<GridDay> = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| GridDay {
                date,
                events: events.iter().filter(|e| e.is_on(date)).cloned().collect(),
            })
            .collect();

        let last = days.last().expect("every month has at least one day").date;
        Ok(MonthGrid {
            year,
            month,
            leading_blanks: first.weekday().num_days_from_sunday(),
            trailing_blanks: 6 - last.weekday().num_days_from_sunday(),
            days,
        })
    }

    /// Total cell count; always a multiple of 7.
    pub fn cell_count(&self) -> u32 {
        self.leading_blanks + self.days.len() as u32 + self.trailing_blanks
    }

    /// Apply the selection policy to a day in this month.
    pub fn select_day(&self, date: NaiveDate) -> DaySelection {
        let Some(day) = self.days.iter().find(|d| d.date == date) else {
            return DaySelection::None;
        };
        match day.events.as_slice() {
            [] => DaySelection::None,
            [event] => DaySelection::Event(event.clone()),
            _ => DaySelection::DayList(day.events.clone()),
        }
    }
}
