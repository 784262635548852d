//! Paged PDF export.
//!
//! A4 portrait, dark theme. Page 1 carries the header band (title and
//! date range); events flow beneath as one card each. A card that would
//! overflow the page budget starts a new page, whose background is
//! repainted first. Link rich content becomes clickable text backed by a
//! URI annotation; images are omitted in this format.

use printpdf::path::PaintMode;
use printpdf::*;

use crate::datetime::{date_range_label, full_date};
use crate::error::{WorldCalError, WorldCalResult};
use crate::event::{Event, RichContent};
use crate::export::ExportSelection;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 20.0;
const HEADER_HEIGHT: f64 = 60.0;

/// Card geometry: base height, plus room for a description line pair,
/// plus one line per link.
const CARD_BASE_HEIGHT: f64 = 60.0;
const CARD_DESCRIPTION_EXTRA: f64 = 20.0;
const CARD_LINK_EXTRA: f64 = 15.0;
const CARD_GAP: f64 = 10.0;

const BACKGROUND: (u8, u8, u8) = (17, 24, 39);
const CARD: (u8, u8, u8) = (31, 41, 55);
const PRIMARY: (u8, u8, u8) = (59, 130, 246);
const TEXT_PRIMARY: (u8, u8, u8) = (255, 255, 255);
const TEXT_SECONDARY: (u8, u8, u8) = (156, 163, 175);
const TEXT_MUTED: (u8, u8, u8) = (107, 114, 128);

pub(crate) fn render(selection: &ExportSelection) -> WorldCalResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Calendar Events",
        Mm(PAGE_WIDTH as f32),
        Mm(PAGE_HEIGHT as f32),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| WorldCalError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| WorldCalError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(page).get_layer(layer);
    paint_background(&layer);

    // Header band with title and date range.
    fill(&layer, PRIMARY);
    rect_from_top(&layer, 0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT);
    fill(&layer, TEXT_PRIMARY);
    text_from_top(&layer, &bold, "Calendar Events", 24.0, MARGIN, 40.0);
    text_from_top(
        &layer,
        &regular,
        &date_range_label(selection.start, selection.end),
        14.0,
        MARGIN,
        55.0,
    );

    let mut y = HEADER_HEIGHT + MARGIN;
    for event in &selection.events {
        let links: Vec<&RichContent> = event
            .rich_content
            .iter()
            .filter(|c| matches!(c, RichContent::Link { .. }))
            .collect();
        let card_height = CARD_BASE_HEIGHT
            + if event.description.is_some() {
                CARD_DESCRIPTION_EXTRA
            } else {
                0.0
            }
            + links.len() as f64 * CARD_LINK_EXTRA;

        if y + card_height > PAGE_HEIGHT - MARGIN {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            paint_background(&layer);
            y = MARGIN;
        }

        draw_card(&layer, &regular, &bold, event, &links, y, card_height);
        y += card_height + CARD_GAP;
    }

    doc.save_to_bytes()
        .map_err(|e| WorldCalError::Pdf(e.to_string()))
}

fn draw_card(
    layer: &PdfLayerReference,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
    event: &Event,
    links: &[&RichContent],
    y: f64,
    card_height: f64,
) {
    fill(layer, CARD);
    rect_from_top(layer, MARGIN, y, PAGE_WIDTH - 2.0 * MARGIN, card_height);

    let x = MARGIN + 10.0;
    fill(layer, TEXT_PRIMARY);
    text_from_top(layer, bold, &event.title, 16.0, x, y + 20.0);

    fill(layer, TEXT_SECONDARY);
    let date_line = format!("{} \u{2022} {}", full_date(event.date), event.time_label());
    text_from_top(layer, regular, &date_line, 12.0, x, y + 35.0);

    if let Some(description) = &event.description {
        fill(layer, TEXT_MUTED);
        for (i, line) in wrap(description, 90).iter().take(2).enumerate() {
            text_from_top(layer, regular, line, 11.0, x, y + 50.0 + i as f64 * 6.0);
        }
    }

    let mut link_y = y + if event.description.is_some() { 65.0 } else { 45.0 };
    for link in links {
        let RichContent::Link { url, .. } = link else {
            continue;
        };
        let label = link.label();

        fill(layer, PRIMARY);
        text_from_top(layer, regular, "Link:", 11.0, x, link_y);
        text_from_top(layer, regular, label, 11.0, x + 12.0, link_y);

        // Clickable area over the rendered label text.
        let label_width = text_width(label, 11.0);
        layer.add_link_annotation(LinkAnnotation::new(
            Rect::new(
                Mm((x + 12.0) as f32),
                Mm((PAGE_HEIGHT - link_y - 3.0) as f32),
                Mm((x + 12.0 + label_width) as f32),
                Mm((PAGE_HEIGHT - link_y + 5.0) as f32),
            ),
            Some(BorderArray::default()),
            Some(ColorArray::default()),
            Actions::uri(url.clone()),
            Some(HighlightingMode::Invert),
        ));

        link_y += CARD_LINK_EXTRA;
    }
}

fn paint_background(layer: &PdfLayerReference) {
    fill(layer, BACKGROUND);
    rect_from_top(layer, 0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT);
}

fn fill(layer: &PdfLayerReference, (r, g, b): (u8, u8, u8)) {
    layer.set_fill_color(Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    )));
}

/// Fill a rectangle given in top-down page coordinates.
fn rect_from_top(layer: &PdfLayerReference, x: f64, y: f64, width: f64, height: f64) {
    layer.add_rect(
        Rect::new(
            Mm(x as f32),
            Mm((PAGE_HEIGHT - y - height) as f32),
            Mm((x + width) as f32),
            Mm((PAGE_HEIGHT - y) as f32),
        )
        .with_mode(PaintMode::Fill),
    );
}

/// Place a text baseline given in top-down page coordinates.
fn text_from_top(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    size: f64,
    x: f64,
    y: f64,
) {
    layer.use_text(text, size as f32, Mm(x as f32), Mm((PAGE_HEIGHT - y) as f32), font);
}

/// Rough Helvetica width in mm (average glyph ~0.5 em).
fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * 0.3528 * 0.5
}

/// Greedy word wrap by character budget.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use chrono::NaiveDate;

    fn event(id: &str, day: u32, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            time: None,
            country: "US".to_string(),
            color: "#3B82F6".to_string(),
            category: EventCategory::Personal,
            tags: vec![],
            rich_content: vec![],
        }
    }

    fn selection(events: Vec<Event>) -> ExportSelection {
        let start = events.iter().map(|e| e.date).min().unwrap();
        let end = events.iter().map(|e| e.date).max().unwrap();
        ExportSelection { events, start, end }
    }

    /// One /Contents entry per page object.
    fn page_count(bytes: &[u8]) -> usize {
        String::from_utf8_lossy(bytes).matches("/Contents").count()
    }

    #[test]
    fn produces_a_pdf() {
        let bytes = render(&selection(vec![event("a", 5, "only")])).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn cards_paginate_when_the_page_budget_is_exceeded() {
        // Two plain cards fit on the first page under the header.
        let few: Vec<Event> = (1..=2).map(|d| event(&d.to_string(), d, "fits")).collect();
        let single = render(&selection(few)).unwrap();
        assert_eq!(page_count(&single), 1);

        // Ten cards cannot.
        let many: Vec<Event> = (1..=10).map(|d| event(&d.to_string(), d, "spills")).collect();
        let multi = render(&selection(many)).unwrap();
        assert!(
            page_count(&multi) > 1,
            "expected pagination, got {} page(s)",
            page_count(&multi)
        );
    }

    #[test]
    fn description_and_links_grow_the_card() {
        let mut e = event("a", 5, "busy");
        assert_eq!(card_height_of(&e), CARD_BASE_HEIGHT);

        e.description = Some("details".to_string());
        assert_eq!(card_height_of(&e), CARD_BASE_HEIGHT + CARD_DESCRIPTION_EXTRA);

        e.rich_content = vec![
            RichContent::Link {
                url: "https://example.com/a".to_string(),
                title: None,
            },
            RichContent::Link {
                url: "https://example.com/b".to_string(),
                title: None,
            },
            // Images do not take card space in this format.
            RichContent::Image {
                url: "https://example.com/c.png".to_string(),
            },
        ];
        assert_eq!(
            card_height_of(&e),
            CARD_BASE_HEIGHT + CARD_DESCRIPTION_EXTRA + 2.0 * CARD_LINK_EXTRA
        );
    }

    fn card_height_of(event: &Event) -> f64 {
        let links = event
            .rich_content
            .iter()
            .filter(|c| matches!(c, RichContent::Link { .. }))
            .count();
        CARD_BASE_HEIGHT
            + if event.description.is_some() {
                CARD_DESCRIPTION_EXTRA
            } else {
                0.0
            }
            + links as f64 * CARD_LINK_EXTRA
    }

    #[test]
    fn wrap_splits_on_word_boundaries() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert!(wrap("", 10).is_empty());
    }
}
