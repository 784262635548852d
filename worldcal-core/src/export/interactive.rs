//! Interactive HTML slideshow export.
//!
//! Pure string templating: the style and navigation script are static
//! embedded payloads, parameterized only by the slide data. The document
//! references no external stylesheet, script, or font, so navigation
//! works with no network access; remote images in rich content are the
//! only network-dependent pieces, and a broken one removes itself instead
//! of rendering a placeholder.

use crate::datetime::{date_range_label, weekday_date};
use crate::event::{Event, RichContent};
use crate::export::ExportSelection;
use crate::slides::{build_slides, MonthGroup, Slide};

pub(crate) fn render(selection: &ExportSelection) -> String {
    let mut body = String::new();
    for (index, slide) in build_slides(selection).iter().enumerate() {
        let class = if index == 0 { "slide active" } else { "slide" };
        match slide {
            Slide::Overview {
                start,
                end,
                month_count,
                event_count,
            } => {
                body.push_str(&format!(
                    r#"    <div class="{class}">
      <h1 class="title">Calendar Events</h1>
      <p class="date-range">{range}</p>
      <div class="event-card">
        <div class="stats">
          <div>
            <div class="stat-value" id="total-events">{event_count}</div>
            <div class="stat-label">Total Events</div>
          </div>
          <div>
            <div class="stat-value" id="month-count">{month_count}</div>
            <div class="stat-label">Months</div>
          </div>
        </div>
      </div>
    </div>
"#,
                    range = escape(&date_range_label(*start, *end)),
                ));
            }
            Slide::Month(group) => body.push_str(&month_slide(class, group)),
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Calendar Events Presentation</title>
  <style>
{STYLE}  </style>
</head>
<body>
  <div id="presentation">
{body}  </div>

  <div class="controls">
    <button id="prevBtn" disabled>Previous</button>
    <button id="nextBtn">Next</button>
  </div>

  <script>
{SCRIPT}  </script>
</body>
</html>
"#
    )
}

fn month_slide(class: &str, group: &MonthGroup) -> String {
    let mut cards = String::new();
    for event in &group.events {
        cards.push_str(&event_card(event));
    }
    format!(
        r#"    <div class="{class}">
      <h2 class="month-title">{label}</h2>
{cards}    </div>
"#,
        label = escape(&group.label),
    )
}

fn event_card(event: &Event) -> String {
    let mut card = format!(
        r#"      <div class="event-card">
        <div class="event-title"><span class="swatch" style="background-color: {color}"></span>{title}</div>
        <div class="event-date">{date}</div>
"#,
        color = escape(&event.color),
        title = escape(&event.title),
        date = escape(&weekday_date(event.date)),
    );

    if let Some(description) = &event.description {
        card.push_str(&format!(
            "        <div class=\"event-description\">{}</div>\n",
            escape(description)
        ));
    }

    for content in &event.rich_content {
        match content {
            RichContent::Image { url } => card.push_str(&format!(
                "        <img src=\"{}\" alt=\"Event image\" class=\"event-image\" onerror=\"this.remove()\">\n",
                escape(url)
            )),
            RichContent::Link { url, .. } => card.push_str(&format!(
                "        <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"event-link\">{}</a>\n",
                escape(url),
                escape(content.label())
            )),
        }
    }

    card.push_str("      </div>\n");
    card
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"    :root {
      color-scheme: dark;
    }

    body {
      margin: 0;
      padding: 0;
      font-family: system-ui, -apple-system, sans-serif;
      background: rgb(17, 24, 39);
      color: white;
    }

    .slide {
      display: none;
      min-height: 100vh;
      padding: 2rem;
      box-sizing: border-box;
    }

    .slide.active {
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
    }

    .title {
      font-size: 3rem;
      font-weight: bold;
      margin-bottom: 1rem;
      background: linear-gradient(to right, #3b82f6, #8b5cf6);
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .month-title {
      font-size: 2.25rem;
      font-weight: bold;
      background: linear-gradient(to right, #3b82f6, #8b5cf6);
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .date-range {
      color: #9ca3af;
      font-size: 1.25rem;
    }

    .stats {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 2rem;
      text-align: center;
    }

    .stat-value {
      font-size: 3rem;
      color: #3b82f6;
      font-weight: bold;
    }

    .stat-label {
      color: #9ca3af;
    }

    .event-card {
      background: rgb(31, 41, 55);
      border-radius: 0.75rem;
      padding: 1.5rem;
      margin: 1rem 0;
      max-width: 800px;
      width: 100%;
      box-sizing: border-box;
    }

    .event-title {
      font-size: 1.5rem;
      font-weight: bold;
      margin-bottom: 0.5rem;
    }

    .swatch {
      display: inline-block;
      width: 0.75rem;
      height: 0.75rem;
      border-radius: 9999px;
      margin-right: 0.5rem;
    }

    .event-date {
      color: #60a5fa;
      margin-bottom: 0.5rem;
    }

    .event-description {
      color: #9ca3af;
      margin-bottom: 1rem;
    }

    .event-link {
      color: #3b82f6;
      text-decoration: none;
    }

    .event-link:hover {
      text-decoration: underline;
    }

    .event-image {
      max-width: 100%;
      border-radius: 0.5rem;
      margin: 1rem 0;
    }

    .controls {
      position: fixed;
      bottom: 2rem;
      left: 50%;
      transform: translateX(-50%);
      display: flex;
      gap: 1rem;
      background: rgba(0, 0, 0, 0.5);
      padding: 0.5rem;
      border-radius: 0.5rem;
    }

    button {
      background: #3b82f6;
      color: white;
      border: none;
      padding: 0.5rem 1rem;
      border-radius: 0.25rem;
      cursor: pointer;
    }

    button:hover {
      background: #2563eb;
    }

    button:disabled {
      background: #4b5563;
      cursor: not-allowed;
    }
"#;

const SCRIPT: &str = r#"    const slides = document.querySelectorAll('.slide');
    let currentSlide = 0;
    const prevBtn = document.getElementById('prevBtn');
    const nextBtn = document.getElementById('nextBtn');

    function updateSlide() {
      slides.forEach(slide => slide.classList.remove('active'));
      slides[currentSlide].classList.add('active');

      prevBtn.disabled = currentSlide === 0;
      nextBtn.disabled = currentSlide === slides.length - 1;
    }

    prevBtn.addEventListener('click', () => {
      if (currentSlide > 0) {
        currentSlide--;
        updateSlide();
      }
    });

    nextBtn.addEventListener('click', () => {
      if (currentSlide < slides.length - 1) {
        currentSlide++;
        updateSlide();
      }
    });

    document.addEventListener('keydown', (e) => {
      if (e.key === 'ArrowLeft' && currentSlide > 0) {
        currentSlide--;
        updateSlide();
      } else if (e.key === 'ArrowRight' && currentSlide < slides.length - 1) {
        currentSlide++;
        updateSlide();
      }
    });

    updateSlide();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use chrono::NaiveDate;

    fn event(id: &str, month: u32, day: u32, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
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

    /// Pull a stat value back out of the generated markup.
    fn stat(html: &str, id: &str) -> usize {
        let marker = format!("id=\"{id}\">");
        let at = html.find(&marker).expect("stat marker present") + marker.len();
        html[at..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .expect("stat is a number")
    }

    #[test]
    fn overview_counts_round_trip() {
        let sel = selection(vec![
            event("a", 3, 5, "one"),
            event("b", 3, 12, "two"),
            event("c", 7, 4, "three"),
        ]);
        let html = render(&sel);

        assert_eq!(stat(&html, "total-events"), 3);
        assert_eq!(stat(&html, "month-count"), 2);
    }

    #[test]
    fn document_is_self_contained() {
        let html = render(&selection(vec![event("a", 3, 5, "one")]));
        assert!(!html.contains("http://"), "no external references");
        assert!(
            !html.contains("https://"),
            "no external stylesheet/script/font"
        );
        assert!(html.contains("<script>"));
        assert!(html.contains("ArrowRight"));
    }

    #[test]
    fn one_slide_per_distinct_month_plus_overview() {
        let sel = selection(vec![
            event("a", 3, 5, "one"),
            event("b", 7, 4, "two"),
            event("c", 3, 20, "three"),
        ]);
        let html = render(&sel);

        assert_eq!(html.matches("class=\"slide").count(), 3);
        assert!(html.contains("March 2024"));
        assert!(html.contains("July 2024"));
    }

    #[test]
    fn broken_image_leaves_rest_of_card_intact() {
        // Scenario: a dead image URL must not suppress title, date or link.
        let mut e = event("a", 3, 5, "Launch Party");
        e.description = Some("Roof terrace".to_string());
        e.rich_content = vec![
            RichContent::Image {
                url: "https://img.invalid/gone.png".to_string(),
            },
            RichContent::Link {
                url: "https://example.com/rsvp".to_string(),
                title: Some("RSVP".to_string()),
            },
        ];
        let html = render(&selection(vec![e]));

        assert!(html.contains("Launch Party"));
        assert!(html.contains("Tuesday, March 5"));
        assert!(html.contains("Roof terrace"));
        assert!(html.contains("href=\"https://example.com/rsvp\""));
        assert!(html.contains(">RSVP</a>"));
        assert!(html.contains("onerror=\"this.remove()\""));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut e = event("a", 3, 5, "<script>alert(1)</script>");
        e.description = Some("a & b".to_string());
        let html = render(&selection(vec![e]));

        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn link_without_title_falls_back_to_url_text() {
        let mut e = event("a", 3, 5, "x");
        e.rich_content = vec![RichContent::Link {
            url: "https://example.com/page".to_string(),
            title: None,
        }];
        let html = render(&selection(vec![e]));
        assert!(html.contains(">https://example.com/page</a>"));
    }
}
