//! In-memory event store.
//!
//! The store is an ordered collection: iteration order is insertion order,
//! and that order is what the grid's day buckets and the slide builder's
//! month grouping observe. State lives for the process lifetime only.

use crate::error::{WorldCalError, WorldCalResult};
use crate::event::{dedup_tags, Event, EventCategory, EventDraft};

/// Ordered, in-memory collection of events.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

/// Conditions for filtering events in the store.
#[derive(Debug, Default, Clone)]
pub struct EventFilter {
    /// Only events for this country code.
    pub country: Option<String>,
    /// Only events in this category.
    pub category: Option<EventCategory>,
}

impl EventFilter {
    fn matches(&self, event: &Event) -> bool {
        if let Some(country) = &self.country {
            if &event.country != country {
                return false;
            }
        }
        if let Some(category) = self.category {
            if event.category != category {
                return false;
            }
        }
        true
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Validate a draft and append the resulting event.
    pub fn add(&mut self, draft: EventDraft) -> WorldCalResult<&Event> {
        let event = draft.build()?;
        self.events.push(event);
        Ok(self.events.last().expect("just pushed"))
    }

    /// Bulk import, keyed by id: an incoming event whose id is already
    /// present replaces the existing record in place, everything else is
    /// appended in input order. Re-importing the same batch is a no-op
    /// beyond the replacement, which makes holiday re-import idempotent.
    pub fn import(&mut self, events: Vec<Event>) {
        for mut event in events {
            event.tags = dedup_tags(std::mem::take(&mut event.tags));
            match self.events.iter_mut().find(|e| e.id == event.id) {
                Some(existing) => *existing = event,
                None => self.events.push(event),
            }
        }
    }

    /// Full-record replace keyed by id. There is no partial update: the
    /// incoming event overwrites every field of the stored one.
    pub fn update(&mut self, event: Event) -> WorldCalResult<()> {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => {
                *existing = event;
                Ok(())
            }
            None => Err(WorldCalError::EventNotFound(event.id)),
        }
    }

    /// Remove by id, returning the removed event.
    pub fn remove(&mut self, id: &str) -> WorldCalResult<Event> {
        match self.events.iter().position(|e| e.id == id) {
            Some(index) => Ok(self.events.remove(index)),
            None => Err(WorldCalError::EventNotFound(id.to_string())),
        }
    }

    /// Filtered snapshot, in store order. The returned events are owned
    /// clones: exports built from them are unaffected by later mutation.
    pub fn filter(&self, filter: &EventFilter) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Owned snapshot of the whole store, in store order.
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn holiday(id: &str, country: &str, day: u32, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
            time: None,
            country: country.to_string(),
            color: "#3B82F6".to_string(),
            category: EventCategory::Holiday,
            tags: vec!["holiday".to_string()],
            rich_content: vec![],
        }
    }

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
            country: "US".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = EventStore::new();
        store.add(draft("first")).unwrap();
        store.add(draft("second")).unwrap();

        let titles: Vec<_> = store.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn add_rejects_invalid_draft() {
        let mut store = EventStore::new();
        let mut bad = draft("");
        bad.title = String::new();
        assert!(store.add(bad).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn import_is_idempotent_by_id() {
        let mut store = EventStore::new();
        let batch = vec![holiday("2024-07-04-US-0", "US", 4, "Independence Day")];
        store.import(batch.clone());
        store.import(batch);

        assert_eq!(store.len(), 1);
        assert_eq!(store.events()[0].title, "Independence Day");
    }

    #[test]
    fn import_replaces_existing_record_in_place() {
        let mut store = EventStore::new();
        store.import(vec![
            holiday("a", "US", 4, "Old Title"),
            holiday("b", "US", 5, "Other"),
        ]);
        store.import(vec![holiday("a", "US", 4, "New Title")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.events()[0].title, "New Title");
        assert_eq!(store.events()[1].title, "Other");
    }

    #[test]
    fn update_replaces_whole_record() {
        let mut store = EventStore::new();
        let id = store.add(draft("before")).unwrap().id.clone();

        let mut replacement = store.get(&id).unwrap().clone();
        replacement.title = "after".to_string();
        replacement.description = Some("now with notes".to_string());
        store.update(replacement).unwrap();

        let stored = store.get(&id).unwrap();
        assert_eq!(stored.title, "after");
        assert_eq!(stored.description.as_deref(), Some("now with notes"));
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut store = EventStore::new();
        let event = holiday("missing", "US", 4, "ghost");
        assert!(matches!(
            store.update(event),
            Err(WorldCalError::EventNotFound(_))
        ));
    }

    #[test]
    fn remove_returns_the_event() {
        let mut store = EventStore::new();
        store.import(vec![holiday("a", "US", 4, "gone")]);
        let removed = store.remove("a").unwrap();
        assert_eq!(removed.title, "gone");
        assert!(store.is_empty());
        assert!(store.remove("a").is_err());
    }

    #[test]
    fn filter_by_country_keeps_store_order() {
        let mut store = EventStore::new();
        store.import(vec![
            holiday("a", "US", 4, "US one"),
            holiday("b", "DE", 3, "DE one"),
            holiday("c", "US", 5, "US two"),
        ]);

        let filter = EventFilter {
            country: Some("US".to_string()),
            ..Default::default()
        };
        let titles: Vec<_> = store.filter(&filter).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["US one", "US two"]);
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut store = EventStore::new();
        store.import(vec![holiday("a", "US", 4, "original")]);
        let snapshot = store.snapshot();

        let mut changed = store.get("a").unwrap().clone();
        changed.title = "changed".to_string();
        store.update(changed).unwrap();

        assert_eq!(snapshot[0].title, "original");
    }
}
