//! Cart event recording for replay and inspection.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use shop_commerce::cart::{CartEvent, CartObserver, CartState};
use shop_commerce::{Money, SessionId};

use crate::ObservabilityError;

/// A cart event together with the cart totals right after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedEvent {
    /// Position in the recording, starting at 0.
    pub seq: u64,
    /// Microseconds since recording started.
    pub elapsed_us: u64,
    /// The event.
    pub event: CartEvent,
    /// Units in the cart after the event.
    pub item_count: u64,
    /// Cart total after the event.
    pub total: Money,
}

/// A complete recording of one session's cart events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recording {
    /// Recording version.
    pub version: u32,
    /// The session the events belong to.
    pub session_id: SessionId,
    /// Events in the order they happened.
    pub events: Vec<RecordedEvent>,
}

impl Recording {
    /// Current recording format version.
    pub const VERSION: u32 = 1;

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, ObservabilityError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Observer that keeps every cart event in memory.
#[derive(Debug)]
pub struct EventRecorder {
    session_id: SessionId,
    start_time: std::time::Instant,
    events: Mutex<Vec<RecordedEvent>>,
}

impl EventRecorder {
    /// Create a recorder for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            start_time: std::time::Instant::now(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Events recorded so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot the recording.
    pub fn recording(&self) -> Recording {
        Recording {
            version: Recording::VERSION,
            session_id: self.session_id.clone(),
            events: self.events(),
        }
    }

    // A panicking observer elsewhere must not hide what was recorded.
    fn lock(&self) -> MutexGuard<'_, Vec<RecordedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartObserver for EventRecorder {
    fn on_event(&self, event: &CartEvent, state: &CartState) {
        let elapsed_us = self.start_time.elapsed().as_micros() as u64;
        let mut events = self.lock();
        let seq = events.len() as u64;
        events.push(RecordedEvent {
            seq,
            elapsed_us,
            event: event.clone(),
            item_count: state.item_count(),
            total: state.total(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::prelude::*;
    use std::sync::Arc;

    fn recorded_session() -> Arc<EventRecorder> {
        let recorder = Arc::new(EventRecorder::new(SessionId::new("sess_rec")));
        let catalog = Catalog::builtin();
        let copa = catalog.get(&ProductId::new("5")).unwrap();

        let mut cart = CartStore::new(catalog.currency()).with_observer(recorder.clone());
        let key = cart.add_item(copa, ShoeSize::from_tenths(95), "Negro/Blanco");
        cart.update_quantity(&key, 3);
        cart.remove_item(&LineItemKey::new("5", ShoeSize::from_tenths(95), "Rosa"));
        cart.clear_cart();
        recorder
    }

    #[test]
    fn test_records_events_with_totals() {
        let recorder = recorded_session();
        let events = recorder.events();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].seq, 0);
        assert_eq!(events[0].total, Money::from_units(200, Currency::USD));
        assert_eq!(events[1].item_count, 3);
        assert_eq!(events[1].total, Money::from_units(600, Currency::USD));
        assert_eq!(events[2].event, CartEvent::Cleared { items: 1 });
        assert!(events[2].total.is_zero());
    }

    #[test]
    fn test_recording_json() {
        let recording = recorded_session().recording();
        let json = recording.to_json().unwrap();
        assert!(json.contains("\"type\": \"quantity_updated\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], Recording::VERSION);
        assert_eq!(value["session_id"], "sess_rec");
        assert_eq!(value["events"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["events"][1]["event"]["to"], 3);
    }

    #[test]
    fn test_empty_recorder() {
        let recorder = EventRecorder::new(SessionId::generate());
        assert!(recorder.is_empty());
        assert_eq!(recorder.len(), 0);
    }
}
