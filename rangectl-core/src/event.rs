//! Change notifications and their fan-out to subscribers.

use serde::{Deserialize, Serialize};

/// Payload of a "value changed" notification.
///
/// Single-channel controls leave the handle fields empty; they are skipped
/// when serialized, so the JSON shape is `{value, displayValue}` or
/// `{value, handleValue, displayValue, displayHandleValue}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_value: Option<f64>,
    pub display_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_handle_value: Option<f64>,
}

/// Handle returned by [`EventEmitter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ChangeEvent)>;

/// Synchronous, ordered fan-out of change notifications.
#[derive(Default)]
pub struct EventEmitter {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every subscriber in subscription order.
    pub fn emit(&mut self, event: &ChangeEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn single(value: f64) -> ChangeEvent {
        ChangeEvent {
            value,
            handle_value: None,
            display_value: value * 100.0,
            display_handle_value: None,
        }
    }

    #[test]
    fn single_channel_json_shape() {
        let json = serde_json::to_string(&single(0.5)).unwrap();
        assert_eq!(json, r#"{"value":0.5,"displayValue":50.0}"#);
    }

    #[test]
    fn dual_channel_json_shape() {
        let event = ChangeEvent {
            value: 0.25,
            handle_value: Some(0.75),
            display_value: 25.0,
            display_handle_value: Some(75.0),
        };
        let json: serde_json::Value = serde_json::to_value(event).unwrap();
        assert_eq!(json["handleValue"], 0.75);
        assert_eq!(json["displayHandleValue"], 75.0);
    }

    #[test]
    fn emits_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = EventEmitter::new();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            emitter.subscribe(move |e| seen.borrow_mut().push((tag, e.value)));
        }
        emitter.emit(&single(0.1));
        assert_eq!(*seen.borrow(), vec![("a", 0.1), ("b", 0.1)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut emitter = EventEmitter::new();
        let counter = Rc::clone(&count);
        let id = emitter.subscribe(move |_| *counter.borrow_mut() += 1);

        emitter.emit(&single(0.2));
        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(&single(0.3));

        assert_eq!(*count.borrow(), 1);
        assert!(emitter.is_empty());
    }
}
