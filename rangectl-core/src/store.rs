//! Value store: canonical normalized values with the clamp invariant.
//!
//! Setters clamp to [0,1] and report whether the stored value changed by
//! exact equality. Rendering and notification are the caller's job; the
//! store only decides whether there is anything to do.

use crate::drag::Channel;
use crate::event::ChangeEvent;
use crate::geometry::clamp01;
use crate::normalize::DisplayRange;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueStore {
    fill: f64,
    /// `None` for single-channel controls.
    handle: Option<f64>,
}

impl ValueStore {
    pub fn single() -> Self {
        Self {
            fill: 0.0,
            handle: None,
        }
    }

    pub fn dual() -> Self {
        Self {
            fill: 0.0,
            handle: Some(0.0),
        }
    }

    pub fn fill(&self) -> f64 {
        self.fill
    }

    /// Stored handle value; 0 for single-channel controls.
    pub fn handle(&self) -> f64 {
        self.handle.unwrap_or(0.0)
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Fill => self.fill(),
            Channel::Handle => self.handle(),
        }
    }

    /// Clamp and store. Returns true if the stored value changed.
    ///
    /// Setting the handle of a single-channel store is a no-op.
    pub fn set(&mut self, channel: Channel, raw: f64) -> bool {
        let clamped = clamp01(raw);
        let slot = match channel {
            Channel::Fill => &mut self.fill,
            Channel::Handle => match self.handle.as_mut() {
                Some(slot) => slot,
                None => return false,
            },
        };
        if *slot == clamped {
            return false;
        }
        *slot = clamped;
        true
    }

    /// Notification payload for the current values.
    pub fn snapshot(&self, range: &DisplayRange) -> ChangeEvent {
        ChangeEvent {
            value: self.fill,
            handle_value: self.handle,
            display_value: range.to_display(self.fill),
            display_handle_value: self.handle.map(|h| range.to_display(h)),
        }
    }
}
