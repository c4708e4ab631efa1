//! Application state: single-owner, main-thread only.
//!
//! Owns every mounted control and its render target. Change notifications
//! arrive through an mpsc channel fed by each control's subscription and are
//! drained into the event log once per frame.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};

use chrono::NaiveDateTime;
use ratatui::layout::{Position, Rect};

use rangectl_core::{
    ChangeEvent, ControlSet, HostElement, PressTarget, RangeControl, ShadowTree, Variant,
};

use crate::cells;

/// Maximum number of retained event log entries.
pub const EVENT_LOG_CAP: usize = 50;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One change notification as shown in the event log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub control_id: String,
    pub event: ChangeEvent,
}

impl LogEntry {
    /// JSON payload as a host page would see it.
    pub fn payload(&self) -> String {
        serde_json::to_string(&self.event).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}

/// Where a control was last laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlLayout {
    /// Whole block, border included.
    pub area: Rect,
    /// One-row track inside the block.
    pub track: Rect,
}

/// A mounted control with its identity and layout.
pub struct Slot {
    pub id: String,
    pub control: RangeControl<ShadowTree>,
    pub layout: Option<ControlLayout>,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub slots: Vec<Slot>,
    pub focused: usize,
    pub event_log: VecDeque<LogEntry>,
    pub status_message: Option<(String, StatusLevel)>,
    events_rx: Receiver<(String, ChangeEvent)>,
}

impl AppState {
    /// Create and mount every control in `set`.
    pub fn new(set: &ControlSet) -> Self {
        let (tx, rx) = mpsc::channel();
        let slots = set
            .controls
            .iter()
            .map(|spec| {
                let mut control = RangeControl::new(spec.config, ShadowTree::default());
                let tx = tx.clone();
                let id = spec.id.clone();
                control.subscribe(move |event| {
                    let _ = tx.send((id.clone(), *event));
                });
                control.mount(&spec.attributes);
                Slot {
                    id: spec.id.clone(),
                    control,
                    layout: None,
                }
            })
            .collect();

        Self {
            running: true,
            slots,
            focused: 0,
            event_log: VecDeque::with_capacity(EVENT_LOG_CAP),
            status_message: None,
            events_rx: rx,
        }
    }

    /// Move pending change notifications into the event log.
    pub fn drain_events(&mut self) {
        while let Ok((control_id, event)) = self.events_rx.try_recv() {
            self.push_log(control_id, event);
        }
    }

    /// Push a log entry, newest first, capping at [`EVENT_LOG_CAP`].
    pub fn push_log(&mut self, control_id: String, event: ChangeEvent) {
        self.event_log.push_front(LogEntry {
            timestamp: chrono::Local::now().naive_local(),
            control_id,
            event,
        });
        if self.event_log.len() > EVENT_LOG_CAP {
            self.event_log.pop_back();
        }
    }

    /// Record where control `index` is drawn and update its track geometry.
    ///
    /// A changed track re-renders the control so its pixel geometry follows.
    pub fn set_layout(&mut self, index: usize, layout: ControlLayout) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        let geometry = cells::track_geometry(layout.track);
        slot.layout = Some(layout);
        if slot.control.host().track() != geometry {
            slot.control.host_mut().set_track(geometry);
            slot.control.render();
        }
    }

    /// Index of the control whose block contains the cell.
    pub fn control_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.slots
            .iter()
            .position(|slot| slot.layout.is_some_and(|l| l.area.contains(pos)))
    }

    /// Resolve which part of control `index` a press at the cell hits.
    pub fn press_target(&self, index: usize, column: u16, row: u16) -> PressTarget {
        let Some(slot) = self.slots.get(index) else {
            return PressTarget::Outside;
        };
        let Some(layout) = slot.layout else {
            return PressTarget::Outside;
        };
        let pos = Position::new(column, row);
        if !layout.area.contains(pos) {
            return PressTarget::Outside;
        }
        if !layout.track.contains(pos) {
            return PressTarget::Host;
        }

        let control = &slot.control;
        let tree = control.host();
        let px = cells::column_to_px(column);
        let track_left = tree.track().left;

        if control.variant() == Variant::Dual && !control.is_handle_hidden() {
            let handle_start = track_left + tree.handle_left();
            let handle_end = handle_start + control.config().handle_width;
            if px >= handle_start && px < handle_end {
                return PressTarget::Handle;
            }
        }
        if px < track_left + tree.fill_width() {
            PressTarget::Fill
        } else {
            PressTarget::Track
        }
    }

    /// Controls currently holding document listeners.
    pub fn capturing(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.slots
            .iter_mut()
            .filter(|slot| slot.control.host().listening().is_some())
    }

    pub fn focused_slot_mut(&mut self) -> Option<&mut Slot> {
        self.slots.get_mut(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.slots.is_empty() {
            self.focused = (self.focused + 1) % self.slots.len();
        }
    }

    /// Unmount every control, releasing any active drag.
    pub fn unmount_all(&mut self) {
        for slot in &mut self.slots {
            slot.control.unmount();
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
