//! Drag state machine: which channel, if any, the pointer has captured.
//!
//! States: Idle → DraggingFill | DraggingHandle → Idle.
//!
//! A captured channel and a registered set of document listeners are the
//! same fact here: the machine stores `Option<ActiveDrag>`, and an
//! `ActiveDrag` owns the [`DragSession`] token for its listener registration.
//! The token cannot be cloned and is consumed by [`DragMachine::end`], so every
//! registration is released exactly once and two channels can never be
//! captured at the same time.

use serde::{Deserialize, Serialize};

use crate::host::{DocumentListeners, Marker, PressTarget};

/// One independently draggable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Fill,
    Handle,
}

impl Channel {
    /// Style marker shown while this channel is captured.
    pub fn drag_marker(self) -> Marker {
        match self {
            Channel::Fill => Marker::DraggingFill,
            Channel::Handle => Marker::DraggingHandle,
        }
    }
}

/// Observable drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragState {
    Idle,
    DraggingFill,
    DraggingHandle,
}

impl DragState {
    pub fn is_idle(self) -> bool {
        self == DragState::Idle
    }
}

/// Identifier of one document listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "drag#{}", self.0)
    }
}

/// Token for a live listener registration. Not `Clone`: releasing it
/// consumes it.
#[derive(Debug)]
#[must_use = "a drag session must be released through DragMachine::end"]
pub struct DragSession {
    id: SessionId,
}

impl DragSession {
    pub fn id(&self) -> SessionId {
        self.id
    }
}

#[derive(Debug)]
struct ActiveDrag {
    channel: Channel,
    session: DragSession,
}

/// The drag state machine.
#[derive(Debug, Default)]
pub struct DragMachine {
    active: Option<ActiveDrag>,
    next_session: u64,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        match self.captured() {
            None => DragState::Idle,
            Some(Channel::Fill) => DragState::DraggingFill,
            Some(Channel::Handle) => DragState::DraggingHandle,
        }
    }

    /// The captured channel, if any.
    pub fn captured(&self) -> Option<Channel> {
        self.active.as_ref().map(|a| a.channel)
    }

    pub fn is_dragging(&self, channel: Channel) -> bool {
        self.captured() == Some(channel)
    }

    /// Listener registration of the current session.
    pub fn session_id(&self) -> Option<SessionId> {
        self.active.as_ref().map(|a| a.session.id())
    }

    /// Which channel a press on `target` would capture.
    ///
    /// `handle_interactive` is false for single-channel controls and while the
    /// handle is hidden; a press on a handle that cannot absorb it lands on the
    /// track beneath. Presses while a drag is active never capture.
    pub fn resolve_press(&self, target: PressTarget, handle_interactive: bool) -> Option<Channel> {
        if self.active.is_some() {
            return None;
        }
        match target {
            PressTarget::Handle if handle_interactive => Some(Channel::Handle),
            PressTarget::Handle | PressTarget::Fill | PressTarget::Track | PressTarget::Host => {
                Some(Channel::Fill)
            }
            PressTarget::Outside => None,
        }
    }

    /// Capture `channel` and register the document listeners.
    ///
    /// Returns `None` (and registers nothing) if a drag is already active.
    pub fn begin<L>(&mut self, channel: Channel, listeners: &mut L) -> Option<SessionId>
    where
        L: DocumentListeners + ?Sized,
    {
        if self.active.is_some() {
            return None;
        }
        let id = SessionId(self.next_session);
        self.next_session += 1;
        listeners.listen(id);
        self.active = Some(ActiveDrag {
            channel,
            session: DragSession { id },
        });
        Some(id)
    }

    /// Release the active drag, unregistering its listeners.
    ///
    /// Returns the channel that was captured, or `None` if already idle.
    pub fn end<L>(&mut self, listeners: &mut L) -> Option<Channel>
    where
        L: DocumentListeners + ?Sized,
    {
        let ActiveDrag { channel, session } = self.active.take()?;
        listeners.unlisten(session.id());
        Some(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingListeners {
        live: Vec<SessionId>,
        listens: usize,
        unlistens: usize,
    }

    impl DocumentListeners for CountingListeners {
        fn listen(&mut self, session: SessionId) {
            self.live.push(session);
            self.listens += 1;
        }

        fn unlisten(&mut self, session: SessionId) {
            self.live.retain(|s| *s != session);
            self.unlistens += 1;
        }
    }

    #[test]
    fn press_targets_resolve() {
        let machine = DragMachine::new();
        assert_eq!(machine.resolve_press(PressTarget::Handle, true), Some(Channel::Handle));
        assert_eq!(machine.resolve_press(PressTarget::Fill, true), Some(Channel::Fill));
        assert_eq!(machine.resolve_press(PressTarget::Track, true), Some(Channel::Fill));
        assert_eq!(machine.resolve_press(PressTarget::Host, true), Some(Channel::Fill));
        assert_eq!(machine.resolve_press(PressTarget::Outside, true), None);
    }

    #[test]
    fn hidden_handle_press_falls_through_to_track() {
        let machine = DragMachine::new();
        assert_eq!(machine.resolve_press(PressTarget::Handle, false), Some(Channel::Fill));
    }

    #[test]
    fn begin_and_end_pair_listener_registration() {
        let mut machine = DragMachine::new();
        let mut listeners = CountingListeners::default();

        let id = machine.begin(Channel::Handle, &mut listeners).unwrap();
        assert_eq!(machine.state(), DragState::DraggingHandle);
        assert_eq!(machine.session_id(), Some(id));
        assert_eq!(listeners.live, vec![id]);

        assert_eq!(machine.end(&mut listeners), Some(Channel::Handle));
        assert_eq!(machine.state(), DragState::Idle);
        assert!(listeners.live.is_empty());
        assert_eq!((listeners.listens, listeners.unlistens), (1, 1));
    }

    #[test]
    fn drags_are_mutually_exclusive() {
        let mut machine = DragMachine::new();
        let mut listeners = CountingListeners::default();

        machine.begin(Channel::Fill, &mut listeners).unwrap();
        assert_eq!(machine.resolve_press(PressTarget::Handle, true), None);
        assert!(machine.begin(Channel::Handle, &mut listeners).is_none());
        assert_eq!(machine.state(), DragState::DraggingFill);
        assert_eq!(listeners.listens, 1);
    }

    #[test]
    fn end_while_idle_is_a_no_op() {
        let mut machine = DragMachine::new();
        let mut listeners = CountingListeners::default();
        assert_eq!(machine.end(&mut listeners), None);
        assert_eq!(listeners.unlistens, 0);
    }

    #[test]
    fn sessions_get_fresh_ids() {
        let mut machine = DragMachine::new();
        let mut listeners = CountingListeners::default();
        let first = machine.begin(Channel::Fill, &mut listeners).unwrap();
        machine.end(&mut listeners);
        let second = machine.begin(Channel::Fill, &mut listeners).unwrap();
        assert_ne!(first, second);
        assert_eq!(second.to_string(), "drag#1");
    }
}
