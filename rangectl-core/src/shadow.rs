//! In-memory render target and listener registry.
//!
//! `ShadowTree` records what a control rendered: element geometry, text,
//! style markers, and which drag session (if any) currently holds the
//! document listeners. Hosts that paint elsewhere (a terminal, a log) read
//! it back after each interaction.

use std::collections::{BTreeMap, BTreeSet};

use crate::drag::SessionId;
use crate::geometry::TrackGeometry;
use crate::host::{DocumentListeners, Marker, RenderTarget, TextSlot};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowTree {
    track: TrackGeometry,
    fill_width: f64,
    handle_left: f64,
    texts: BTreeMap<TextSlot, String>,
    markers: BTreeSet<Marker>,
    listening: Option<SessionId>,
    listen_count: usize,
    unlisten_count: usize,
}

impl ShadowTree {
    pub fn new(track: TrackGeometry) -> Self {
        Self {
            track,
            ..Self::default()
        }
    }

    /// Update the layout. Takes effect on the next geometry query.
    pub fn set_track(&mut self, track: TrackGeometry) {
        self.track = track;
    }

    pub fn track(&self) -> TrackGeometry {
        self.track
    }

    pub fn fill_width(&self) -> f64 {
        self.fill_width
    }

    pub fn handle_left(&self) -> f64 {
        self.handle_left
    }

    /// Rendered text of `slot`; empty if never set.
    pub fn text(&self, slot: TextSlot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or("")
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.markers.iter().copied()
    }

    /// Session currently holding the document listeners.
    pub fn listening(&self) -> Option<SessionId> {
        self.listening
    }

    pub fn listen_count(&self) -> usize {
        self.listen_count
    }

    pub fn unlisten_count(&self) -> usize {
        self.unlisten_count
    }
}

impl RenderTarget for ShadowTree {
    fn track_geometry(&self) -> TrackGeometry {
        self.track
    }

    fn set_fill_width(&mut self, px: f64) {
        self.fill_width = px;
    }

    fn set_handle_left(&mut self, px: f64) {
        self.handle_left = px;
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_marker(&mut self, marker: Marker, present: bool) {
        if present {
            self.markers.insert(marker);
        } else {
            self.markers.remove(&marker);
        }
    }
}

impl DocumentListeners for ShadowTree {
    fn listen(&mut self, session: SessionId) {
        debug_assert!(self.listening.is_none(), "listeners already registered");
        self.listening = Some(session);
        self.listen_count += 1;
    }

    fn unlisten(&mut self, session: SessionId) {
        debug_assert_eq!(self.listening, Some(session), "releasing a foreign session");
        if self.listening == Some(session) {
            self.listening = None;
        }
        self.unlisten_count += 1;
    }
}
