//! Host capabilities: what a host environment provides to a control and
//! how it drives one.
//!
//! A host supplies an opaque render target (element geometry, text, style
//! markers) and document-scoped pointer listeners. It drives the control
//! through [`HostElement`] for lifecycle and attributes, and through the
//! control's pointer methods for input.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeName, Attributes};
use crate::drag::SessionId;
use crate::geometry::TrackGeometry;

/// Text-bearing parts of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextSlot {
    /// Caption above the track (`label` attribute).
    Description,
    /// Display text of the fill value.
    Value,
    /// Display text of the handle value (dual variant only).
    HandleValue,
}

/// Boolean style markers exposed for external styling hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    DraggingFill,
    DraggingHandle,
    HandleHidden,
}

impl Marker {
    /// Attribute name a DOM host would reflect this marker as.
    pub fn attribute_name(self) -> &'static str {
        match self {
            Marker::DraggingFill => "dragging-fill",
            Marker::DraggingHandle => "dragging-handle",
            Marker::HandleHidden => "hide-handle",
        }
    }
}

/// Resolved originating target of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressTarget {
    Handle,
    Fill,
    Track,
    /// The control's own bounding box outside the track parts.
    Host,
    /// Anything that is not part of the control.
    Outside,
}

/// What the control did with a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// A drag started; the host should suppress default behaviour.
    Consumed,
    /// No transition happened.
    Ignored,
}

/// The owned, opaque render target of a control.
pub trait RenderTarget {
    /// Current track bounding box. Queried on every use, never cached.
    fn track_geometry(&self) -> TrackGeometry;
    fn set_fill_width(&mut self, px: f64);
    fn set_handle_left(&mut self, px: f64);
    fn set_text(&mut self, slot: TextSlot, text: &str);
    fn set_marker(&mut self, marker: Marker, present: bool);
}

/// Document-scoped move and one-shot release listeners.
///
/// `listen` is called once when a drag session starts and `unlisten` exactly
/// once with the same session when it ends, whatever ends it.
pub trait DocumentListeners {
    fn listen(&mut self, session: SessionId);
    fn unlisten(&mut self, session: SessionId);
}

/// Everything a control needs from its host environment.
pub trait Host: RenderTarget + DocumentListeners {}

impl<T: RenderTarget + DocumentListeners> Host for T {}

/// Lifecycle capability set a host element satisfies.
pub trait HostElement {
    /// Attributes whose changes the host should deliver.
    fn observed_attributes(&self) -> &'static [AttributeName];
    /// Initialize state from the element's attributes and render.
    fn mount(&mut self, attributes: &Attributes);
    /// Release every document-scoped resource the element holds.
    fn unmount(&mut self);
    /// An observed attribute changed; `None` means it was removed.
    fn attribute_changed(&mut self, name: AttributeName, value: Option<&str>);
    /// Re-render geometry and text from current state.
    fn render(&mut self);
}
