//! Range Control core: the interaction logic behind draggable range sliders.
//!
//! This crate contains everything a host environment needs to drive a
//! single-channel (fill) or dual-channel (fill + handle) slider:
//! - Normalization between [0,1] and display units
//! - Geometry mapping between pointer coordinates and normalized values
//! - Drag state machine with per-session document listener registration
//! - Attribute synchronization with feedback-loop suppression during drags
//! - Value store with clamping, change detection and notification fan-out
//!
//! The core never touches a real UI. Hosts implement [`host::RenderTarget`]
//! and [`host::DocumentListeners`] (or use the in-memory [`shadow::ShadowTree`])
//! and drive a [`control::RangeControl`] through [`host::HostElement`].

pub mod attributes;
pub mod config;
pub mod control;
pub mod drag;
pub mod event;
pub mod geometry;
pub mod host;
pub mod normalize;
pub mod shadow;
pub mod store;

pub use attributes::{AttributeError, AttributeName, Attributes};
pub use config::{ConfigError, ControlConfig, ControlSet, MountSpec, Variant};
pub use control::RangeControl;
pub use drag::{Channel, DragState};
pub use event::{ChangeEvent, EventEmitter, SubscriptionId};
pub use geometry::{TrackGeometry, HANDLE_WIDTH_PX};
pub use host::{Disposition, DocumentListeners, Host, HostElement, Marker, PressTarget, RenderTarget, TextSlot};
pub use normalize::DisplayRange;
pub use shadow::ShadowTree;
