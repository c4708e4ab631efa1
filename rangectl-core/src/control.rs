//! Range control: the consolidated single/dual-channel slider.
//!
//! Ties the pieces together: pointer input runs through the drag state
//! machine and geometry mapper, attribute changes through the
//! synchronization guards, and both end in the value store. Every accepted
//! value change re-renders geometry, then text, then notifies subscribers.

use log::{debug, trace};

use crate::attributes::{parse_float, parse_or, AttributeError, AttributeName, Attributes};
use crate::config::{ControlConfig, Variant};
use crate::drag::{Channel, DragMachine, DragState};
use crate::event::{ChangeEvent, EventEmitter, SubscriptionId};
use crate::host::{Disposition, Host, HostElement, Marker, PressTarget, TextSlot};
use crate::normalize::{DisplayRange, DEFAULT_MAX, DEFAULT_MIN};
use crate::store::ValueStore;

/// A range control bound to its host.
#[derive(Debug)]
pub struct RangeControl<H: Host> {
    config: ControlConfig,
    host: H,
    store: ValueStore,
    range: DisplayRange,
    unit: String,
    label: String,
    handle_hidden: bool,
    drag: DragMachine,
    emitter: EventEmitter,
    mounted: bool,
}

impl<H: Host> RangeControl<H> {
    /// An unmounted control with default state (values 0, range 0..100).
    pub fn new(config: ControlConfig, host: H) -> Self {
        let store = match config.variant {
            Variant::Single => ValueStore::single(),
            Variant::Dual => ValueStore::dual(),
        };
        Self {
            config,
            host,
            store,
            range: DisplayRange::default(),
            unit: String::new(),
            label: String::new(),
            handle_hidden: false,
            drag: DragMachine::new(),
            emitter: EventEmitter::new(),
            mounted: false,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to update layout before the next event.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Normalized fill value.
    pub fn value(&self) -> f64 {
        self.store.fill()
    }

    /// Normalized handle value; always 0 for single-channel controls.
    pub fn handle_value(&self) -> f64 {
        self.store.handle()
    }

    pub fn display_range(&self) -> DisplayRange {
        self.range
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_handle_hidden(&self) -> bool {
        self.handle_hidden
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Rendered text of the fill value.
    pub fn display_text(&self) -> String {
        self.range.format(self.store.fill(), &self.unit)
    }

    /// Rendered text of the handle value (dual-channel only).
    pub fn handle_display_text(&self) -> Option<String> {
        self.store
            .has_handle()
            .then(|| self.range.format(self.store.handle(), &self.unit))
    }

    /// Current notification payload.
    pub fn snapshot(&self) -> ChangeEvent {
        self.store.snapshot(&self.range)
    }

    // ── Notifications ──────────────────────────────────────────────────

    pub fn subscribe(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) -> SubscriptionId {
        self.emitter.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    // ── Value setters ──────────────────────────────────────────────────

    /// Set the fill value. Returns true if it changed (and was notified).
    pub fn set_value(&mut self, value: f64) -> bool {
        self.apply(Channel::Fill, value)
    }

    /// Set the handle value. Suppressed while the handle is hidden and on
    /// single-channel controls.
    pub fn set_handle_value(&mut self, value: f64) -> bool {
        if self.handle_hidden {
            debug!("handle hidden; ignoring handle value {value}");
            return false;
        }
        self.apply(Channel::Handle, value)
    }

    /// Show or hide the handle channel.
    ///
    /// Hiding it during a handle drag ends the drag as if the pointer had
    /// been released and resets the handle value to 0.
    pub fn set_handle_hidden(&mut self, hidden: bool) {
        if !self.store.has_handle() || hidden == self.handle_hidden {
            return;
        }
        self.handle_hidden = hidden;
        self.host.set_marker(Marker::HandleHidden, hidden);

        if hidden && self.drag.is_dragging(Channel::Handle) {
            debug!("handle hidden during drag; forcing release");
            self.release_drag();
            self.apply(Channel::Handle, 0.0);
        }
        self.render_position();
    }

    // ── Pointer input ──────────────────────────────────────────────────

    /// Pointer press on `target` at horizontal coordinate `x`.
    pub fn pointer_down(&mut self, x: f64, target: PressTarget) -> Disposition {
        if !self.mounted {
            return Disposition::Ignored;
        }
        let handle_interactive = self.store.has_handle() && !self.handle_hidden;
        let Some(channel) = self.drag.resolve_press(target, handle_interactive) else {
            return Disposition::Ignored;
        };
        let Some(session) = self.drag.begin(channel, &mut self.host) else {
            return Disposition::Ignored;
        };
        self.host.set_marker(channel.drag_marker(), true);
        debug!("{channel:?} drag started ({session})");

        // A fill press doubles as the first move.
        if channel == Channel::Fill {
            self.update_from_pointer(x);
        }
        Disposition::Consumed
    }

    /// Document-level pointer move. Ignored unless a drag is active.
    pub fn pointer_move(&mut self, x: f64) {
        if self.drag.captured().is_some() {
            self.update_from_pointer(x);
        }
    }

    /// Document-level pointer release. Ends the active drag, if any.
    pub fn pointer_up(&mut self) {
        self.release_drag();
    }

    // ── Attributes ─────────────────────────────────────────────────────

    /// String-keyed attribute entry point.
    ///
    /// Rejects unknown names and names this variant does not observe without
    /// touching state.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        let name: AttributeName = name.parse()?;
        if !self.observed_attributes().contains(&name) {
            return Err(AttributeError::NotObserved {
                name,
                variant: self.config.variant,
            });
        }
        self.attribute_changed(name, value);
        Ok(())
    }

    // ── Internals ──────────────────────────────────────────────────────

    /// Clamp, store, and on change re-render and notify.
    fn apply(&mut self, channel: Channel, raw: f64) -> bool {
        if !self.store.set(channel, raw) {
            return false;
        }
        self.render_position();
        self.render_display();
        let event = self.store.snapshot(&self.range);
        trace!("{channel:?} -> {}", self.store.get(channel));
        self.emitter.emit(&event);
        true
    }

    fn update_from_pointer(&mut self, x: f64) {
        let track = self.host.track_geometry();
        match self.drag.captured() {
            Some(Channel::Fill) => {
                self.apply(Channel::Fill, track.fill_value_at(x));
            }
            Some(Channel::Handle) if !self.handle_hidden => {
                let value = track.handle_value_at(x, self.config.handle_width);
                self.apply(Channel::Handle, value);
            }
            _ => {}
        }
    }

    fn release_drag(&mut self) -> Option<Channel> {
        let session = self.drag.session_id()?;
        let channel = self.drag.end(&mut self.host)?;
        self.host.set_marker(channel.drag_marker(), false);
        debug!("{channel:?} drag ended ({session})");
        Some(channel)
    }

    fn render_position(&mut self) {
        let track = self.host.track_geometry();
        self.host.set_fill_width(track.fill_width(self.store.fill()));
        if self.store.has_handle() {
            let left = if self.handle_hidden {
                0.0
            } else {
                track.handle_left(self.store.handle(), self.config.handle_width)
            };
            self.host.set_handle_left(left);
        }
    }

    fn render_display(&mut self) {
        let text = self.display_text();
        self.host.set_text(TextSlot::Value, &text);
        if let Some(text) = self.handle_display_text() {
            self.host.set_text(TextSlot::HandleValue, &text);
        }
    }
}

impl<H: Host> HostElement for RangeControl<H> {
    fn observed_attributes(&self) -> &'static [AttributeName] {
        AttributeName::observed(self.config.variant)
    }

    fn mount(&mut self, attributes: &Attributes) {
        debug!("{} control mounted", self.config.variant);
        self.mounted = true;

        self.label = attributes.get(AttributeName::Label).unwrap_or("").to_string();
        self.range = DisplayRange::new(
            parse_or(attributes.get(AttributeName::Min), DEFAULT_MIN),
            parse_or(attributes.get(AttributeName::Max), DEFAULT_MAX),
        );
        self.unit = attributes.get(AttributeName::Unit).unwrap_or("").to_string();

        self.apply(Channel::Fill, parse_or(attributes.get(AttributeName::Value), 0.0));
        if self.store.has_handle() {
            self.apply(
                Channel::Handle,
                parse_or(attributes.get(AttributeName::HandleValue), 0.0),
            );
            self.set_handle_hidden(attributes.has(AttributeName::HideHandle));
        }

        self.render();
    }

    fn unmount(&mut self) {
        debug!("{} control unmounted", self.config.variant);
        self.release_drag();
        self.mounted = false;
    }

    fn attribute_changed(&mut self, name: AttributeName, value: Option<&str>) {
        debug!("attribute {name} changed to {value:?}");
        match name {
            AttributeName::Value => {
                if self.drag.is_dragging(Channel::Fill) {
                    return;
                }
                if let Some(v) = value.and_then(parse_float) {
                    self.apply(Channel::Fill, v);
                }
            }
            AttributeName::HandleValue => {
                if self.drag.is_dragging(Channel::Handle) {
                    return;
                }
                if let Some(v) = value.and_then(parse_float) {
                    self.set_handle_value(v);
                }
            }
            AttributeName::Label => {
                self.label = value.unwrap_or("").to_string();
                self.host.set_text(TextSlot::Description, &self.label);
            }
            AttributeName::Min => {
                self.range.min = parse_or(value, DEFAULT_MIN);
                self.render_display();
            }
            AttributeName::Max => {
                self.range.max = parse_or(value, DEFAULT_MAX);
                self.render_display();
            }
            AttributeName::Unit => {
                self.unit = value.unwrap_or("").to_string();
                self.render_display();
            }
            AttributeName::HideHandle => self.set_handle_hidden(value.is_some()),
        }
    }

    fn render(&mut self) {
        self.host.set_text(TextSlot::Description, &self.label);
        if self.store.has_handle() {
            self.host.set_marker(Marker::HandleHidden, self.handle_hidden);
        }
        self.render_position();
        self.render_display();
    }
}

impl<H: Host> Drop for RangeControl<H> {
    fn drop(&mut self) {
        self.release_drag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TrackGeometry;
    use crate::shadow::ShadowTree;

    fn mounted(config: ControlConfig, attrs: Attributes) -> RangeControl<ShadowTree> {
        let mut control = RangeControl::new(config, ShadowTree::new(TrackGeometry::new(0.0, 200.0)));
        control.mount(&attrs);
        control
    }

    #[test]
    fn mount_defaults() {
        let control = mounted(ControlConfig::single(), Attributes::new());
        assert_eq!(control.value(), 0.0);
        assert_eq!(control.display_range(), DisplayRange::new(0.0, 100.0));
        assert_eq!(control.unit(), "");
        assert_eq!(control.host().text(TextSlot::Value), "0");
    }

    #[test]
    fn mount_clamps_initial_values() {
        let attrs = Attributes::new().with("value", "3").with("handle-value", "-1");
        let control = mounted(ControlConfig::dual(), attrs);
        assert_eq!(control.value(), 1.0);
        assert_eq!(control.handle_value(), 0.0);
    }

    #[test]
    fn malformed_bounds_fall_back() {
        let attrs = Attributes::new().with("min", "low").with("max", "high");
        let control = mounted(ControlConfig::single(), attrs);
        assert_eq!(control.display_range(), DisplayRange::new(0.0, 100.0));
    }

    #[test]
    fn unmounted_control_ignores_presses() {
        let mut control = RangeControl::new(ControlConfig::single(), ShadowTree::default());
        assert_eq!(control.pointer_down(10.0, PressTarget::Track), Disposition::Ignored);
        assert_eq!(control.drag_state(), DragState::Idle);
    }

    #[test]
    fn single_control_rejects_handle_attributes() {
        let mut control = mounted(ControlConfig::single(), Attributes::new());
        assert_eq!(
            control.set_attribute("handle-value", Some("0.5")),
            Err(AttributeError::NotObserved {
                name: AttributeName::HandleValue,
                variant: Variant::Single,
            })
        );
        assert!(matches!(
            control.set_attribute("colour", Some("red")),
            Err(AttributeError::Unknown(_))
        ));
        assert!(control.set_attribute("value", Some("0.5")).is_ok());
        assert_eq!(control.value(), 0.5);
    }

    #[test]
    fn single_control_handle_press_drags_fill() {
        let mut control = mounted(ControlConfig::single(), Attributes::new());
        assert_eq!(control.pointer_down(50.0, PressTarget::Handle), Disposition::Consumed);
        assert_eq!(control.drag_state(), DragState::DraggingFill);
        assert_eq!(control.value(), 0.25);
    }

    #[test]
    fn label_attribute_updates_description() {
        let mut control = mounted(ControlConfig::dual(), Attributes::new().with("label", "Gain"));
        assert_eq!(control.host().text(TextSlot::Description), "Gain");
        control.attribute_changed(AttributeName::Label, None);
        assert_eq!(control.label(), "");
        assert_eq!(control.host().text(TextSlot::Description), "");
    }
}
