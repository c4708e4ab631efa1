//! Pointer/attribute scenarios replayed against a headless control.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use rangectl_core::{
    Attributes, ChangeEvent, ControlConfig, DragState, HostElement, PressTarget, RangeControl,
    ShadowTree, TextSlot, TrackGeometry,
};

/// A recorded interaction: mount with `attributes`, then apply `steps`.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(flatten)]
    pub config: ControlConfig,
    pub track: TrackGeometry,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Press { x: f64, target: PressTarget },
    Move { x: f64 },
    Release,
    /// Attribute change; an absent `value` removes the attribute.
    Attribute { name: String, value: Option<String> },
    SetValue { value: f64 },
    SetHandleValue { value: f64 },
    Unmount,
}

/// Rendered state after the last step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub fill_width: f64,
    pub handle_left: f64,
    pub description: String,
    pub value_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_value_text: Option<String>,
    pub markers: Vec<&'static str>,
    pub drag_state: DragState,
    pub listening: bool,
}

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct Replay {
    pub events: Vec<ChangeEvent>,
    pub summary: RenderSummary,
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid scenario {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Mount a fresh control and apply every step in order.
    pub fn replay(&self) -> Result<Replay> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut control = RangeControl::new(self.config, ShadowTree::new(self.track));
        let sink = Rc::clone(&events);
        control.subscribe(move |event| sink.borrow_mut().push(*event));
        control.mount(&self.attributes);

        for (index, step) in self.steps.iter().enumerate() {
            debug!("step {index}: {step:?}");
            match step {
                Step::Press { x, target } => {
                    control.pointer_down(*x, *target);
                }
                Step::Move { x } => control.pointer_move(*x),
                Step::Release => control.pointer_up(),
                Step::Attribute { name, value } => control
                    .set_attribute(name, value.as_deref())
                    .with_context(|| format!("step {index}"))?,
                Step::SetValue { value } => {
                    control.set_value(*value);
                }
                Step::SetHandleValue { value } => {
                    control.set_handle_value(*value);
                }
                Step::Unmount => control.unmount(),
            }
        }

        let summary = summarize(&control);
        drop(control);
        let events = events.take();
        Ok(Replay { events, summary })
    }
}

fn summarize(control: &RangeControl<ShadowTree>) -> RenderSummary {
    let tree = control.host();
    RenderSummary {
        fill_width: tree.fill_width(),
        handle_left: tree.handle_left(),
        description: tree.text(TextSlot::Description).to_string(),
        value_text: tree.text(TextSlot::Value).to_string(),
        handle_value_text: control
            .variant()
            .has_handle()
            .then(|| tree.text(TextSlot::HandleValue).to_string()),
        markers: tree.markers().map(|m| m.attribute_name()).collect(),
        drag_state: control.drag_state(),
        listening: tree.listening().is_some(),
    }
}
