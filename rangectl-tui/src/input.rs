//! Input dispatch: keys drive the focused control's attributes, mouse
//! events drive pointer input.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::debug;

use rangectl_core::{AttributeName, Disposition, HostElement, PressTarget, Variant};

use crate::app::AppState;
use crate::cells;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::Char('c') => {
            app.event_log.clear();
            app.set_status("Event log cleared");
        }
        KeyCode::Char('h') => toggle_hide_handle(app),
        KeyCode::Char('r') => reset_value(app),
        _ => {}
    }
}

/// Flip the `hide-handle` attribute on the focused control.
fn toggle_hide_handle(app: &mut AppState) {
    let Some(slot) = app.focused_slot_mut() else {
        return;
    };
    if slot.control.variant() != Variant::Dual {
        let id = slot.id.clone();
        app.set_warning(format!("{id} has no handle"));
        return;
    }
    let hidden = slot.control.is_handle_hidden();
    let value = if hidden { None } else { Some("") };
    slot.control.attribute_changed(AttributeName::HideHandle, value);
    let msg = format!(
        "{}: handle {}",
        slot.id,
        if hidden { "shown" } else { "hidden" }
    );
    app.set_status(msg);
}

/// Set the focused control's `value` attribute to 0.5.
fn reset_value(app: &mut AppState) {
    let Some(slot) = app.focused_slot_mut() else {
        return;
    };
    let result = slot.control.set_attribute("value", Some("0.5"));
    let idle = slot.control.drag_state().is_idle();
    let id = slot.id.clone();
    match result {
        Ok(()) if idle => app.set_status(format!("{id}: value=0.5")),
        Ok(()) => app.set_warning(format!("{id}: value ignored during drag")),
        Err(e) => app.set_warning(e.to_string()),
    }
}

/// Handle a mouse event.
///
/// Presses go to the control under the cursor; drags and releases go to
/// whichever control currently holds document listeners, wherever the
/// pointer is.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let x = cells::column_to_px(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(index) = app.control_at(mouse.column, mouse.row) else {
                return;
            };
            app.focused = index;
            let target = app.press_target(index, mouse.column, mouse.row);
            if target == PressTarget::Outside {
                return;
            }
            let slot = &mut app.slots[index];
            if slot.control.pointer_down(x, target) == Disposition::Consumed {
                debug!("{} consumed press on {target:?} at {x}px", slot.id);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            for slot in app.capturing() {
                slot.control.pointer_move(x);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            for slot in app.capturing() {
                slot.control.pointer_up();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::laid_out_demo;
    use crossterm::event::KeyEventState;
    use rangectl_core::DragState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut app = laid_out_demo();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = laid_out_demo();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = laid_out_demo();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert!(app.running);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = laid_out_demo();
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused, 1);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused, 0);
    }

    #[test]
    fn h_toggles_handle_on_dual_only() {
        let mut app = laid_out_demo();
        handle_key(&mut app, key(KeyCode::Char('h')));
        assert!(matches!(app.status_message, Some((_, crate::app::StatusLevel::Warning))));

        app.focused = 1;
        handle_key(&mut app, key(KeyCode::Char('h')));
        assert!(app.slots[1].control.is_handle_hidden());
        handle_key(&mut app, key(KeyCode::Char('h')));
        assert!(!app.slots[1].control.is_handle_hidden());
    }

    #[test]
    fn r_sets_value_to_half() {
        let mut app = laid_out_demo();
        handle_key(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.slots[0].control.value(), 0.5);
        app.drain_events();
        assert_eq!(app.event_log.len(), 1);

        handle_key(&mut app, key(KeyCode::Char('c')));
        assert!(app.event_log.is_empty());
    }

    #[test]
    fn press_drag_release_moves_fill() {
        let mut app = laid_out_demo();
        // Press on brightness track at column 12 -> 100 px -> (100-16)/320
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 12, 1));
        assert_eq!(app.slots[0].control.drag_state(), DragState::DraggingFill);
        assert_eq!(app.slots[0].control.value(), 84.0 / 320.0);

        // Drag far past the right edge, off the control entirely.
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 70, 20));
        assert_eq!(app.slots[0].control.value(), 1.0);

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 70, 20));
        assert!(app.slots[0].control.drag_state().is_idle());
        assert_eq!(app.capturing().count(), 0);
    }

    #[test]
    fn press_outside_every_control_does_nothing() {
        let mut app = laid_out_demo();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 60, 30));
        assert_eq!(app.capturing().count(), 0);
        assert_eq!(app.focused, 0);
    }

    #[test]
    fn press_focuses_control() {
        let mut app = laid_out_demo();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 31, 6));
        assert_eq!(app.focused, 1);
        assert_eq!(app.slots[1].control.drag_state(), DragState::DraggingHandle);
    }
}
