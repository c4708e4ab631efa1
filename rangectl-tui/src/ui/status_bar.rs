//! Bottom status bar: key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " q:Quit Tab:Focus h:Hide handle r:Reset c:Clear log",
        theme::muted(),
    )];

    if let Some(slot) = app.slots.get(app.focused) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} [{:?}]", slot.id, slot.control.drag_state()),
            theme::secondary(),
        ));
    }

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
