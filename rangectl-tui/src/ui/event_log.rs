//! Change notification log, newest first.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(" Events ({}) ", app.event_log.len()))
        .title_style(theme::panel_title(false));

    let visible = usize::from(block.inner(area).height);
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .take(visible)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.timestamp.format("%H:%M:%S%.3f ").to_string(), theme::muted()),
                Span::styled(format!("{:<12} ", entry.control_id), theme::neutral()),
                Span::styled(entry.payload(), theme::text()),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
