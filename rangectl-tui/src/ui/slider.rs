//! One range control: bordered block, painted track, display text.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use rangectl_core::{Channel, Marker, ShadowTree, TextSlot, Variant};

use crate::app::{ControlLayout, Slot};
use crate::{cells, theme};

/// What a single track cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Fill,
    Handle,
}

/// Block area and the track inside it, one cell in from each border.
pub fn layout(area: Rect) -> ControlLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let track = Rect {
        x: inner.x.saturating_add(1),
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: inner.height.min(1),
    };
    ControlLayout { area, track }
}

/// Cell-by-cell picture of a track `width` cells wide.
///
/// The handle paints over the fill where they overlap.
pub fn paint(tree: &ShadowTree, width: u16, handle_width_px: f64, show_handle: bool) -> Vec<CellKind> {
    let mut row = vec![CellKind::Empty; usize::from(width)];
    let fill = usize::from(cells::px_to_cells(tree.fill_width(), width));
    row[..fill].fill(CellKind::Fill);

    if show_handle {
        let start = cells::px_to_cells(tree.handle_left(), width);
        let span = cells::px_to_cells(handle_width_px, width).max(1);
        let end = start.saturating_add(span).min(width);
        row[usize::from(start)..usize::from(end)].fill(CellKind::Handle);
    }
    row
}

pub fn render(f: &mut Frame, layout: ControlLayout, slot: &Slot, focused: bool) {
    let control = &slot.control;
    let tree = control.host();
    let dual = control.variant() == Variant::Dual;
    let show_handle = dual && !tree.has_marker(Marker::HandleHidden);

    let title = match tree.text(TextSlot::Description) {
        "" => format!(" {} ", slot.id),
        label => format!(" {label} "),
    };
    let mut readout = vec![Span::styled(tree.text(TextSlot::Value).to_string(), theme::accent())];
    if dual {
        readout.push(Span::raw(" / "));
        let style = if show_handle { theme::neutral() } else { theme::muted() };
        readout.push(Span::styled(tree.text(TextSlot::HandleValue).to_string(), style));
    }
    readout.push(Span::raw(" "));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(title)
        .title_style(theme::panel_title(focused))
        .title_bottom(Line::from(readout).right_aligned());
    f.render_widget(block, layout.area);

    if layout.track.width == 0 || layout.track.height == 0 {
        return;
    }

    let fill_dragging = tree.has_marker(Marker::DraggingFill);
    let handle_dragging = tree.has_marker(Marker::DraggingHandle);
    let spans: Vec<Span> = paint(tree, layout.track.width, control.config().handle_width, show_handle)
        .into_iter()
        .map(|kind| match kind {
            CellKind::Empty => Span::styled(" ", theme::track()),
            CellKind::Fill => Span::styled(" ", theme::channel(Channel::Fill, fill_dragging)),
            CellKind::Handle => Span::styled("▐", theme::channel(Channel::Handle, handle_dragging)),
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), layout.track);
}
