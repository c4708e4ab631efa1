//! Neon-on-charcoal theme tokens.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, fill)
//! - **Positive**: Neon green (handle)
//! - **Warning**: Neon orange (active drag)
//! - **Muted**: Steel blue (empty track, hidden handle)

use ratatui::style::{Color, Modifier, Style};

use rangectl_core::Channel;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub positive: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    pub fn neon() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color of a channel's painted cells; an active drag overrides it.
    pub fn channel_color(&self, channel: Channel, dragging: bool) -> Color {
        match (channel, dragging) {
            (_, true) => self.warning,
            (Channel::Fill, false) => self.accent,
            (Channel::Handle, false) => self.positive,
        }
    }
}

fn theme() -> Theme {
    Theme::default()
}

pub fn accent() -> Style {
    Style::default().fg(theme().accent)
}

pub fn muted() -> Style {
    Style::default().fg(theme().muted)
}

pub fn warning() -> Style {
    Style::default().fg(theme().warning)
}

pub fn neutral() -> Style {
    Style::default().fg(theme().neutral)
}

pub fn text() -> Style {
    Style::default().fg(theme().text_primary)
}

pub fn secondary() -> Style {
    Style::default().fg(theme().text_secondary)
}

pub fn panel_border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(focused: bool) -> Style {
    if focused {
        accent().add_modifier(Modifier::BOLD)
    } else {
        secondary()
    }
}

/// Background style for a painted channel segment.
pub fn channel(channel: Channel, dragging: bool) -> Style {
    Style::default().bg(theme().channel_color(channel, dragging))
}

/// Background style for the unfilled part of the track.
pub fn track() -> Style {
    Style::default().bg(Color::Rgb(40, 40, 48))
}
