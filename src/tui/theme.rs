//! Colors and styles shared by the components.

use ratatui::style::{Color, Modifier, Style};

pub const INDIGO: Color = Color::Rgb(0x75, 0x71, 0xF9);
pub const RED: Color = Color::Rgb(0xFE, 0x5F, 0x86);
pub const GREEN: Color = Color::Rgb(0x02, 0xBF, 0x87);
pub const HIGHLIGHT: Color = Color::Indexed(212);

pub fn header_text() -> Style {
    Style::default().fg(INDIGO).add_modifier(Modifier::BOLD)
}

pub fn error_header_text() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub fn status_header() -> Style {
    Style::default().fg(GREEN).add_modifier(Modifier::BOLD)
}

pub fn label(focused: bool) -> Style {
    if focused {
        Style::default().fg(INDIGO).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub fn selected_option(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(HIGHLIGHT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(HIGHLIGHT)
    }
}
