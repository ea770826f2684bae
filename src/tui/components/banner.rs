//! # Banner Component
//!
//! One-line boundary drawn above and below the form: the text, then the rest
//! of the line filled with `/`.
//!
//! ```text
//!   {Create} a {thing} ///////////////////////////////////////////
//! ```
//!
//! The error variant uses red for both text and fill. Stateless: all data
//! comes in as props.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme;

const FILL: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Normal,
    Error,
}

pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
}

impl Banner {
    pub fn new(text: impl Into<String>, kind: BannerKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    fn styles(&self) -> (Style, Style) {
        match self.kind {
            BannerKind::Normal => (theme::header_text(), Style::default().fg(theme::INDIGO)),
            BannerKind::Error => (
                theme::error_header_text(),
                Style::default().fg(theme::RED),
            ),
        }
    }

    /// Build the banner line for a given width.
    pub fn line(&self, width: u16) -> Line<'static> {
        let (text_style, fill_style) = self.styles();
        let label = if self.text.is_empty() {
            String::new()
        } else {
            format!("  {} ", self.text)
        };
        let fill = (width as usize).saturating_sub(label.width());
        Line::from(vec![
            Span::styled(label, text_style),
            Span::styled(FILL.repeat(fill), fill_style),
        ])
    }
}

impl Component for Banner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line(area.width)), area);
    }
}
