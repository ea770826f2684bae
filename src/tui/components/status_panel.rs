//! # StatusPanel Component
//!
//! Shown instead of the form once the session completes: the record as
//! indented JSON inside a rounded border.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use ratatui::Frame;

use crate::core::record::OutputRecord;
use crate::tui::component::Component;
use crate::tui::theme;

/// Outer width of the panel, borders included.
pub const PANEL_WIDTH: u16 = 48;

pub struct StatusPanel<'a> {
    pub record: &'a OutputRecord,
}

impl<'a> StatusPanel<'a> {
    pub fn new(record: &'a OutputRecord) -> Self {
        Self { record }
    }

    fn body(&self) -> String {
        self.record
            .to_pretty_json()
            .unwrap_or_else(|e| format!("could not render record: {e}"))
    }

    /// Rows needed: content + 2 borders + 2 padding.
    pub fn required_height(&self) -> u16 {
        self.body().lines().count() as u16 + 4
    }
}

impl Component for StatusPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [panel] = Layout::horizontal([Constraint::Max(PANEL_WIDTH)])
            .flex(Flex::Start)
            .areas(area);
        let [panel] = Layout::vertical([Constraint::Max(self.required_height())])
            .flex(Flex::Start)
            .areas(panel);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::INDIGO))
            .title(Line::styled(" Created ", theme::status_header()))
            .padding(Padding::new(2, 2, 1, 1));

        let paragraph = Paragraph::new(self.body()).block(block);
        frame.render_widget(paragraph, panel);
    }
}
