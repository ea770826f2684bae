use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::field::{CONFIRM_TITLE, FieldSpec};
use crate::core::state::{Focus, FormState, Status};
use crate::tui::component::Component;
use crate::tui::components::{Banner, BannerKind, Choice, StatusPanel};
use crate::tui::theme;
use crate::tui::TuiState;

pub const HELP_TEXT: &str = "tab/enter next • shift+tab back • ←/→ choose • esc quit";

/// Columns reserved left of each label for the focus marker.
const MARKER_WIDTH: u16 = 2;

pub fn draw_ui(frame: &mut Frame, state: &FormState, tui: &mut TuiState) {
    let area = content_area(frame.area(), tui.max_width);

    match &state.status {
        Status::Completed(record) => {
            StatusPanel::new(record).render(frame, area);
        }
        Status::InProgress | Status::Aborted => draw_form(frame, area, state, tui),
    }
}

/// Clamp to the configured width and apply the outer padding (top 1, left 1, right 4).
fn content_area(frame_area: Rect, max_width: u16) -> Rect {
    let width = frame_area.width.min(max_width);
    Rect {
        x: frame_area.x + 1,
        y: frame_area.y + 1,
        width: width.saturating_sub(5),
        height: frame_area.height.saturating_sub(1),
    }
    .intersection(frame_area)
}

fn draw_form(frame: &mut Frame, area: Rect, state: &FormState, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let rows = state.spec.len() as u16 + 1;
    let layout = Layout::vertical([Length(1), Length(1), Length(rows), Length(1), Length(1), Min(0)]);
    let [header_area, _, form_area, _, footer_area, _] = layout.areas(area);

    let (mut header, mut footer) = if state.errors.is_empty() {
        let help = if tui.show_help { HELP_TEXT } else { "" };
        (
            Banner::new(tui.title.clone(), BannerKind::Normal),
            Banner::new(help, BannerKind::Normal),
        )
    } else {
        (
            Banner::new(state.error_summary(), BannerKind::Error),
            Banner::new("", BannerKind::Error),
        )
    };
    header.render(frame, header_area);
    draw_fields(frame, form_area, state, tui);
    footer.render(frame, footer_area);
}

fn draw_fields(frame: &mut Frame, area: Rect, state: &FormState, tui: &mut TuiState) {
    let label_width = state
        .spec
        .fields()
        .iter()
        .map(|f| f.key.chars().count())
        .chain(std::iter::once(CONFIRM_TITLE.chars().count()))
        .max()
        .unwrap_or(0) as u16
        + 1;

    let row_areas = Layout::vertical(vec![Constraint::Length(1); state.spec.len() + 1]).split(area);
    let focused = state.focus;

    for (index, field) in state.spec.fields().iter().enumerate() {
        let [label_area, value_area] = split_row(row_areas[index], label_width);
        let is_focused = index == focused && state.is_in_progress();
        render_label(frame, label_area, &field.key, is_focused);

        if is_focused {
            draw_focused_value(frame, value_area, field, tui);
        } else {
            let answer = state.answer(&field.key);
            frame.render_widget(
                Paragraph::new(answer.to_string()).style(Style::default().fg(Color::Gray)),
                value_area,
            );
        }
    }

    let confirm_row = row_areas[state.spec.len()];
    let [label_area, value_area] = split_row(confirm_row, label_width);
    let confirm_focused = matches!(state.focused(), Focus::Confirm) && state.is_in_progress();
    render_label(frame, label_area, CONFIRM_TITLE, confirm_focused);
    Choice::new(&tui.confirm, confirm_focused).render(frame, value_area);
}

fn draw_focused_value(frame: &mut Frame, area: Rect, field: &FieldSpec, tui: &mut TuiState) {
    if field.is_choice() {
        Choice::new(&tui.choice, true).render(frame, area);
    } else {
        tui.text_input.focused = true;
        tui.text_input.render(frame, area);
    }
}

fn split_row(row: Rect, label_width: u16) -> [Rect; 2] {
    Layout::horizontal([
        Constraint::Length(MARKER_WIDTH + label_width),
        Constraint::Min(0),
    ])
    .areas(row)
}

fn render_label(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let marker = if focused { "┃ " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(theme::INDIGO)),
        Span::styled(label.to_string(), theme::label(focused)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{fill, test_config, test_state};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &FormState, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn tui_for(state: &FormState) -> TuiState {
        let mut tui = TuiState::new(&test_config());
        tui.sync(state);
        tui
    }

    #[test]
    fn test_in_progress_shows_header_fields_and_help() {
        let state = test_state();
        let mut tui = tui_for(&state);
        let text = render(&state, &mut tui);
        assert!(text.contains("{Create} a {thing}"));
        for key in ["key", "name", "description", "includeInSnippet", "All done?"] {
            assert!(text.contains(key), "missing {key}");
        }
        assert!(text.contains("Wait, no"));
        assert!(text.contains("esc quit"));
    }

    #[test]
    fn test_errors_replace_header_and_footer() {
        let mut state = test_state();
        update(&mut state, Action::NextField);
        let mut tui = tui_for(&state);
        let text = render(&state, &mut tui);
        assert!(text.contains("key is a required field"));
        assert!(!text.contains("{Create} a {thing}"));
        assert!(!text.contains("esc quit"));
    }

    #[test]
    fn test_hidden_help() {
        let state = test_state();
        let mut tui = tui_for(&state);
        tui.show_help = false;
        let text = render(&state, &mut tui);
        assert!(!text.contains("esc quit"));
    }

    #[test]
    fn test_completed_shows_record_instead_of_form() {
        let mut state = test_state();
        fill(&mut state, "key", "abc");
        fill(&mut state, "name", "Thing");
        update(&mut state, Action::Confirm(true));
        let mut tui = tui_for(&state);
        let text = render(&state, &mut tui);
        assert!(text.contains("\"name\": \"Thing\""));
        assert!(!text.contains("All done?"));
        assert!(!text.contains("{Create} a {thing}"));
    }

    #[test]
    fn test_unfocused_answers_are_shown() {
        let mut state = test_state();
        fill(&mut state, "key", "abc");
        state.focus = 1;
        let mut tui = tui_for(&state);
        let text = render(&state, &mut tui);
        assert!(text.contains("abc"));
    }

    #[test]
    fn test_narrow_terminal_does_not_panic() {
        let state = test_state();
        let mut tui = tui_for(&state);
        let backend = TestBackend::new(8, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &state, &mut tui)).unwrap();
    }

    #[test]
    fn test_content_area_respects_max_width() {
        let area = content_area(Rect::new(0, 0, 200, 30), 80);
        assert_eq!(area, Rect::new(1, 1, 75, 29));
    }
}
