//! Portrait and landscape renderers over one [`RoutineView`].

use crate::core::Action;
use crate::view::model::{Orientation, RoutineView};
use crate::view::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const BUTTON_HEIGHT: u16 = 3;

/// Draw the screen in the given orientation.
pub fn draw(frame: &mut Frame, view: &RoutineView, orientation: Orientation, palette: &Palette) {
    let area = frame.area();
    match orientation {
        Orientation::Portrait => draw_portrait(frame, view, area, palette),
        Orientation::Landscape => draw_landscape(frame, view, area, palette),
    }
}

fn draw_portrait(frame: &mut Frame, view: &RoutineView, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),                 // Info
            Constraint::Length(BUTTON_HEIGHT * 3), // Controls
            Constraint::Min(0),
            Constraint::Length(1), // Hint
        ])
        .split(area);

    draw_info(frame, view, chunks[0], palette);
    draw_controls(frame, view, chunks[1], palette);
    draw_hint(frame, view, chunks[3], palette);
}

fn draw_landscape(frame: &mut Frame, view: &RoutineView, area: Rect, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let left = centered_vertically(columns[0], 5);
    let right = centered_vertically(columns[1], BUTTON_HEIGHT * 3);

    draw_info(frame, view, left, palette);
    draw_controls(frame, view, right, palette);
    draw_hint(frame, view, rows[1], palette);
}

fn draw_info(frame: &mut Frame, view: &RoutineView, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::styled(view.title.as_str(), palette.title()),
        Line::raw(""),
        Line::styled(view.score.as_str(), palette.score(view.band)),
        Line::styled(view.element.as_str(), palette.text()),
        Line::styled(view.status.as_str(), palette.text()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_controls(frame: &mut Frame, view: &RoutineView, area: Rect, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BUTTON_HEIGHT); 3])
        .split(area);

    for (action, row) in Action::ALL.into_iter().zip(rows.iter()) {
        let enabled = view.controls.enabled(action);
        let style = palette.control(enabled);
        let label = format!("[{}] {}", key_hint(action), view.label(action));
        let button = Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(button, *row);
    }
}

fn draw_hint(frame: &mut Frame, view: &RoutineView, area: Rect, palette: &Palette) {
    let hint = Paragraph::new(Line::styled(
        view.locale.strings().quit_hint,
        palette.control(false),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

fn centered_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

pub fn key_hint(action: Action) -> char {
    match action {
        Action::Perform => 'p',
        Action::Deduct => 'd',
        Action::Reset => 'r',
    }
}
