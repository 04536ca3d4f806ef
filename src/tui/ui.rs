//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;
use tic_tac_toe::{Board, GameMode, Player, Position, Square};

/// Draws the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Menu => {
            draw_menu(frame, chunks[1], app.menu_choice());
            draw_help(frame, chunks[3], "Up/Down: Choose | Enter or 1/2: Start | Q: Quit");
            let hint = Paragraph::new("Choose a mode")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Status"));
            frame.render_widget(hint, chunks[2]);
        }
        Screen::Playing => {
            let last = app.session().state().last_move().map(|m| m.position);
            draw_board(frame, chunks[1], app.session().board(), app.cursor(), last);
            draw_status(frame, chunks[2], app);
            draw_help(
                frame,
                chunks[3],
                "Arrows: Move | Enter/Space or 1-9: Place | R: Restart | Esc: Menu | Q: Quit",
            );
        }
    }
}

fn draw_menu(frame: &mut Frame, area: Rect, choice: GameMode) {
    let items: Vec<ListItem> = GameMode::iter()
        .enumerate()
        .map(|(i, mode)| {
            let label = format!("{}. {}", i + 1, mode);
            let style = if mode == choice {
                Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let menu_area = center_rect(area, 30, 8);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4)])
        .split(menu_area);

    let menu = List::new(items).block(Block::default().borders(Borders::ALL).title("Mode"));
    frame.render_widget(menu, parts[0]);

    let instructions = Paragraph::new(vec![
        Line::from("X always starts"),
        Line::from("R restarts"),
        Line::from("Esc returns to menu"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(instructions, parts[1]);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.status_line();
    match app.session().thinking_progress() {
        Some(progress) => {
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).title("Status"))
                .gauge_style(Style::default().fg(Color::Red))
                .ratio(f64::from(progress).clamp(0.0, 1.0))
                .label(text);
            frame.render_widget(gauge, area);
        }
        None => {
            let color = if app.session().status().is_terminal() {
                Color::Green
            } else {
                Color::Yellow
            };
            let status = Paragraph::new(text)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Status"));
            frame.render_widget(status, area);
        }
    }
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    last: Option<Position>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], board, cursor, last, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    last: Option<Position>,
    positions: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], board.get(*pos), *pos == cursor, Some(*pos) == last);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, is_cursor: bool, is_last: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => {
            (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
        }
        Square::Occupied(Player::O) => {
            (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        }
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if is_last {
        base_style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED)
    } else {
        base_style
    };

    // Vertically center the mark in the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use tic_tac_toe::{OpponentPolicy, SessionController};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_menu_lists_modes() {
        let session = SessionController::new(GameMode::HumanVsHuman, OpponentPolicy::seeded(1));
        let app = App::new(session, None);
        let screen = render(&app);
        assert!(screen.contains("1. Player vs Player"));
        assert!(screen.contains("2. Player vs Computer"));
        assert!(screen.contains("X always starts"));
    }

    #[test]
    fn test_board_shows_marks_and_status() {
        let session = SessionController::new(GameMode::HumanVsHuman, OpponentPolicy::seeded(1));
        let mut app = App::new(session, Some(GameMode::HumanVsHuman));
        app.handle_key(KeyCode::Char('1'));
        let screen = render(&app);
        assert!(screen.contains(" X "));
        assert!(screen.contains("Turn of O"));
    }

    #[test]
    fn test_thinking_gauge_label() {
        let session = SessionController::new(GameMode::HumanVsOpponent, OpponentPolicy::seeded(1));
        let mut app = App::new(session, Some(GameMode::HumanVsOpponent));
        app.handle_key(KeyCode::Char('5'));
        assert!(render(&app).contains("Computer is thinking..."));
    }
}
