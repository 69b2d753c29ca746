//! Stateless rendering of the application.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
};
use strum::IntoEnumIterator;

use super::app::{App, Tab};
use crate::OutcomeAlert;
use kodeco_tictactoe::{Board, Player, Position};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(11),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_tabs(frame, chunks[0], app.tab());

    match app.tab() {
        Tab::Play => draw_board(frame, chunks[1], app.game().board(), app.cursor()),
        Tab::Stats => draw_stats(frame, chunks[1], app),
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/1-9: Move | Enter/Space: Place | Tab: Switch | q/Esc: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    if app.tab() == Tab::Play
        && let Some(alert) = app.alert()
    {
        draw_alert(frame, area, alert);
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<String> = Tab::iter().map(|tab| tab.to_string()).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Kodeco Tic-Tac-Toe"),
        )
        .select(active.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
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

    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        let row_area = rows[row * 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (column, &pos) in cells.iter().enumerate() {
            draw_cell(frame, cols[column * 2], board, cursor, pos);
            if column < 2 {
                draw_separator(frame, cols[column * 2 + 1], "│");
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1], &"─".repeat(40));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let (symbol, base_style) = match board.occupant(pos) {
        Some(Player::Human) => (
            format!(" {} ", Player::Human.mark()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::Computer) => (
            format!(" {} ", Player::Computer.mark()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => (
            format!(" {} ", pos.keypad()),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, text: &str) {
    let sep = Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.scoreboard();

    let header = Row::new(vec![
        Cell::from("Wins").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Losses").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Draws").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Win Rate").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow));

    let row = Row::new(vec![
        Cell::from(score.wins().to_string()).style(Style::default().fg(Color::Green)),
        Cell::from(score.losses().to_string()).style(Style::default().fg(Color::Red)),
        Cell::from(score.draws().to_string()).style(Style::default().fg(Color::Yellow)),
        Cell::from(format!("{:.1}%", score.win_rate())),
    ]);

    let widths = [Constraint::Percentage(25); 4];
    let title = format!("This session ({} games)", score.total());
    let table = Table::new(vec![row], widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, alert: &OutcomeAlert) {
    let popup = center_rect(area, 36, 7);
    let text = vec![
        Line::from(alert.message),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", alert.action),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(alert.title)
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::White)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
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
    use crate::ShellConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_play_tab_shows_keypad_digits() {
        let app = App::new(&ShellConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("Kodeco Tic-Tac-Toe"));
        assert!(screen.contains('1'));
        assert!(screen.contains('9'));
        assert!(screen.contains("Your move."));
    }

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 60, 24);
        let inner = center_rect(area, 36, 7);
        assert_eq!(inner.width, 36);
        assert_eq!(inner.height, 7);
        assert_eq!(inner.x, 12);
        assert_eq!(inner.y, 8);
    }
}
