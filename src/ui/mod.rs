mod playground;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, MenuOption, Screen};
use crate::game::Notice;
use playground::render_playground;

pub fn draw_ui(f: &mut Frame, app: &App) {
    if matches!(app.screen, Screen::Title) {
        draw_title_screen(f, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_status_bar(f, app, chunks[0]);

    let level = app.game.current_level();
    let instruction = Paragraph::new(level.puzzle.instruction.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Challenge "))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    f.render_widget(instruction, chunks[1]);

    let hint = match app.game.hint() {
        Some(hint) => Paragraph::new(format!("Hint: {}", hint)).style(Style::default().fg(Color::Cyan)),
        None => Paragraph::new("Press F1 for a hint (free)").style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(hint.block(Block::default().borders(Borders::ALL)), chunks[2]);

    render_playground(f, &app.game.layout(), chunks[3]);

    f.render_widget(&app.editor, chunks[4]);

    let (message, style) = if app.command_mode {
        (
            format!(":{}", app.command_buffer),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        )
    } else {
        (app.message.clone(), app.message_style)
    };
    let message = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(message, chunks[5]);

    if let Some(notice) = app.notice {
        draw_notice(f, notice);
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let time_color = if state.time_remaining > 20 {
        Color::Green
    } else if state.time_remaining > 10 {
        Color::Yellow
    } else {
        Color::Red
    };

    let status = Line::from(vec![
        Span::styled(
            " FLEXBOX ARENA ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Level: {}/{} ", state.level, app.game.level_count()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Points: {} ", state.points),
            Style::default().fg(if state.points < 0 {
                Color::Red
            } else {
                Color::Yellow
            }),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Time Left: {}s ", state.time_remaining),
            Style::default().fg(time_color),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" Hints Used: {} ", state.hints_used),
            Style::default().fg(Color::White),
        ),
    ]);
    let status_block = Paragraph::new(status).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(status_block, area);
}

fn draw_notice(f: &mut Frame, notice: Notice) {
    let area = centered(f.area(), 60, 7);
    let style = match notice {
        Notice::AllLevelsComplete => Style::default().fg(Color::Black).bg(Color::Green),
        Notice::TimeUp => Style::default().fg(Color::White).bg(Color::Red),
        Notice::IncompleteRule | Notice::IncorrectAnswer => {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        }
    };

    let body = format!("\n{}\n\n[ Press ENTER ]", notice.message());
    let popup = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(notice.title()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(style.add_modifier(Modifier::BOLD));

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn draw_title_screen(f: &mut Frame, app: &App) {
    let area = f.area();

    let title_art = r#"
    ╔═══════════════════════════════════════════════════════════╗
    ║                                                           ║
    ║     ┌──────┐ ┌──────┐ ┌──────┐                            ║
    ║     │  1   │ │  2   │ │  3   │   F L E X B O X            ║
    ║     └──────┘ └──────┘ └──────┘                            ║
    ║                                   A   R   E   N   A       ║
    ║            justify-content: center;                       ║
    ║                                                           ║
    ║        "One declaration at a time, against the clock"     ║
    ║                                                           ║
    ╚═══════════════════════════════════════════════════════════╝
"#;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let title = Paragraph::new(title_art)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let new_game_style = if matches!(app.menu_selection, MenuOption::NewGame) {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let new_game = Paragraph::new("  NEW GAME  ")
        .style(new_game_style)
        .alignment(Alignment::Center);
    f.render_widget(new_game, chunks[1]);

    let quit_style = if matches!(app.menu_selection, MenuOption::Quit) {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let quit = Paragraph::new("  QUIT  ")
        .style(quit_style)
        .alignment(Alignment::Center);
    f.render_widget(quit, chunks[2]);

    let help = Paragraph::new("↑/↓ to select  •  ENTER to confirm  •  q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}
