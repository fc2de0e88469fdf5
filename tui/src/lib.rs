//! TUI rendering for the Kinball scoreboard using ratatui.

mod app;
mod digits;
mod input;
mod theme;

pub use app::{Action, Mode, Scoreboard, penalty_key};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{BoxState, Glyphs, Palette, glyphs, palette, team_box_style};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use kinball_core::ScoreEngine;
use kinball_types::{Team, UiOptions};

use self::digits::{DIGIT_HEIGHT, big_lines, big_width};

const TITLE: &str = "Kinball Scoreboard";

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

fn bordered(options: UiOptions) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    if options.ascii_only {
        block.border_set(ASCII_BORDER)
    } else {
        block.border_type(BorderType::Rounded)
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, board: &Scoreboard) {
    let palette = palette();
    let glyphs = glyphs(board.options());

    let bg_block = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Team boxes
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, board.engine(), chunks[0], &palette);
    draw_teams(frame, board, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, board.engine(), chunks[2], &palette);

    if board.mode() == Mode::ConfirmReset {
        draw_reset_prompt(frame, board.options(), &palette);
    }
}

fn hint_style(palette: &Palette, enabled: bool) -> Style {
    let style = Style::default().fg(palette.text_on_light);
    if enabled {
        style
    } else {
        style.fg(palette.text_muted).add_modifier(Modifier::DIM)
    }
}

fn draw_title_bar(frame: &mut Frame, engine: &ScoreEngine, area: Rect, palette: &Palette) {
    let left = Line::from(vec![
        Span::styled(" [u] Undo", hint_style(palette, engine.can_undo())),
        Span::raw("  "),
        Span::styled("[r] Redo", hint_style(palette, engine.can_redo())),
    ]);
    let right = Line::from(Span::styled(
        "[x] Reset ",
        Style::default()
            .fg(palette.reset)
            .add_modifier(Modifier::BOLD),
    ));

    let left_width = u16::try_from(left.width()).unwrap_or(area.width);
    let right_width = u16::try_from(right.width()).unwrap_or(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_width),
            Constraint::Min(0),
            Constraint::Length(right_width),
        ])
        .split(area);

    let bar = Style::default().bg(palette.background);
    frame.render_widget(Paragraph::new(left).style(bar), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(TITLE, theme::title_style(palette))))
            .alignment(Alignment::Center)
            .style(bar),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right).style(bar),
        chunks[2],
    );
}

fn draw_teams(
    frame: &mut Frame,
    board: &Scoreboard,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (team, column) in Team::ALL.into_iter().zip(columns.iter()) {
        draw_team_box(frame, board, team, *column, palette, glyphs);
    }
}

fn draw_team_box(
    frame: &mut Frame,
    board: &Scoreboard,
    team: Team,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let engine = board.engine();
    let state = BoxState::of(team, engine.locked(), engine.flash_signal());
    let style = team_box_style(palette, team, state);

    let block = bordered(board.options())
        .border_style(style)
        .style(style)
        .title(Line::from(Span::styled(
            format!(" {} ", engine.names().get(team)),
            style.add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let score = engine.scores().get(team);
    let mut body: Vec<Line> = Vec::new();
    let big = big_width(score) <= inner.width && DIGIT_HEIGHT + 3 <= inner.height;
    if big {
        body.extend(big_lines(score, glyphs.digit_fill));
    } else {
        body.push(Line::from(Span::styled(
            score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    body.push(if engine.winner() == Some(team) {
        Line::from(format!("{} WINNER", glyphs.winner))
    } else if engine.locked() == Some(team) {
        Line::from(glyphs.locked)
    } else {
        Line::from("")
    });

    let hint = format!("[{}] Penalty", penalty_key(team));
    body.push(if engine.can_penalize(team) {
        Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::BOLD)))
    } else {
        Line::from(Span::styled(
            hint,
            Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        ))
    });

    let body_height = u16::try_from(body.len()).unwrap_or(u16::MAX);
    let top = inner.height.saturating_sub(body_height) / 2;
    let mut lines = vec![Line::from(""); usize::from(top)];
    lines.extend(body);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn status_message(engine: &ScoreEngine) -> String {
    if let Some(winner) = engine.winner() {
        format!("{} wins!", engine.names().get(winner))
    } else if let Some(locked) = engine.locked() {
        format!("{} is locked out", engine.names().get(locked))
    } else {
        "Press 1, 2 or 3 to charge a penalty".to_string()
    }
}

fn draw_status_bar(frame: &mut Frame, engine: &ScoreEngine, area: Rect, palette: &Palette) {
    let config = engine.config();
    let thresholds = format!(
        "Goal {}  Final {}  [q] Quit ",
        config.goal_score(),
        config.final_score()
    );
    let thresholds_width = u16::try_from(thresholds.len()).unwrap_or(area.width);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(thresholds_width)])
        .split(area);

    let bar = Style::default().bg(palette.background).fg(palette.text_on_light);
    frame.render_widget(
        Paragraph::new(format!(" {}", status_message(engine))).style(bar),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(thresholds)
            .alignment(Alignment::Right)
            .style(bar.fg(palette.text_muted)),
        chunks[1],
    );
}

fn draw_reset_prompt(frame: &mut Frame, options: UiOptions, palette: &Palette) {
    let key = Style::default()
        .fg(palette.reset)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(palette.text_on_light);
    let lines = vec![
        Line::from(Span::styled(
            "Reset the match?",
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Scores and history will be cleared.", text)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", key),
            Span::styled(" Yes   ", text),
            Span::styled("[n]", key),
            Span::styled(" No", text),
        ]),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(10);
    let content_width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .min(frame.area().width.saturating_sub(4));
    let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let block = bordered(options)
        .border_style(Style::default().fg(palette.reset))
        .style(Style::default().bg(palette.background))
        .padding(Padding::uniform(1));

    let area = frame.area();
    let width = content_width.saturating_add(4).min(area.width);
    let height = content_height.saturating_add(4).min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}
