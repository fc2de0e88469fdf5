//! Full-frame rendering through the public TUI entry points.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use kinball_core::ScoreEngine;
use kinball_tui::{Mode, Scoreboard, apply_event, draw};
use kinball_types::{MatchSetup, Scores, Team, UiOptions};

fn press(board: &mut Scoreboard, c: char) -> bool {
    apply_event(
        board,
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
    )
}

fn screen(board: &Scoreboard, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, board)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn keyboard_session_plays_a_match_to_the_end() {
    let mut board = Scoreboard::new(ScoreEngine::new(MatchSetup::default()), UiOptions::default());
    for _ in 0..10 {
        assert!(!press(&mut board, '2'));
    }
    for _ in 0..5 {
        press(&mut board, '3');
    }
    assert_eq!(board.engine().scores(), Scores::new(15, 0, 10));
    assert_eq!(board.engine().winner(), Some(Team::A));

    let text = screen(&board, 100, 30);
    assert!(text.contains("Team A wins!"));
    assert!(text.contains("★ WINNER"));
    assert!(text.contains("⊘ LOCKED"));
}

#[test]
fn reset_modal_round_trip_through_keys() {
    let mut board = Scoreboard::new(ScoreEngine::new(MatchSetup::default()), UiOptions::default());
    press(&mut board, '1');
    press(&mut board, 'x');
    assert_eq!(board.mode(), Mode::ConfirmReset);
    assert!(screen(&board, 80, 24).contains("Reset the match?"));

    press(&mut board, 'y');
    assert_eq!(board.mode(), Mode::Scoring);
    assert_eq!(board.engine().scores(), Scores::ZERO);
    assert!(!screen(&board, 80, 24).contains("Reset the match?"));
}

#[test]
fn ascii_mode_avoids_unicode_glyphs() {
    let mut board = Scoreboard::new(
        ScoreEngine::new(MatchSetup::default()),
        UiOptions { ascii_only: true },
    );
    for _ in 0..10 {
        press(&mut board, '1');
    }
    let text = screen(&board, 90, 24);
    assert!(text.contains("[LOCKED]"));
    assert!(text.chars().all(|c| c.is_ascii()));
}

#[test]
fn tiny_terminal_still_renders() {
    let board = Scoreboard::new(ScoreEngine::new(MatchSetup::default()), UiOptions::default());
    let text = screen(&board, 12, 4);
    assert!(!text.is_empty());
}
