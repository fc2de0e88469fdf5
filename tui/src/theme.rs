//! Colors and glyphs for the scoreboard.
//!
//! Team colors follow the physical bibs: pink, grey and black. A locked-out
//! team turns pale yellow and the winner flashes light green.

use ratatui::style::{Color, Modifier, Style};

use kinball_types::{Team, UiOptions};

mod colors {
    use super::Color;

    pub const TEAM_A: Color = Color::Rgb(255, 105, 180); // hot pink
    pub const TEAM_B: Color = Color::Rgb(136, 136, 136); // grey
    pub const TEAM_C: Color = Color::Rgb(0, 0, 0); // black
    pub const LOCKED: Color = Color::Rgb(255, 255, 224); // light yellow
    pub const WINNER: Color = Color::Rgb(144, 238, 144); // light green

    pub const BACKGROUND: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_ON_TEAM: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_ON_LIGHT: Color = Color::Rgb(0, 0, 0);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 110);
    pub const RESET: Color = Color::Rgb(220, 38, 38);
    pub const BORDER: Color = Color::Rgb(128, 128, 128);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub team_a: Color,
    pub team_b: Color,
    pub team_c: Color,
    pub locked: Color,
    pub winner: Color,
    pub background: Color,
    pub text_on_team: Color,
    pub text_on_light: Color,
    pub text_muted: Color,
    pub reset: Color,
    pub border: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            team_a: colors::TEAM_A,
            team_b: colors::TEAM_B,
            team_c: colors::TEAM_C,
            locked: colors::LOCKED,
            winner: colors::WINNER,
            background: colors::BACKGROUND,
            text_on_team: colors::TEXT_ON_TEAM,
            text_on_light: colors::TEXT_ON_LIGHT,
            text_muted: colors::TEXT_MUTED,
            reset: colors::RESET,
            border: colors::BORDER,
        }
    }

    #[must_use]
    pub fn team(&self, team: Team) -> Color {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
            Team::C => self.team_c,
        }
    }
}

#[must_use]
pub fn palette() -> Palette {
    Palette::standard()
}

/// How a team box should look this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    Normal,
    Locked,
    Flashing,
}

impl BoxState {
    /// The flash wins over the lock color, as the winner is never locked.
    #[must_use]
    pub fn of(team: Team, locked: Option<Team>, flash: Option<Team>) -> Self {
        if flash == Some(team) {
            BoxState::Flashing
        } else if locked == Some(team) {
            BoxState::Locked
        } else {
            BoxState::Normal
        }
    }
}

/// Background and text style for a team box.
#[must_use]
pub fn team_box_style(palette: &Palette, team: Team, state: BoxState) -> Style {
    let (bg, fg) = match state {
        BoxState::Normal => (palette.team(team), palette.text_on_team),
        BoxState::Locked => (palette.locked, palette.text_on_light),
        BoxState::Flashing => (palette.winner, palette.text_on_light),
    };
    Style::default().bg(bg).fg(fg)
}

#[must_use]
pub fn title_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.text_on_light)
        .bg(palette.background)
        .add_modifier(Modifier::BOLD)
}

/// ASCII/Unicode glyphs for markers and score digits.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub locked: &'static str,
    pub winner: &'static str,
    pub digit_fill: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            locked: "[LOCKED]",
            winner: "*",
            digit_fill: "#",
        }
    } else {
        Glyphs {
            locked: "⊘ LOCKED",
            winner: "★",
            digit_fill: "█",
        }
    }
}
