//! Line-based setup prompts shown before the scoreboard takes the terminal.

use std::io::{self, BufRead, Write};

use kinball_config::SetupAnswers;
use kinball_core::ScoreEngine;
use kinball_types::Team;

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    // EOF reads as a blank answer.
    match input.read_line(&mut line) {
        Ok(_) => Ok(line),
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            tracing::warn!(%err, "Unreadable setup answer, keeping the current value");
            Ok(String::new())
        }
        Err(err) => Err(err),
    }
}

/// Ask for the three team names and both thresholds.
///
/// The bracketed value in each question is what a blank answer keeps.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    answers: &mut SetupAnswers,
) -> io::Result<()> {
    writeln!(output, "Kinball Scoreboard setup (press Enter to keep a value)")?;

    for team in Team::ALL {
        let current = answers
            .name(team)
            .map_or_else(|| team.default_name(), str::to_string);
        let raw = ask(input, output, &format!("Name for team {team} [{current}]: "))?;
        answers.answer_name(team, &raw);
    }

    let goal = ask(
        input,
        output,
        &format!("Goal score [{}]: ", answers.effective_goal_score()),
    )?;
    answers.answer_goal_score(&goal);

    let last = ask(
        input,
        output,
        &format!("Final score [{}]: ", answers.effective_final_score()),
    )?;
    answers.answer_final_score(&last);

    Ok(())
}

/// One-line summary printed after the scoreboard closes.
pub fn summary(engine: &ScoreEngine) -> String {
    let names = engine.names();
    let scores = engine.scores();
    let line = Team::ALL
        .into_iter()
        .map(|team| format!("{} {}", names.get(team), scores.get(team)))
        .collect::<Vec<_>>()
        .join(", ");
    match engine.winner() {
        Some(winner) => format!("{line}. Winner: {}", names.get(winner)),
        None => line,
    }
}
