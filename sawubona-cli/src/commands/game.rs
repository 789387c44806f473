//! `game` command: the Ubuntu helper game on the console
//!
//! Buttons 1, 2 and 3 become typed answers; the lights become a line
//! naming the colour that would flash.

use std::io::{BufRead, Write};

use sawubona_core::game::{play_round, Choice, Feedback, UbuntuScore, SCENARIOS};
use tracing::debug;

use crate::console::Console;
use crate::error::CliError;

/// Light colour shown for a feedback level
pub fn light_name(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Good => "GREEN",
        Feedback::Okay => "YELLOW",
        Feedback::Wait => "RED",
    }
}

/// Play all scenarios and return the final score
///
/// The game stops early when the input runs out.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<UbuntuScore, CliError> {
    let max: u32 = SCENARIOS.iter().map(|s| u32::from(s.best_points())).sum();
    let mut score = UbuntuScore::new();

    console.say("UBUNTU COMMUNITY HELPER")?;
    console.say("Choose: 1 = HELP, 2 = SHARE, 3 = TEACH")?;

    'rounds: for (round, scenario) in SCENARIOS.iter().enumerate() {
        console.blank()?;
        console.say(&format!("Scenario {}: {}", round + 1, scenario.description))?;

        let choice = loop {
            let Some(answer) = console.prompt("Your choice (1-3): ")? else {
                break 'rounds;
            };
            match Choice::parse(&answer) {
                Some(choice) => break choice,
                None => console.say("Please press 1, 2 or 3.")?,
            }
        };

        let (next, report) = play_round(score, scenario, choice);
        debug!(round, choice = %choice, points = report.outcome.points, "Round played");
        score = next;

        console.say(&format!("You chose {}.", report.choice))?;
        console.say(&format!(
            "{} (+{} points)",
            report.outcome.message, report.outcome.points
        ))?;
        console.say(&format!(
            "{} light x{}",
            light_name(report.feedback),
            report.feedback.flashes()
        ))?;
    }

    let rank = score.rank();
    console.blank()?;
    console.say(&"=".repeat(30))?;
    console.say(&format!("FINAL SCORE: {}/{}", score.total, max))?;
    console.say(rank.title())?;
    console.say(rank.message())?;
    console.say(&"=".repeat(30))?;
    Ok(score)
}
