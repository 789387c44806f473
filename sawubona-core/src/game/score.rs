//! Score keeping and feedback

use super::scenario::{Choice, Outcome, Scenario};
use super::sounds;
use crate::traits::Tone;

/// Running score, passed into and returned from every round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UbuntuScore {
    /// Points so far
    pub total: u32,
    /// Rounds played
    pub rounds: u8,
}

impl UbuntuScore {
    /// Start a new game
    pub const fn new() -> Self {
        Self {
            total: 0,
            rounds: 0,
        }
    }

    /// Add the points of one round
    #[must_use]
    pub fn record(self, points: u8) -> Self {
        Self {
            total: self.total + u32::from(points),
            rounds: self.rounds.saturating_add(1),
        }
    }

    /// Final rank for the current total
    pub fn rank(&self) -> Rank {
        Rank::from_total(self.total)
    }
}

/// Immediate feedback for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feedback {
    /// 8 points or more: green light, success melody
    Good,
    /// 5 to 7 points: yellow light
    Okay,
    /// Fewer than 5 points: red light
    Wait,
}

impl Feedback {
    /// Classify the points of a round
    pub fn from_points(points: u8) -> Self {
        if points >= 8 {
            Feedback::Good
        } else if points >= 5 {
            Feedback::Okay
        } else {
            Feedback::Wait
        }
    }

    /// Melody to play
    pub fn melody(&self) -> &'static [Tone] {
        match self {
            Feedback::Good => &sounds::SUCCESS,
            Feedback::Okay => &sounds::OKAY,
            Feedback::Wait => &sounds::WAIT,
        }
    }

    /// How often to flash the matching light
    pub fn flashes(&self) -> u8 {
        match self {
            Feedback::Good => 4,
            Feedback::Okay => 3,
            Feedback::Wait => 2,
        }
    }
}

/// End-of-game rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rank {
    /// 25 points or more
    Champion,
    /// 18 to 24 points
    Helper,
    /// Below 18 points
    Learner,
}

impl Rank {
    /// Rank for a final total
    pub fn from_total(total: u32) -> Self {
        if total >= 25 {
            Rank::Champion
        } else if total >= 18 {
            Rank::Helper
        } else {
            Rank::Learner
        }
    }

    /// Title shown at the end of the game
    pub fn title(&self) -> &'static str {
        match self {
            Rank::Champion => "UBUNTU CHAMPION!",
            Rank::Helper => "UBUNTU HELPER!",
            Rank::Learner => "UBUNTU LEARNER",
        }
    }

    /// Encouragement shown under the title
    pub fn message(&self) -> &'static str {
        match self {
            Rank::Champion => "You showed excellent community spirit!",
            Rank::Helper => "You made good choices for the community!",
            Rank::Learner => "Keep practicing Ubuntu values!",
        }
    }

    /// Light feedback matching the rank
    pub fn feedback(&self) -> Feedback {
        match self {
            Rank::Champion => Feedback::Good,
            Rank::Helper => Feedback::Okay,
            Rank::Learner => Feedback::Wait,
        }
    }
}

/// What happened in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundReport {
    pub choice: Choice,
    pub outcome: Outcome,
    pub feedback: Feedback,
}

/// Play one round and return the updated score
pub fn play_round(score: UbuntuScore, scenario: &Scenario, choice: Choice) -> (UbuntuScore, RoundReport) {
    let outcome = scenario.outcome(choice);
    let report = RoundReport {
        choice,
        outcome,
        feedback: Feedback::from_points(outcome.points),
    };
    (score.record(outcome.points), report)
}
