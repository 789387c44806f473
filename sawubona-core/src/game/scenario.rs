//! Game scenarios

use core::fmt;

/// What the learner decides to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Choice {
    /// Help directly (button 1)
    Help,
    /// Share resources (button 2)
    Share,
    /// Teach skills (button 3)
    Teach,
}

impl Choice {
    /// All choices in button order
    pub const ALL: [Choice; 3] = [Choice::Help, Choice::Share, Choice::Teach];

    /// Choice for a 1-based button number
    pub fn from_button(button: u8) -> Option<Self> {
        match button {
            1 => Some(Choice::Help),
            2 => Some(Choice::Share),
            3 => Some(Choice::Teach),
            _ => None,
        }
    }

    /// Parse a typed choice: a button number or the choice name
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(button) = input.parse::<u8>() {
            return Self::from_button(button);
        }
        Self::ALL
            .into_iter()
            .find(|choice| choice.label().eq_ignore_ascii_case(input))
    }

    /// Upper-case label
    pub fn label(&self) -> &'static str {
        match self {
            Choice::Help => "HELP",
            Choice::Share => "SHARE",
            Choice::Teach => "TEACH",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one choice in a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outcome {
    /// Points earned
    pub points: u8,
    /// Feedback shown to the learner
    pub message: &'static str,
}

/// A community situation with one outcome per choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scenario {
    pub description: &'static str,
    pub help: Outcome,
    pub share: Outcome,
    pub teach: Outcome,
}

impl Scenario {
    /// Outcome of a choice
    pub fn outcome(&self, choice: Choice) -> Outcome {
        match choice {
            Choice::Help => self.help,
            Choice::Share => self.share,
            Choice::Teach => self.teach,
        }
    }

    /// Highest points available in this scenario
    pub fn best_points(&self) -> u8 {
        self.help.points.max(self.share.points).max(self.teach.points)
    }
}

/// The reference scenarios (30 points available)
pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        description: "Gogo needs help carrying water",
        help: Outcome {
            points: 10,
            message: "You helped! Ubuntu spirit!",
        },
        share: Outcome {
            points: 5,
            message: "You offered supplies. Good!",
        },
        teach: Outcome {
            points: 3,
            message: "Teaching is good, but direct help better here.",
        },
    },
    Scenario {
        description: "Children want to learn coding",
        help: Outcome {
            points: 5,
            message: "Helping is good!",
        },
        share: Outcome {
            points: 7,
            message: "Sharing knowledge matters!",
        },
        teach: Outcome {
            points: 10,
            message: "Teaching empowers! Ubuntu!",
        },
    },
    Scenario {
        description: "Community garden needs tools",
        help: Outcome {
            points: 7,
            message: "Your help makes difference!",
        },
        share: Outcome {
            points: 10,
            message: "Sharing tools strengthens community!",
        },
        teach: Outcome {
            points: 5,
            message: "Teaching is good, but sharing tools needed now.",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(Choice::parse("1"), Some(Choice::Help));
        assert_eq!(Choice::parse(" 3 "), Some(Choice::Teach));
        assert_eq!(Choice::parse("share"), Some(Choice::Share));
        assert_eq!(Choice::parse("4"), None);
        assert_eq!(Choice::parse("dance"), None);
    }

    #[test]
    fn test_best_points_sum_to_thirty() {
        let total: u32 = SCENARIOS.iter().map(|s| u32::from(s.best_points())).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_outcome_lookup() {
        let garden = &SCENARIOS[2];
        assert_eq!(garden.outcome(Choice::Share).points, 10);
        assert_eq!(garden.outcome(Choice::Teach).points, 5);
    }
}
