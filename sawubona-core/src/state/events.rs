//! Events that trigger session transitions

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    /// 1. Add a space to the map
    AddSpace,
    /// 2. Display the current map
    ShowMap,
    /// 3. Measure distance between spaces
    MeasureDistance,
    /// 4. Exit
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddSpace,
        MenuChoice::ShowMap,
        MenuChoice::MeasureDistance,
        MenuChoice::Exit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddSpace),
            "2" => Some(MenuChoice::ShowMap),
            "3" => Some(MenuChoice::MeasureDistance),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Menu number
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::AddSpace => 1,
            MenuChoice::ShowMap => 2,
            MenuChoice::MeasureDistance => 3,
            MenuChoice::Exit => 4,
        }
    }

    /// Menu text
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddSpace => "Add a space to the map",
            MenuChoice::ShowMap => "Display the current map",
            MenuChoice::MeasureDistance => "Measure distance between spaces",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // User events
    /// User picked a menu entry
    Select(MenuChoice),
    /// User abandoned the current step
    Cancelled,

    // Completion events
    /// A space was placed on the map
    SpaceAdded,
    /// The map was shown
    MapShown,
    /// A distance was reported (or the indices were rejected)
    MeasureDone,
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::Select(_) | Event::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu() {
        for choice in MenuChoice::ALL {
            let typed = match choice.number() {
                1 => "1",
                2 => "2",
                3 => "3",
                _ => "4",
            };
            assert_eq!(MenuChoice::parse(typed), Some(choice));
        }
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::ShowMap));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_user_events() {
        assert!(Event::Select(MenuChoice::Exit).is_user_event());
        assert!(Event::Cancelled.is_user_event());
        assert!(!Event::SpaceAdded.is_user_event());
    }
}
