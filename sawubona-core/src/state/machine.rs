//! Session state definition

use super::events::{Event, MenuChoice};

/// Spaces needed before a distance can be measured
pub const MIN_SPACES_TO_MEASURE: usize = 2;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Main menu shown, waiting for a choice
    Menu,
    /// Asking for name, coordinates and type of a new space
    AddingSpace,
    /// Drawing the map, legend and listing
    ShowingMap,
    /// Asking for two space numbers
    Measuring,
    /// Session over
    Exited,
}

impl State {
    /// Check if the session is over
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Exited)
    }

    /// Check if the menu should be shown
    pub fn awaits_menu_choice(&self) -> bool {
        matches!(self, State::Menu)
    }

    /// Process an event and return the next state
    ///
    /// `spaces` is the number of entries currently on the map; measuring
    /// is refused until there are [`MIN_SPACES_TO_MEASURE`].
    pub fn transition(self, event: Event, spaces: usize) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Menu transitions
            (Menu, Select(MenuChoice::AddSpace)) => AddingSpace,
            (Menu, Select(MenuChoice::ShowMap)) => ShowingMap,
            (Menu, Select(MenuChoice::MeasureDistance)) if spaces >= MIN_SPACES_TO_MEASURE => {
                Measuring
            }
            (Menu, Select(MenuChoice::MeasureDistance)) => Menu,
            (Menu, Select(MenuChoice::Exit)) => Exited,

            // AddingSpace transitions
            (AddingSpace, SpaceAdded) => Menu,
            (AddingSpace, Cancelled) => Menu,

            // ShowingMap transitions
            (ShowingMap, MapShown) => Menu,

            // Measuring transitions
            (Measuring, MeasureDone) => Menu,
            (Measuring, Cancelled) => Menu,

            // Default: stay in current state (Exited is absorbing)
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_flow() {
        let state = State::Menu.transition(Event::Select(MenuChoice::AddSpace), 0);
        assert_eq!(state, State::AddingSpace);
        assert_eq!(state.transition(Event::SpaceAdded, 1), State::Menu);
    }

    #[test]
    fn test_cancel_add() {
        let state = State::AddingSpace.transition(Event::Cancelled, 0);
        assert_eq!(state, State::Menu);
    }

    #[test]
    fn test_show_map_flow() {
        let state = State::Menu.transition(Event::Select(MenuChoice::ShowMap), 0);
        assert_eq!(state, State::ShowingMap);
        assert_eq!(state.transition(Event::MapShown, 0), State::Menu);
    }

    #[test]
    fn test_measure_needs_two_spaces() {
        let measure = Event::Select(MenuChoice::MeasureDistance);
        assert_eq!(State::Menu.transition(measure, 0), State::Menu);
        assert_eq!(State::Menu.transition(measure, 1), State::Menu);
        assert_eq!(State::Menu.transition(measure, 2), State::Measuring);
        assert_eq!(State::Measuring.transition(Event::MeasureDone, 2), State::Menu);
    }

    #[test]
    fn test_exit_is_terminal() {
        let state = State::Menu.transition(Event::Select(MenuChoice::Exit), 3);
        assert_eq!(state, State::Exited);
        assert!(state.is_terminal());

        for event in [
            Event::Select(MenuChoice::AddSpace),
            Event::SpaceAdded,
            Event::Cancelled,
        ] {
            assert_eq!(state.transition(event, 3), State::Exited);
        }
    }

    #[test]
    fn test_ignored_events() {
        // Menu choices are only taken from the menu
        let state = State::AddingSpace.transition(Event::Select(MenuChoice::Exit), 0);
        assert_eq!(state, State::AddingSpace);
        assert_eq!(State::Menu.transition(Event::SpaceAdded, 0), State::Menu);
    }
}
