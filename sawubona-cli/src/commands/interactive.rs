//! `interactive` command: learners build their own map
//!
//! The menu loop is driven by [`State::transition`]; each state asks its
//! questions and reports back with a completion event. Running out of
//! input ends the session as if "Exit" was chosen.

use std::io::{BufRead, Write};

use sawubona_core::map::{LocationCatalog, MapError, SpatialMap};
use sawubona_core::state::{Event, MenuChoice, State, MIN_SPACES_TO_MEASURE};
use sawubona_display::{distance_lines, MapView};
use tracing::{debug, info};

use super::added_lines;
use crate::console::Console;
use crate::error::CliError;

/// Answer to a prompt: a value, a rejected answer, or end of input
enum Answer<T> {
    Value(T),
    Invalid,
    Closed,
}

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &LocationCatalog,
    grid_size: u16,
) -> Result<(), CliError> {
    let mut map = SpatialMap::new(grid_size, catalog)?;
    let mut state = State::Menu;

    console.blank()?;
    console.say("INTERACTIVE SCHOOL MAPPING MODE")?;
    console.say("Create your own school map!")?;

    while !state.is_terminal() {
        let event = match state {
            State::Menu => match menu(console, map.len())? {
                Some(choice) => Event::Select(choice),
                None => Event::Select(MenuChoice::Exit),
            },
            State::AddingSpace => add_space(console, &mut map)?,
            State::ShowingMap => {
                console.blank()?;
                console.show(&MapView::new(&map).lines())?;
                Event::MapShown
            }
            State::Measuring => measure(console, &map)?,
            State::Exited => break,
        };

        let next = state.transition(event, map.len());
        debug!(?state, ?event, ?next, "Session transition");
        state = next;
    }

    info!(spaces = map.len(), "Interactive session finished");
    console.blank()?;
    console.say("Thank you for mapping our school!")?;
    console.say("Ubuntu: Understanding our spaces brings us together.")
}

/// Show the menu until a valid choice is typed; `None` at end of input
fn menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    spaces: usize,
) -> Result<Option<MenuChoice>, CliError> {
    loop {
        console.blank()?;
        console.say("What would you like to do?")?;
        for choice in MenuChoice::ALL {
            console.say(&format!("{}. {}", choice.number(), choice.label()))?;
        }

        let Some(answer) = console.prompt("Enter choice (1-4): ")? else {
            return Ok(None);
        };
        match MenuChoice::parse(&answer) {
            Some(MenuChoice::MeasureDistance) if spaces < MIN_SPACES_TO_MEASURE => {
                console.say(&format!("Add at least {} spaces first!", MIN_SPACES_TO_MEASURE))?;
                return Ok(Some(MenuChoice::MeasureDistance));
            }
            Some(choice) => return Ok(Some(choice)),
            None => console.say("Please enter a number from 1 to 4.")?,
        }
    }
}

fn add_space<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    map: &mut SpatialMap<'_>,
) -> Result<Event, CliError> {
    let Some(name) = console.prompt("Space name: ")? else {
        return Ok(Event::Cancelled);
    };

    let max = i32::from(map.grid_size()) - 1;
    let x = match ask_number::<_, _, i32>(console, &format!("X coordinate (0-{}): ", max))? {
        Answer::Value(x) => x,
        Answer::Invalid | Answer::Closed => return Ok(Event::Cancelled),
    };
    let y = match ask_number::<_, _, i32>(console, &format!("Y coordinate (0-{}): ", max))? {
        Answer::Value(y) => y,
        Answer::Invalid | Answer::Closed => return Ok(Event::Cancelled),
    };

    let catalog = map.catalog();
    console.blank()?;
    console.say("Space types:")?;
    for (id, location_type) in catalog.iter() {
        console.say(&format!(
            "{}. {} ({})",
            id.index() + 1,
            location_type.display_name("en"),
            location_type.key()
        ))?;
    }
    let Some(typed) = console.prompt("Enter space type: ")? else {
        return Ok(Event::Cancelled);
    };

    // A type can be typed by key or by its number in the list
    let id = match typed.parse::<usize>() {
        Ok(n) => catalog.iter().nth(n.wrapping_sub(1)).map(|(id, _)| id),
        Err(_) => catalog.lookup(&typed),
    };
    let id = id.unwrap_or_else(|| {
        info!(typed = %typed, "Unknown space type, using default");
        catalog.default_type()
    });

    match map.add_entry_of_type(&name, x, y, id) {
        Ok(index) => {
            console.blank()?;
            console.show(&added_lines(map, index))?;
            Ok(Event::SpaceAdded)
        }
        Err(e) => {
            console.say(&explain(&e))?;
            Ok(Event::Cancelled)
        }
    }
}

fn measure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    map: &SpatialMap<'_>,
) -> Result<Event, CliError> {
    console.blank()?;
    console.show(&MapView::new(map).lines())?;
    console.blank()?;

    let first = match ask_space(console, map, "First space number: ")? {
        Answer::Value(i) => i,
        Answer::Invalid => return Ok(Event::MeasureDone),
        Answer::Closed => return Ok(Event::Cancelled),
    };
    let second = match ask_space(console, map, "Second space number: ")? {
        Answer::Value(i) => i,
        Answer::Invalid => return Ok(Event::MeasureDone),
        Answer::Closed => return Ok(Event::Cancelled),
    };

    let distance = map.distance(first, second)?;
    console.blank()?;
    console.show(&distance_lines(map, &distance))?;
    Ok(Event::MeasureDone)
}

/// Ask for a 1-based space number and return its index
fn ask_space<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    map: &SpatialMap<'_>,
    question: &str,
) -> Result<Answer<usize>, CliError> {
    match ask_number::<_, _, i64>(console, question)? {
        Answer::Value(n) => match map.entry_index(n.saturating_sub(1)) {
            Ok(index) => Ok(Answer::Value(index)),
            Err(e) => {
                console.say(&explain(&e))?;
                Ok(Answer::Invalid)
            }
        },
        Answer::Invalid => Ok(Answer::Invalid),
        Answer::Closed => Ok(Answer::Closed),
    }
}

fn ask_number<R: BufRead, W: Write, T: std::str::FromStr>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<Answer<T>, CliError> {
    let Some(answer) = console.prompt(question)? else {
        return Ok(Answer::Closed);
    };
    match answer.parse() {
        Ok(value) => Ok(Answer::Value(value)),
        Err(_) => {
            console.say("Please enter a whole number.")?;
            Ok(Answer::Invalid)
        }
    }
}

/// Learner-facing wording for a rejected action
fn explain(error: &MapError) -> String {
    match error {
        MapError::EmptyName => "Every space needs a name.".to_string(),
        MapError::OutOfBounds { grid_size, .. } => format!(
            "That spot is off the map. Use numbers from 0 to {}.",
            grid_size.saturating_sub(1)
        ),
        MapError::IndexOutOfRange { len, .. } => {
            format!("There is no space with that number. Choose 1 to {}.", len)
        }
        other => other.to_string(),
    }
}
