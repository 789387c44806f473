//! `demo` command: map the reference school and measure one distance

use std::io::{BufRead, Write};

use sawubona_core::map::{LocationCatalog, SpatialMap};
use sawubona_display::{distance_lines, MapView};
use tracing::debug;

use super::added_lines;
use crate::console::Console;
use crate::error::CliError;

/// The reference school: name, x, y, type
pub const REFERENCE_SPACES: [(&str, i32, i32, &str); 5] = [
    ("Grade R Classroom", 2, 2, "classroom"),
    ("Principal's Office", 7, 2, "office"),
    ("Main Playground", 5, 7, "playground"),
    ("School Library", 2, 5, "library"),
    ("Main Entrance", 5, 1, "entrance"),
];

const BANNER: [&str; 2] = ["WEEK 5: MAPPING OUR SCHOOL", "Ubuntu: Our school is our shared home"];

const REFLECTION: [&str; 5] = [
    "Every space in our school has a purpose.",
    "Every space connects us as a community.",
    "When we understand our school, we understand our Ubuntu.",
    "",
    "'I am because we are' - Our school is our shared home.",
];

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &LocationCatalog,
    grid_size: u16,
) -> Result<(), CliError> {
    let stars = "*".repeat(60);
    console.say(&stars)?;
    for line in BANNER {
        console.say(line)?;
    }
    console.say(&stars)?;
    console.blank()?;
    console.say("Let's map our school together!")?;
    console.say("We'll start with a few key spaces...")?;

    let mut map = SpatialMap::new(grid_size, catalog)?;
    for (name, x, y, kind) in REFERENCE_SPACES {
        console.blank()?;
        match map.add_entry(name, x, y, kind) {
            Ok(index) => console.show(&added_lines(&map, index))?,
            Err(e) => {
                debug!(name, error = %e, "Reference space skipped");
                console.say(&format!("Skipped {}: {}", name, e))?
            }
        }
    }

    console.blank()?;
    console.show(&MapView::new(&map).lines())?;

    let rule = "=".repeat(50);
    console.blank()?;
    console.say(&rule)?;
    console.say("COMPUTATIONAL THINKING: PATTERN RECOGNITION")?;
    console.say(&rule)?;
    match map.distance(0, 3) {
        Ok(distance) => console.show(&distance_lines(&map, &distance))?,
        Err(e) => console.say(&format!("No distance to show: {}", e))?,
    }

    console.blank()?;
    console.say(&rule)?;
    console.say("UBUNTU REFLECTION:")?;
    console.say(&rule)?;
    for line in REFLECTION {
        console.say(line)?;
    }
    console.say(&rule)
}
