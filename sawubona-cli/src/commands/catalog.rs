//! `catalog` command: list the location types

use std::io::{BufRead, Write};

use sawubona_core::map::LocationCatalog;

use crate::console::Console;
use crate::error::CliError;

/// Catalog listing, one line per type
pub fn catalog_lines(catalog: &LocationCatalog) -> Vec<String> {
    let languages: Vec<&str> = catalog.languages().iter().map(|l| l.as_str()).collect();
    let mut lines = vec![format!("Languages: {}", languages.join(", ")), String::new()];

    for (id, location_type) in catalog.iter() {
        let names: Vec<String> = location_type
            .names()
            .iter()
            .map(|n| format!("{}: {}", n.lang, n.name))
            .collect();
        let marker = if id == catalog.default_type() { " (default)" } else { "" };
        lines.push(format!(
            "{} {}{} - {}",
            location_type.symbol(),
            location_type.key(),
            marker,
            names.join(", ")
        ));
    }
    lines
}

pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &LocationCatalog,
) -> Result<(), CliError> {
    console.show(&catalog_lines(catalog))
}
