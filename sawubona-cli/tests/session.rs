//! Scripted console sessions through the public API

use std::io::Cursor;
use std::path::Path;

use sawubona_cli::commands::{catalog, interactive};
use sawubona_cli::{config, Console};

const VILLAGE: &str = r#"
[map]
grid_size = 5

[catalog]
default_type = "hut"
languages = ["en", "xh"]

[[catalog.types]]
key = "hut"
symbol = "^"
names = { en = "Hut", xh = "Indlu" }

[[catalog.types]]
key = "river"
symbol = "~"
names = { xh = "Umlambo", en = "River" }
"#;

fn run_session(toml: &str, script: &str) -> String {
    let lesson = config::parse(toml, Path::new("village.toml")).unwrap();
    let catalog = config::catalog(&lesson).unwrap();
    let mut console = Console::new(Cursor::new(script.as_bytes()), Vec::new());
    interactive::run(&mut console, &catalog, lesson.map.grid_size).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_village_session() {
    let script = "1\nHome\n0\n0\nhut\n1\nWater\n4\n0\n2\n2\n3\n1\n2\n4\n";
    let out = run_session(VILLAGE, script);

    assert!(out.contains("X coordinate (0-4): "));
    assert!(out.contains("2. River (river)\n"));
    assert!(out.contains("  Type: River | Umlambo\n"));
    assert!(out.contains("  0 1 2 3 4\n0 ^ . . . ~\n"));
    assert!(out.contains("^ = Hut | Indlu\n~ = River | Umlambo\n"));
    assert!(out.contains("Distance from Home to Water:\n   4 grid units\n"));
}

#[test]
fn test_bundled_school_session() {
    let script = "1\nGrade R Classroom\n2\n2\nclassroom\n2\n4\n";
    let out = run_session(config::BUNDLED_CONFIG, script);

    assert!(out.contains("SCHOOL MAP - IBALAZWE LESIKOLE - SKOOLKAART"));
    assert!(out.contains("□ = Classroom | Igumbi Lokufunda | Klaskamer\n"));
    assert!(out.contains("1. Grade R Classroom at (2, 2)\n"));
}

#[test]
fn test_catalog_listing_follows_language_order() {
    let lesson = config::parse(VILLAGE, Path::new("village.toml")).unwrap();
    let types = config::catalog(&lesson).unwrap();
    let mut console = Console::new(Cursor::new(&b""[..]), Vec::new());
    catalog::run(&mut console, &types).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();

    assert!(out.starts_with("Languages: en, xh\n"));
    assert!(out.contains("~ river - en: River, xh: Umlambo\n"));
}
