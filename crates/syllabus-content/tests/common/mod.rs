//! Shared helpers for the syllabus-content integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use syllabus_content::{ContentSource, FsSource, Insight};

/// Directory holding the fixture insights.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("insights")
}

/// Source rooted at the fixture directory.
pub fn fixture_source() -> FsSource {
    FsSource::with_root(fixtures_dir())
}

/// Raw text of one fixture.
pub fn fixture_text(name: &str) -> String {
    fixture_source().read(Path::new(name)).unwrap()
}

/// Load one fixture, slug taken from its file name.
pub fn load_fixture(name: &str) -> Insight {
    Insight::load(&fixture_source(), Path::new(name)).unwrap()
}

/// Load every fixture, sorted by file name.
pub fn load_all_fixtures() -> Vec<Insight> {
    let mut names: Vec<String> = std::fs::read_dir(fixtures_dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".md"))
        .collect();
    names.sort();
    names.iter().map(|name| load_fixture(name)).collect()
}
