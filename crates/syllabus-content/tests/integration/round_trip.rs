//! Render/parse cycles over the fixture documents.

use std::path::Path;

use syllabus_content::{
    ContentConfig, ContentSource, FsSource, Insight, collapse_blank_lines, render,
    render::render_with, verify_round_trip,
};
use tempfile::TempDir;

use crate::common::{load_all_fixtures, load_fixture};

#[test]
fn test_fixtures_round_trip() {
    for insight in load_all_fixtures() {
        let report = verify_round_trip(&insight).unwrap();
        assert!(
            report.is_faithful(),
            "{} changed: {:?}",
            insight.slug(),
            report.mismatches
        );
    }
}

#[test]
fn test_rendered_fields_match() {
    for insight in load_all_fixtures() {
        let rendered = render(&insight).unwrap();
        let again = Insight::parse(&rendered).unwrap();

        assert_eq!(again.metadata(), insight.metadata(), "{}", insight.slug());
        assert_eq!(again.title(), insight.title());
        assert_eq!(
            collapse_blank_lines(again.content()),
            collapse_blank_lines(insight.content())
        );
        assert_eq!(
            again.practice_question().map(|q| &q.answers),
            insight.practice_question().map(|q| &q.answers)
        );
        assert_eq!(
            again.revision_question().map(|q| &q.answers),
            insight.revision_question().map(|q| &q.answers)
        );
        assert_eq!(again.footnotes(), insight.footnotes());
    }
}

#[test]
fn test_render_is_stable() {
    for insight in load_all_fixtures() {
        let first = render(&insight).unwrap();
        let second = render(&Insight::parse(&first).unwrap()).unwrap();
        assert_eq!(first, second, "{}", insight.slug());
    }
}

#[test]
fn test_quiz_survives_when_well_formed() {
    let insight = load_fixture("union.md");
    let again = Insight::parse(&render(&insight).unwrap()).unwrap();

    let before = insight.quiz_question().unwrap();
    let after = again.quiz_question().unwrap();
    assert_eq!(after.headline, before.headline);
    assert_eq!(after.question, before.question);
    assert_eq!(after.answers, before.answers);
}

#[test]
fn test_round_trip_without_separators() {
    let config = ContentConfig::from_toml_str("section_separators = false").unwrap();
    let insight = load_fixture("Using `ping` To Measure Network Latency.md");

    let rendered = render_with(&insight, &config).unwrap();
    assert!(!rendered.contains("\n---\n## "));

    let again = Insight::parse(&rendered).unwrap();
    assert_eq!(again.content(), insight.content());
    assert_eq!(
        again.practice_question().map(|q| &q.raw_text),
        insight.practice_question().map(|q| &q.raw_text)
    );
}

#[test]
fn test_store_and_reload_from_disk() {
    let dir = TempDir::new().unwrap();
    let target = FsSource::with_root(dir.path());

    for insight in load_all_fixtures() {
        let file = format!("{}.md", insight.slug());
        insight.store(&target, Path::new(&file)).unwrap();

        let reloaded = Insight::load(&target, Path::new(&file)).unwrap();
        assert_eq!(reloaded.slug(), insight.slug());
        assert_eq!(reloaded.metadata(), insight.metadata());
        assert!(!target.read(Path::new(&file)).unwrap().is_empty());
    }
}
