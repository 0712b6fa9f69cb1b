//! Fixture documents parsed end to end.

use syllabus_content::{Insight, SectionKind};

use crate::common::{fixture_text, load_all_fixtures, load_fixture};

#[test]
fn test_union_document() {
    let insight = load_fixture("union.md");

    assert_eq!(insight.title(), Some("UNION"));
    assert_eq!(insight.slug(), "union");
    assert!(insight.warnings().is_empty());

    let practice = insight.practice_question().unwrap();
    assert_eq!(
        practice.answers,
        vec![
            "`FROM`",
            "`UNION`",
            "`name`",
            "`region_name`",
            "`ON`",
            "`OUTER JOIN`",
            "`*`"
        ]
    );
    assert_eq!(practice.placeholder_count("???"), 3);

    let revision = insight.revision_question().unwrap();
    assert_eq!(
        revision.text,
        "??? command retrieves all rows, `even duplicated`, of the union."
    );
    assert_eq!(
        revision.answers,
        vec!["`UNION ALL`", "`UNION`", "`JOIN`", "`SELECT`"]
    );
}

#[test]
fn test_union_content_keeps_markup() {
    let insight = load_fixture("union.md");
    let content = insight.content();

    assert!(content.starts_with("The **union** of two or more tables"));
    assert!(content.contains("```SQL\nSELECT *\nFROM language\n"));
    assert!(content.contains("### UNION ALL"));
    assert!(content.ends_with("use `UNION ALL`."));
}

#[test]
fn test_union_metadata() {
    let insight = load_fixture("union.md");
    let metadata = insight.metadata();

    assert_eq!(metadata.author.as_deref(), Some("catalin"));
    assert_eq!(metadata.levels, vec!["beginner", "basic"]);
    assert_eq!(metadata.kind.as_deref(), Some("normal"));
    assert_eq!(metadata.category.as_deref(), Some("must-know"));
    assert_eq!(metadata.parent.as_deref(), Some("union-all"));
    assert_eq!(metadata.links.len(), 1);
    assert!(metadata.get("standards").is_some());
}

#[test]
fn test_union_quiz() {
    let insight = load_fixture("union.md");
    let quiz = insight.quiz_question().unwrap();

    assert_eq!(quiz.headline, "Can you use a UNION of SELECTs?");
    assert!(
        quiz.question
            .starts_with("Given the tables called `item_pocket` and `item_category`:")
    );
    assert!(quiz.question.contains("-|-"));
    assert_eq!(quiz.answers, vec!["4", "2", "0"]);
    assert!(quiz.raw_text.starts_with("Given the tables called"));
    assert!(quiz.raw_text.ends_with(&quiz.answer_list));
}

#[test]
fn test_curl_footnotes() {
    let insight = load_fixture("Using `curl` To Make HTTP Requests.md");

    assert_eq!(insight.slug(), "using-curl-to-make-http-requests");
    assert_eq!(
        insight.footnotes(),
        Some(
            "[1:User Agents]\nApplications that are acting on behalf of the user. One category of user agents includes web browsers.\n\nA user agent sends information to the server about the web browser, operating system and device (whether the desktop or mobile version of the website should be fetched)."
        )
    );

    let entries = insight.footnote_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].index, 1);
    assert_eq!(entries[0].label, "User Agents");
}

#[test]
fn test_curl_dash_bullets() {
    let insight = load_fixture("Using `curl` To Make HTTP Requests.md");

    let practice = insight.practice_question().unwrap();
    assert_eq!(practice.bullet, '-');
    assert_eq!(
        practice.answers,
        vec![
            "the resource requested",
            "the new entity created",
            "the HTTP version",
            "the same initial headers"
        ]
    );

    let revision = insight.revision_question().unwrap();
    assert!(revision.text.ends_with("https://catpictures.com/cat1.jpg\n```"));
    assert_eq!(revision.answers.len(), 5);
}

#[test]
fn test_ping_without_quiz() {
    let insight = load_fixture("Using `ping` To Measure Network Latency.md");

    assert_eq!(insight.slug(), "using-ping-to-measure-network-latency");
    assert_eq!(insight.metadata().levels, vec!["beginner"]);
    assert!(insight.quiz_question().is_none());
    assert!(insight.footnotes().is_none());
    assert_eq!(
        insight.practice_question().unwrap().text,
        "`ping` will send ??? and count the time until the\n\n???."
    );
    assert_eq!(
        insight.revision_question().unwrap().answers,
        vec!["a close one", "a distant one", "the distance isn’t relevant"]
    );
}

#[test]
fn test_osi_title_from_heading() {
    let insight = load_fixture("OSI Model.md");

    assert!(insight.metadata().title.is_none());
    assert_eq!(insight.title(), Some("OSI Model"));
    assert_eq!(insight.slug(), "osi-model");
}

#[test]
fn test_osi_numbered_list_stays_in_question() {
    let insight = load_fixture("OSI Model.md");
    let revision = insight.revision_question().unwrap();

    assert!(revision.text.ends_with("6. ???\n7. ???"));
    assert_eq!(revision.placeholder_count("???"), 7);
    assert_eq!(revision.answers.first().map(String::as_str), Some("Physical Layer"));
    assert_eq!(revision.answers.len(), 7);
}

#[test]
fn test_osi_quiz_without_answers() {
    let insight = load_fixture("OSI Model.md");
    let quiz = insight.quiz_question().unwrap();

    assert_eq!(quiz.headline, "What is the OSI 7 Layer Model?");
    assert_eq!(quiz.question, "What is the OSI 7 Layer Model?");
    assert!(quiz.answers.is_empty());
}

#[test]
fn test_all_fixtures_parse_cleanly() {
    let insights = load_all_fixtures();
    assert_eq!(insights.len(), 4);

    for insight in &insights {
        assert!(!insight.slug().is_empty());
        assert!(insight.title().is_some());
        assert!(!insight.content().is_empty());
        assert!(insight.practice_question().is_some(), "{}", insight.slug());
        assert!(insight.revision_question().is_some(), "{}", insight.slug());
        assert!(insight.warnings().is_empty(), "{}", insight.slug());
    }
}

#[test]
fn test_slug_without_path_comes_from_title() {
    let insight = Insight::parse(&fixture_text("Using `curl` To Make HTTP Requests.md")).unwrap();
    assert_eq!(insight.slug(), "using-curl-to-make-http-requests");
}

#[test]
fn test_broken_sections_are_reported() {
    let text = "---\ntitle: Broken\n---\n\n## Practice\n\nNo list here.\n\n---\n## Quiz\n\n\n---\n## Footnotes\n\nplain text\n";
    let insight = Insight::parse(text).unwrap();

    assert!(insight.practice_question().is_none());
    assert!(insight.quiz_question().is_none());
    assert!(insight.footnotes().is_none());

    let kinds: Vec<SectionKind> = insight.warnings().iter().map(|w| w.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Practice,
            SectionKind::Quiz,
            SectionKind::Footnotes
        ]
    );
}
