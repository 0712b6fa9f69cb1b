//! Property tests over generated documents.

use proptest::prelude::*;
use syllabus_content::{Insight, render, verify_round_trip};

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..8).prop_map(|words| words.join(" "))
}

fn paragraphs() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..4).prop_map(|lines| lines.join("\n\n"))
}

/// An answer list as an author might type it: per-item bullets, up to three
/// spaces of indentation, loose spacing after the bullet, and blank lines
/// between some items.
#[derive(Debug, Clone)]
struct AnswerList {
    answers: Vec<String>,
    text: String,
    first_bullet: char,
}

fn answer_line() -> impl Strategy<Value = (String, usize, char, usize, bool)> {
    ("[a-z`]{1,12}", 0..4usize, bullet(), 1..4usize, any::<bool>())
}

fn answer_list() -> impl Strategy<Value = AnswerList> {
    prop::collection::vec(answer_line(), 1..7).prop_map(|lines| {
        let mut text = String::new();
        for (i, (answer, indent, bullet, gap, blank_before)) in lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
                if *blank_before {
                    text.push('\n');
                }
            }
            text.push_str(&" ".repeat(*indent));
            text.push(*bullet);
            text.push_str(&" ".repeat(*gap));
            text.push_str(answer);
        }
        AnswerList {
            answers: lines.iter().map(|line| line.0.clone()).collect(),
            first_bullet: lines.first().map_or('*', |line| line.2),
            text,
        }
    })
}

fn footnotes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Z][a-z]{1,8}", sentence()), 0..3)
}

fn bullet() -> impl Strategy<Value = char> {
    prop_oneof![Just('*'), Just('-')]
}

fn document(
    title: &str,
    content: &str,
    question: &str,
    list: &AnswerList,
    notes: &[(String, String)],
) -> String {
    let mut text = format!(
        "---\ntitle: {title}\n---\n\n## Content\n\n{content}\n\n---\n## Practice\n\n{question} ???\n\n{}\n",
        list.text
    );
    if !notes.is_empty() {
        let entries: Vec<String> = notes
            .iter()
            .enumerate()
            .map(|(i, (label, body))| format!("[{}:{label}]\n{body}", i + 1))
            .collect();
        text.push_str(&format!("\n---\n## Footnotes\n\n{}\n", entries.join("\n\n")));
    }
    text
}

proptest! {
    #[test]
    fn answers_keep_order_and_duplicates(
        question in sentence(),
        list in answer_list(),
    ) {
        let text = document("Generated", "Body", &question, &list, &[]);
        let insight = Insight::parse(&text).unwrap();
        let practice = insight.practice_question().unwrap();

        prop_assert_eq!(&practice.answers, &list.answers);
        prop_assert_eq!(practice.bullet, list.first_bullet);
        prop_assert_eq!(practice.placeholder_count("???"), 1);
    }

    #[test]
    fn generated_documents_round_trip(
        title in "Doc[a-z]{2,8}",
        content in paragraphs(),
        question in sentence(),
        list in answer_list(),
        notes in footnotes(),
    ) {
        let text = document(&title, &content, &question, &list, &notes);
        let insight = Insight::parse(&text).unwrap();

        prop_assert!(insight.warnings().is_empty());
        prop_assert!(insight.quiz_question().is_none());
        prop_assert_eq!(insight.slug(), title.to_lowercase());
        prop_assert_eq!(insight.content(), content.as_str());
        prop_assert_eq!(insight.footnote_entries().len(), notes.len());

        let report = verify_round_trip(&insight).unwrap();
        prop_assert!(report.is_faithful(), "{:?}", report.mismatches);

        let again = Insight::parse(&render(&insight).unwrap()).unwrap();
        prop_assert_eq!(again.practice_question(), insight.practice_question());
    }

    #[test]
    fn crlf_documents_match_their_lf_form(
        content in paragraphs(),
        question in sentence(),
        list in answer_list(),
    ) {
        let lf = document("Lines", &content, &question, &list, &[]);
        let crlf = lf.replace('\n', "\r\n");
        let from_lf = Insight::parse(&lf).unwrap();
        let from_crlf = Insight::parse(&crlf).unwrap();

        prop_assert_eq!(from_crlf.content(), from_lf.content());
        prop_assert_eq!(from_crlf.practice_question(), from_lf.practice_question());
        prop_assert!(verify_round_trip(&from_crlf).unwrap().is_faithful());
    }

    #[test]
    fn render_reaches_a_fixed_point(
        content in paragraphs(),
        question in sentence(),
        list in answer_list(),
    ) {
        let text = document("Fixed", &content, &question, &list, &[]);
        let first = render(&Insight::parse(&text).unwrap()).unwrap();
        let second = render(&Insight::parse(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
