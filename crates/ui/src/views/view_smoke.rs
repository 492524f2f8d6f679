use std::time::Duration;

use dioxus::prelude::Key;

use services::{ViewerIntent, ViewerOptions};
use slides_core::COMPLETION_MESSAGE_DELAY;
use slides_core::model::{GroupId, QuizId, RevealId};

use super::test_harness::setup_viewer_harness;

const PRACTICE_GROUP: GroupId = GroupId::new(0);
const CHALLENGE_QUIZ: QuizId = QuizId::new(1);
const FINAL_QUIZ: QuizId = QuizId::new(2);
const WELCOME_REVEAL: RevealId = RevealId::new(0);

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_renders_first_page() {
    let harness = setup_viewer_harness(ViewerOptions::default(), "");
    let html = harness.render();
    assert!(html.contains("Ownership in Rust"), "missing title in {html}");
    assert!(html.contains("Page 1 / 4"), "missing indicator in {html}");
    assert!(
        html.contains(r#"class="page active" id="page-1""#),
        "first page not active in {html}"
    );
    assert!(harness.with_viewer(|viewer| viewer.prev_disabled()));
    assert!(!harness.with_viewer(|viewer| viewer.next_disabled()));
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_opens_requested_page() {
    let harness = setup_viewer_harness(ViewerOptions::default(), "?page=3");
    let html = harness.render();
    assert!(html.contains("Page 3 / 4"), "missing indicator in {html}");
    assert!(
        html.contains(r#"class="page active" id="page-3""#),
        "third page not active in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_next_updates_indicator_and_location() {
    let mut harness = setup_viewer_harness(ViewerOptions::default(), "?lang=en");
    harness.dispatch(ViewerIntent::Next);

    let html = harness.render();
    assert!(html.contains("Page 2 / 4"), "missing indicator in {html}");
    let location = harness.with_viewer(|viewer| viewer.location());
    assert_eq!(location.query(), Some("lang=en&page=2"));
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_switches_tabs() {
    let mut harness = setup_viewer_harness(ViewerOptions::default(), "?page=2");
    let html = harness.render();
    assert!(
        html.contains(r#"class="tab-content active" id="group-0-moves""#),
        "first tab not active in {html}"
    );

    harness.dispatch(ViewerIntent::SelectTab {
        group: PRACTICE_GROUP,
        tab: "practice".to_string(),
    });

    let html = harness.render();
    assert!(
        html.contains(r#"class="tab-content active" id="group-0-practice""#),
        "practice tab not active in {html}"
    );
    assert!(
        html.contains(r#"class="tab-content" id="group-0-moves""#),
        "moves tab still active in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_shows_score_then_delayed_message() {
    let mut harness = setup_viewer_harness(ViewerOptions::default(), "?page=4");
    for (question, option) in [(0, 1), (1, 0), (2, 1), (3, 0), (4, 1)] {
        harness.dispatch(ViewerIntent::Answer {
            quiz: FINAL_QUIZ,
            question,
            option,
        });
    }

    let html = harness.render();
    assert!(html.contains("Score: 5/5"), "missing score in {html}");
    assert!(
        !html.contains("Excellent!"),
        "message shown before the delay in {html}"
    );

    harness
        .drive_for(COMPLETION_MESSAGE_DELAY + Duration::from_millis(200))
        .await;

    let html = harness.render();
    assert!(
        html.contains("Excellent!"),
        "missing completion message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_marks_answers_and_shows_feedback() {
    let mut harness = setup_viewer_harness(ViewerOptions::default(), "?page=3");
    let html = harness.render();
    assert!(!html.contains("Both inputs share"), "feedback visible early in {html}");

    harness.dispatch(ViewerIntent::Answer {
        quiz: CHALLENGE_QUIZ,
        question: 0,
        option: 1,
    });

    let html = harness.render();
    assert!(html.contains("quiz-option wrong"), "missing wrong mark in {html}");
    assert!(html.contains("quiz-option correct"), "missing correct mark in {html}");
    assert!(html.contains("Score: 0/1"), "missing score in {html}");
    assert!(html.contains("Both inputs share"), "missing feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_reveals_feedback() {
    let mut harness = setup_viewer_harness(ViewerOptions::default(), "");
    let html = harness.render();
    assert!(!html.contains("Moves, borrows, and lifetimes"), "revealed early in {html}");

    harness.dispatch(ViewerIntent::Reveal(WELCOME_REVEAL));

    let html = harness.render();
    assert!(
        html.contains("Moves, borrows, and lifetimes"),
        "missing revealed feedback in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_simple_mode_ignores_location() {
    let mut harness = setup_viewer_harness(ViewerOptions::simple(), "?page=3");
    let html = harness.render();
    assert!(html.contains("Page 1 / 4"), "missing indicator in {html}");

    harness.dispatch(ViewerIntent::Next);
    let location = harness.with_viewer(|viewer| viewer.location());
    assert_eq!(location.query(), Some("page=3"));
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_arrow_keys_turn_pages() {
    let mut harness = setup_viewer_harness(ViewerOptions::default(), "");
    assert!(harness.press_key(Key::ArrowRight));
    assert!(harness.press_key(Key::ArrowRight));
    assert!(harness.press_key(Key::ArrowLeft));
    assert!(!harness.press_key(Key::Enter));

    let html = harness.render();
    assert!(html.contains("Page 2 / 4"), "missing indicator in {html}");

    assert!(harness.press_key(Key::ArrowLeft));
    assert!(!harness.press_key(Key::ArrowLeft));
    let html = harness.render();
    assert!(html.contains("Page 1 / 4"), "missing indicator in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn viewer_smoke_simple_mode_ignores_arrow_keys() {
    let mut harness = setup_viewer_harness(ViewerOptions::simple(), "");
    assert!(!harness.press_key(Key::ArrowRight));
    let html = harness.render();
    assert!(html.contains("Page 1 / 4"), "missing indicator in {html}");
}
