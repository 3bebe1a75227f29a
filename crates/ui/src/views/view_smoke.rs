use mentor_core::model::SuggestionKind;

use super::test_harness::{ViewKind, setup_view_harness};
use crate::vm::AssessmentIntent;
use crate::vm::ChatIntent;

fn notice_titles(harness: &mut super::test_harness::ViewHarness) -> Vec<String> {
    harness.act(|handles| {
        handles
            .notices()
            .entries()
            .iter()
            .map(|entry| entry.notice.title().to_string())
            .collect()
    })
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_landing_sections() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "AI 360 Career Mentor",
        "Start Career Chat",
        "Career Paths Analyzed",
        "↑12%",
        "Powerful Career Development Tools",
        "Try Beta",
        "Upgrade to Pro",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    // Chat is the default tab.
    assert!(html.contains("I&#39;m your AI Career Mentor") || html.contains("I'm your AI Career Mentor"));
}

#[tokio::test(flavor = "current_thread")]
async fn app_routes_smoke_render_layout() {
    let mut harness = setup_view_harness(ViewKind::App);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Your Professional Growth Companion"), "missing header in {html}");
    assert!(html.contains("Career Chat"), "missing nav in {html}");
    assert!(html.contains("Empowering careers"), "missing footer in {html}");
    assert!(html.contains("Take Assessment"), "missing home view in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_suggestion_gets_reply() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Recommend learning resources"), "missing suggestions in {html}");

    harness.act(|handles| {
        handles
            .chat
            .dispatch()
            .call(ChatIntent::Suggest(SuggestionKind::Learning));
    });
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("message--user"), "missing user message in {html}");
    assert!(html.contains("recommend personalized learning resources"), "missing reply in {html}");
    assert!(!html.contains("class=\"suggestions\""), "suggestions still shown in {html}");
    assert_eq!(notice_titles(&mut harness), vec!["Message sent"]);
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_rejects_blank_message() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();

    harness.act(|handles| handles.chat.dispatch().call(ChatIntent::Send("   ".to_string())));
    let html = harness.render();
    assert!(html.contains("Type a message first."), "missing error in {html}");
    assert!(notice_titles(&mut harness).is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 5"), "missing position in {html}");
    assert!(html.contains("20%"), "missing progress in {html}");
    assert!(html.contains("What work environment motivates you most?"), "missing prompt in {html}");
    assert!(html.contains("Category: WORK STYLE"), "missing category in {html}");
    assert!(html.contains("0 answered"), "missing answered count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_completes_with_results() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();

    for pick in [0, 1, 2, 3] {
        harness.act(|handles| handles.assessment.dispatch().call(AssessmentIntent::Select(pick)));
    }
    let html = harness.render();
    assert!(html.contains("Question 5 of 5"), "missing last question in {html}");
    assert!(html.contains("4 answered"), "missing answered count in {html}");

    harness.act(|handles| handles.assessment.dispatch().call(AssessmentIntent::Select(0)));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your Career Assessment Results"), "missing results in {html}");
    assert!(html.contains("85% Match"), "missing score in {html}");
    assert!(html.contains("Continuous Learning"), "missing category in {html}");
    assert_eq!(notice_titles(&mut harness), vec!["Assessment Complete!"]);

    harness.act(|handles| handles.assessment.dispatch().call(AssessmentIntent::Retake));
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "retake did not restart in {html}");
    let answered = harness.act(|handles| handles.assessment.vm().read().question().map(|q| q.answered_label));
    assert_eq!(answered.as_deref(), Some("0 answered"));
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_flags_invalid_choice() {
    let mut harness = setup_view_harness(ViewKind::Assessment);
    harness.rebuild();

    harness.act(|handles| handles.assessment.dispatch().call(AssessmentIntent::Select(9)));
    let html = harness.render();
    assert!(html.contains("That answer is not available"), "missing error in {html}");
    assert!(html.contains("Question 1 of 5"), "question advanced in {html}");
}
