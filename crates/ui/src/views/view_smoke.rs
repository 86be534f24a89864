use vowel_core::model::QuestionMode;

use crate::vm::QuizIntent;

use super::test_harness::{ViewHarness, setup_view_harness};

/// The opening `<button ...>` tag carrying `class`.
fn button_tag<'a>(html: &'a str, class: &str) -> &'a str {
    let marker = format!("class=\"{class}\"");
    let at = html.find(&marker).expect("button with class");
    let start = html[..at].rfind("<button").expect("button open");
    let end = at + html[at..].find('>').expect("tag close");
    &html[start..end]
}

fn answer_current(harness: &mut ViewHarness, correct: bool) {
    let pick = harness.with_vm(|vm| {
        let session = vm.session();
        let answer = session.correct_answer().unwrap_or_default();
        session
            .options()
            .iter()
            .find(|option| (option.as_str() == answer) == correct)
            .cloned()
            .expect("option to pick")
    });
    harness.dispatch(QuizIntent::Choose(pick));
    harness.dispatch(QuizIntent::Advance);
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let harness = setup_view_harness(QuestionMode::NameToSymbol, false);
    let html = harness.render();
    let prompt = harness.with_vm(|vm| vm.session().prompt().unwrap_or_default().to_string());

    assert!(html.contains("IPA Vowel Quiz"), "missing title in {html}");
    assert!(html.contains("1 / 17"), "missing progress in {html}");
    assert!(html.contains(&prompt), "missing prompt {prompt} in {html}");
    assert!(html.contains("Show examples"), "missing toggle in {html}");
    assert!(html.contains("display: none;"), "examples should start hidden in {html}");
    assert_eq!(html.matches("class=\"choice\"").count(), 4, "expected 4 options in {html}");
    assert!(html.contains("Next"), "missing advance button in {html}");
}

#[test]
fn quiz_view_smoke_marks_choice_and_toggles_examples() {
    let mut harness = setup_view_harness(QuestionMode::NameToSymbol, false);

    harness.dispatch(QuizIntent::ToggleExamples);
    let html = harness.render();
    assert!(html.contains("Hide examples"), "missing toggle in {html}");
    assert!(!html.contains("display: none;"), "examples still hidden in {html}");
    assert!(html.contains("class=\"vowel\""), "missing highlight in {html}");

    let correct = harness.with_vm(|vm| vm.session().correct_answer().unwrap_or_default().to_string());
    harness.dispatch(QuizIntent::Choose(correct));
    let html = harness.render();
    assert!(html.contains("choice picked correct"), "missing picked state in {html}");
    assert_eq!(html.matches("class=\"choice\"").count(), 3);
}

#[test]
fn quiz_view_smoke_rejects_advance_without_choice() {
    let mut harness = setup_view_harness(QuestionMode::NameToSymbol, false);
    harness.dispatch(QuizIntent::Advance);
    let html = harness.render();
    assert!(html.contains("Pick an answer before moving on."), "missing error in {html}");
    assert!(html.contains("1 / 17"), "progress moved in {html}");
}

#[test]
fn quiz_view_smoke_runs_to_summary_and_restarts() {
    let mut harness = setup_view_harness(QuestionMode::NameToSymbol, false);

    for question in 0..17 {
        answer_current(&mut harness, question % 3 != 0);
    }

    let html = harness.render();
    assert!(html.contains("Results"), "missing summary heading in {html}");
    assert!(html.contains("11 / 17 correct"), "missing score in {html}");
    assert!(html.contains("Play again"), "missing restart in {html}");
    assert!(html.contains("Schwa"), "missing dataset row in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("1 / 17"), "restart did not reset progress in {html}");
    assert!(!html.contains("Play again"), "summary still shown in {html}");
    assert!(harness.with_vm(|vm| vm.session().results().is_empty()));
}

#[test]
fn quiz_view_smoke_honors_launch_options() {
    let harness = setup_view_harness(QuestionMode::SymbolToName, true);
    let html = harness.render();
    let symbol = harness.with_vm(|vm| {
        vm.session()
            .current_entry()
            .map(|entry| entry.symbol().to_string())
            .unwrap_or_default()
    });

    assert!(html.contains("Hide examples"), "examples not shown in {html}");
    assert!(html.contains(&symbol), "missing symbol prompt {symbol} in {html}");
    assert!(html.contains("class=\"mode active\""), "missing active mode in {html}");
}

#[test]
fn quiz_view_smoke_active_mode_button_is_disabled() {
    let mut harness = setup_view_harness(QuestionMode::NameToSymbol, false);
    let correct = harness.with_vm(|vm| vm.session().correct_answer().unwrap_or_default().to_string());
    harness.dispatch(QuizIntent::Choose(correct));

    let html = harness.render();
    assert!(button_tag(&html, "mode active").contains("disabled"), "active mode clickable in {html}");
    assert!(!button_tag(&html, "mode").contains("disabled"), "other mode disabled in {html}");

    harness.dispatch(QuizIntent::SetMode(QuestionMode::SymbolToName));
    let html = harness.render();
    assert!(!html.contains("choice picked"), "switching mode should clear the pick in {html}");
    assert!(!button_tag(&html, "mode").contains("disabled"), "name mode should be clickable in {html}");
}
