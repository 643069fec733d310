use quiz_core::model::{AuthToken, Credentials, Question, ScoreOwner, ScoreboardEntry, Session};
use services::{ApiCall, InMemoryQuizApi};

use super::test_harness::{drive_dom, setup_view_harness};

fn question(text: &str, correct: &str, explanation: Option<&str>) -> Question {
    Question::new(
        text,
        vec!["x".to_string(), "y".to_string(), "z".to_string()],
        correct,
        explanation.map(str::to_string),
    )
}

fn signed_in() -> Session {
    let mut session = Session::new();
    session.set_token(AuthToken::new("abc"));
    session
}

#[tokio::test(flavor = "current_thread")]
async fn login_screen_without_token() {
    let mut harness = setup_view_harness(InMemoryQuizApi::new(), Session::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("IntelliQuiz Login"), "missing title in {html}");
    assert!(html.contains("Login"), "missing button in {html}");
    assert!(html.contains("Server: in-memory"), "missing backend in {html}");
    assert!(!html.contains("Generate Quiz"), "quiz leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_screen_with_token() {
    let mut harness = setup_view_harness(InMemoryQuizApi::new(), signed_in());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generate Quiz"), "missing generate button in {html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
    assert!(!html.contains("Submit Quiz"), "no quiz yet but found submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn in_progress_quiz_lists_questions() {
    let mut session = signed_in();
    session.set_quiz(vec![question("2+2?", "y", None), question("3+3?", "z", None)]);
    session.set_answer(0, "y").expect("answer");

    let mut harness = setup_view_harness(InMemoryQuizApi::new(), session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Q1. 2+2?"), "missing first heading in {html}");
    assert!(html.contains("Q2. 3+3?"), "missing second heading in {html}");
    assert!(html.contains("1 of 2 answered"), "missing progress in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");
    assert!(!html.contains("Score:"), "results shown before submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn graded_quiz_shows_full_score() {
    let mut session = signed_in();
    session.set_quiz(vec![question("A?", "x", None), question("B?", "y", None)]);
    session.set_answer(0, "x").expect("answer");
    session.set_answer(1, "y").expect("answer");
    session.submit();

    let mut harness = setup_view_harness(InMemoryQuizApi::new(), session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Score: 2/2"), "missing score in {html}");
    assert!(html.contains("100% accuracy"), "missing accuracy in {html}");
    assert!(html.contains("Difficulty: Hard"), "missing difficulty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn graded_quiz_explains_wrong_answers() {
    let mut session = signed_in();
    session.set_quiz(vec![
        question("A?", "x", Some("Because x.")),
        question("B?", "y", Some("Y is right.")),
    ]);
    session.set_answer(0, "x").expect("answer");
    session.set_answer(1, "z").expect("answer");
    session.submit();

    let mut harness = setup_view_harness(InMemoryQuizApi::new(), session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Q1: Correct"), "missing verdict in {html}");
    assert!(html.contains("Q2: Wrong"), "missing verdict in {html}");
    assert!(html.contains("Correct answer: y"), "missing answer in {html}");
    assert!(html.contains("Y is right."), "missing explanation in {html}");
    assert!(html.contains("Score: 1/2"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn scoreboard_loads_for_signed_in_user() {
    let api = InMemoryQuizApi::new().with_scoreboard(vec![ScoreboardEntry {
        user: ScoreOwner {
            name: "Ada".to_string(),
            email: None,
        },
        score: 5,
        total: 5,
        percentage: 100,
        topic: Some("Rust".to_string()),
        difficulty: None,
    }]);
    let mut harness = setup_view_harness(api, signed_in());
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("1. Ada"), "missing entry in {html}");
    assert!(html.contains("Score: 5/5 (100%)"), "missing entry score in {html}");
    assert!(harness.api.calls().contains(&ApiCall::ListScores));
}

#[tokio::test(flavor = "current_thread")]
async fn login_switches_to_quiz_and_logout_returns() {
    let api = InMemoryQuizApi::new().with_account("a@b.com", "x", "abc");
    let mut harness = setup_view_harness(api, Session::new());
    harness.rebuild();
    assert!(harness.render().contains("IntelliQuiz Login"));

    // Same draft-and-commit sequence the login button runs.
    let auth = harness.services.auth();
    let mut draft = harness.session();
    auth.login(&mut draft, Credentials::new("a@b.com", "x"))
        .await
        .expect("login");
    harness.update_session(|session| *session = draft);

    let html = harness.render();
    assert!(html.contains("Generate Quiz"), "no quiz screen in {html}");
    assert!(!html.contains("IntelliQuiz Login"), "login still shown in {html}");
    assert_eq!(harness.session().token(), Some(&AuthToken::new("abc")));

    harness.update_session(|session| {
        session.set_quiz(vec![question("A?", "x", None)]);
        session.set_answer(0, "x").expect("answer");
    });
    assert!(harness.render().contains("Q1. A?"));

    harness.update_session(|session| auth.logout(session));

    let html = harness.render();
    assert!(html.contains("IntelliQuiz Login"), "no login screen in {html}");
    assert!(!html.contains("Q1. A?"), "quiz survived logout in {html}");
    let session = harness.session();
    assert!(session.token().is_none());
    assert!(session.quiz().is_empty());
    assert!(session.answers().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn failed_login_stays_on_login_screen() {
    let api = InMemoryQuizApi::new().with_account("a@b.com", "x", "abc");
    let mut harness = setup_view_harness(api, Session::new());
    harness.rebuild();

    let auth = harness.services.auth();
    let mut draft = harness.session();
    let result = auth
        .login(&mut draft, Credentials::new("a@b.com", "wrong"))
        .await;
    assert!(result.is_err());
    assert!(draft.token().is_none());

    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("IntelliQuiz Login"), "left login in {html}");
    assert!(harness.session().token().is_none());
}
