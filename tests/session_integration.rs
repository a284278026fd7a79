//! Integration tests for the command interpreter and deploy timeline
//!
//! These drive a full session through its public API with fabricated
//! instants, verifying the end-to-end properties:
//! - "deploy" anywhere in the input starts the 5-step timeline
//! - the busy flag gates input for exactly the duration of the run
//! - clear/help/unknown/empty behave as single-step commands

use autodeploy::core::types::LogKind;
use autodeploy::session::Session;
use autodeploy::timeline::DEPLOY_TIMELINE;
use std::time::{Duration, Instant};

fn messages(session: &Session) -> Vec<String> {
    session
        .log()
        .entries()
        .iter()
        .map(|e| e.message.clone())
        .collect()
}

#[test]
fn test_full_deploy_session() {
    let start = Instant::now();
    let mut session = Session::new();
    assert_eq!(session.log().len(), 3, "boot banner has three entries");

    // Surrounding text and case do not matter for deploy.
    assert!(session.submit("DEPLOY now", start));
    assert!(session.deploying());

    // Echo plus immediate first step.
    assert_eq!(session.log().len(), 5);
    assert_eq!(
        &messages(&session)[3..],
        &["> DEPLOY now", "Analyzing project structure..."]
    );

    // Steps fire in offset order as time passes.
    for (i, step) in DEPLOY_TIMELINE.iter().enumerate().skip(1) {
        session.advance(start + step.offset);
        assert_eq!(session.log().len(), 5 + i);
        assert_eq!(messages(&session).last().unwrap(), step.message);
    }

    assert!(!session.deploying(), "busy flag clears with the last step");
    assert_eq!(session.log().len(), 4 + DEPLOY_TIMELINE.len());
}

#[test]
fn test_input_gated_while_deploying() {
    let start = Instant::now();
    let mut session = Session::new();
    session.submit("deploy", start);
    let len_during = session.log().len();

    // Rejected attempts leave no trace in the log.
    assert!(!session.submit("help", start + Duration::from_millis(100)));
    assert!(!session.submit("deploy again", start + Duration::from_millis(200)));
    assert_eq!(session.log().len(), len_during);

    session.advance(start + Duration::from_millis(4000));
    assert!(!session.deploying());
    assert!(session.submit("help", start + Duration::from_millis(4100)));
}

#[test]
fn test_clear_empties_regardless_of_prior_content() {
    let now = Instant::now();
    let mut session = Session::new();
    session.submit("status", now);
    session.submit("help", now);
    assert!(!session.log().is_empty());

    session.submit("CLEAR", now);
    assert!(session.log().is_empty());
}

#[test]
fn test_unknown_command_message_is_exact() {
    let now = Instant::now();
    let mut session = Session::new();
    let before = session.log().len();
    session.submit("status", now);

    let entries = session.log().entries();
    assert_eq!(entries.len(), before + 2);
    let error = &entries[entries.len() - 1];
    assert_eq!(error.message, "Unknown command: status");
    assert_eq!(error.kind, LogKind::Error);
}

#[test]
fn test_help_appends_exactly_one_info_entry_after_echo() {
    let now = Instant::now();
    let mut session = Session::new();
    let before = session.log().len();
    session.submit("help", now);

    let entries = session.log().entries();
    assert_eq!(entries.len(), before + 2);
    assert_eq!(
        entries[entries.len() - 1].message,
        "Available commands: deploy, status, clear, help"
    );
    assert_eq!(entries[entries.len() - 1].kind, LogKind::Info);
}

#[test]
fn test_whitespace_submission_changes_nothing() {
    let now = Instant::now();
    let mut session = Session::new();
    let before = session.log().len();

    assert!(!session.submit("", now));
    assert!(!session.submit("   \t ", now));
    assert_eq!(session.log().len(), before);
    assert!(!session.deploying());
}

#[test]
fn test_back_to_back_deploys() {
    let start = Instant::now();
    let mut session = Session::new();

    session.submit("deploy", start);
    session.advance(start + Duration::from_secs(5));
    let after_first = session.log().len();

    let second = start + Duration::from_secs(6);
    session.submit("deploy", second);
    assert!(session.deploying());
    session.advance(second + Duration::from_secs(5));

    assert!(!session.deploying());
    assert_eq!(session.log().len(), after_first + 1 + DEPLOY_TIMELINE.len());
}
