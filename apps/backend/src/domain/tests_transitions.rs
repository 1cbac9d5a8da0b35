use crate::domain::session::Phase;
use crate::domain::test_state_helpers::{guessing_session, open_session};
use crate::domain::transitions::{join, open, reset, submit_answer, submit_guess, GuessOutcome};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[test]
fn open_moves_created_to_p1_answer_once() {
    let mut session = open_session(&["Q1"]);
    assert_eq!(session.phase, Phase::P1Answer);

    let err = open(&mut session).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::PhaseMismatch { .. }, _)
    ));
}

#[test]
fn answers_advance_to_guessing_exactly_on_last_prompt() {
    let mut session = open_session(&["Q1", "Q2", "Q3"]);

    assert_eq!(submit_answer(&mut session, "red").unwrap(), 0);
    assert_eq!(session.phase, Phase::P1Answer);
    assert_eq!(session.current_index, 1);
    assert_eq!(session.answers.len(), session.current_index);

    assert_eq!(submit_answer(&mut session, "pizza").unwrap(), 1);
    assert_eq!(session.phase, Phase::P1Answer);
    assert_eq!(session.answers.len(), 2);

    assert_eq!(submit_answer(&mut session, "  Lagos ").unwrap(), 2);
    assert_eq!(session.phase, Phase::P2Guess);
    assert_eq!(session.current_index, 0);
    assert_eq!(session.answers, vec!["red", "pizza", "Lagos"]);
}

#[test]
fn blank_answer_is_rejected_without_change() {
    let mut session = open_session(&["Q1", "Q2"]);
    let before = session.clone();

    let err = submit_answer(&mut session, "   ").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::EmptyInput, _)
    ));
    assert_eq!(session.answers, before.answers);
    assert_eq!(session.current_index, before.current_index);
}

#[test]
fn answer_during_guessing_is_phase_mismatch() {
    let mut session = guessing_session(&["a", "b"]);
    let err = submit_answer(&mut session, "late").unwrap_err();
    match err {
        DomainError::Conflict(ConflictKind::PhaseMismatch { expected, actual }, _) => {
            assert_eq!(expected, Phase::P1Answer);
            assert_eq!(actual, Phase::P2Guess);
        }
        other => panic!("expected phase mismatch, got {other:?}"),
    }
    assert_eq!(session.answers, vec!["a", "b"]);
    assert_eq!(session.phase, Phase::P2Guess);
}

#[test]
fn guess_before_answers_complete_is_phase_mismatch() {
    let mut session = open_session(&["Q1", "Q2"]);
    join(&mut session, "Bo").unwrap();
    assert!(matches!(
        submit_guess(&mut session, "x"),
        Err(DomainError::Conflict(ConflictKind::PhaseMismatch { .. }, _))
    ));
}

#[test]
fn guess_requires_joined_guest() {
    let mut session = open_session(&["Q1"]);
    submit_answer(&mut session, "yes").unwrap();
    assert_eq!(session.phase, Phase::P2Guess);

    let err = submit_guess(&mut session, "yes").unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::NotJoined, _)));
    assert!(session.guesses.is_empty());
    assert_eq!(session.score, 0);
}

#[test]
fn blank_guess_is_rejected_without_change() {
    let mut session = guessing_session(&["a"]);
    let err = submit_guess(&mut session, "\t").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::EmptyInput, _)
    ));
    assert_eq!(session.current_index, 0);
    assert!(session.guesses.is_empty());
}

#[test]
fn guess_matching_is_case_and_trim_insensitive() {
    let mut session = guessing_session(&["paris"]);
    let outcome = submit_guess(&mut session, " Paris ").unwrap();
    assert_eq!(
        outcome,
        GuessOutcome {
            index: 0,
            matched: true
        }
    );
    assert_eq!(session.score, 1);
    assert_eq!(session.phase, Phase::Done);
}

#[test]
fn guesses_finish_exactly_on_last_question() {
    let mut session = guessing_session(&["a", "b", "c"]);

    assert!(!submit_guess(&mut session, "x").unwrap().matched);
    assert_eq!(session.phase, Phase::P2Guess);
    assert!(submit_guess(&mut session, "B").unwrap().matched);
    assert_eq!(session.phase, Phase::P2Guess);
    assert_eq!(session.current_index, 2);

    let last = submit_guess(&mut session, "c").unwrap();
    assert_eq!(last.index, 2);
    assert_eq!(session.phase, Phase::Done);
    assert_eq!(session.current_index, 3);
    assert_eq!(session.score, 2);
    assert_eq!(session.guesses, vec!["x", "B", "c"]);
}

#[test]
fn guess_after_done_is_phase_mismatch() {
    let mut session = guessing_session(&["a"]);
    submit_guess(&mut session, "a").unwrap();
    assert!(matches!(
        submit_guess(&mut session, "a"),
        Err(DomainError::Conflict(ConflictKind::PhaseMismatch { .. }, _))
    ));
    assert_eq!(session.score, 1);
}

#[test]
fn join_is_once_only_and_keeps_phase() {
    let mut session = open_session(&["Q1"]);
    join(&mut session, "  Bo ").unwrap();
    assert_eq!(session.guest_name.as_deref(), Some("Bo"));
    assert_eq!(session.phase, Phase::P1Answer);

    let err = join(&mut session, "Cy").unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::AlreadyJoined, _)));
    assert_eq!(session.guest_name.as_deref(), Some("Bo"));
}

#[test]
fn join_rejects_blank_name() {
    let mut session = open_session(&["Q1"]);
    assert!(matches!(
        join(&mut session, " "),
        Err(DomainError::Validation(ValidationKind::EmptyInput, _))
    ));
    assert!(session.guest_name.is_none());
}

#[test]
fn reset_only_from_done_and_keeps_answers() {
    let mut session = guessing_session(&["a", "b"]);
    assert!(matches!(
        reset(&mut session),
        Err(DomainError::Conflict(ConflictKind::PhaseMismatch { .. }, _))
    ));

    submit_guess(&mut session, "a").unwrap();
    submit_guess(&mut session, "b").unwrap();
    assert_eq!(session.phase, Phase::Done);
    let answers_before = session.answers.clone();

    reset(&mut session).unwrap();
    assert_eq!(session.phase, Phase::P2Guess);
    assert_eq!(session.score, 0);
    assert_eq!(session.current_index, 0);
    assert!(session.guesses.is_empty());
    assert_eq!(session.answers, answers_before);
    assert_eq!(session.guest_name.as_deref(), Some("Bo"));
}

#[test]
fn two_question_walkthrough() {
    let mut session = open_session(&["Capital?", "Year?"]);
    submit_answer(&mut session, "Paris").unwrap();
    submit_answer(&mut session, "2010").unwrap();
    assert_eq!(session.phase, Phase::P2Guess);

    join(&mut session, "Bo").unwrap();
    assert!(submit_guess(&mut session, "paris").unwrap().matched);
    assert_eq!(session.score, 1);
    assert!(!submit_guess(&mut session, "1999").unwrap().matched);
    assert_eq!(session.score, 1);

    assert_eq!(session.phase, Phase::Done);
    assert_eq!((session.score, session.max_score()), (1, 2));
}
