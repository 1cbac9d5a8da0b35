use crate::domain::session::{Phase, Session};
use crate::domain::transitions;

pub const OWNER_TOKEN: &str = "0123456789abcdef0123456789abcdef";

/// An opened session (phase `p1_answer`) over the given prompts.
pub fn open_session(questions: &[&str]) -> Session {
    let mut session = Session::new(
        "TEST01".into(),
        "Moyosola".into(),
        "Ada".into(),
        questions.iter().map(|q| q.to_string()).collect(),
        OWNER_TOKEN.into(),
    );
    transitions::open(&mut session).expect("open fresh session");
    session
}

/// A session where Player 1 has answered everything and Player 2 has joined.
pub fn guessing_session(answers: &[&str]) -> Session {
    let questions: Vec<String> = (0..answers.len()).map(|i| format!("Q{i}")).collect();
    let refs: Vec<&str> = questions.iter().map(String::as_str).collect();
    let mut session = open_session(&refs);
    for answer in answers {
        transitions::submit_answer(&mut session, answer).expect("answer accepted");
    }
    transitions::join(&mut session, "Bo").expect("join accepted");
    assert_eq!(session.phase, Phase::P2Guess);
    session
}
