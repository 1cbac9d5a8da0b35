use actix_web::test;
use knowme_backend::AppState;
use serde_json::{json, Value};

use crate::common::{post, visible_answers};

#[actix_web::test]
async fn create_returns_code_token_and_owner_view() {
    let app = test_app!(AppState::for_tests());

    let resp = test::call_service(
        &app,
        post("/api/create", json!({ "ownerName": "Ada" })).to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;

    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(!body["ownerToken"].as_str().unwrap().is_empty());

    let game = &body["game"];
    assert_eq!(game["code"], code);
    assert_eq!(game["edition"], "Moyosola");
    assert_eq!(game["ownerName"], "Ada");
    assert_eq!(game["phase"], "p1_answer");
    assert_eq!(game["currentIndex"], 0);
    assert_eq!(game["score"], 0);
    assert_eq!(game["maxScore"], 10);
    assert_eq!(game["questions"].as_array().unwrap().len(), 10);
    assert!(game["guestName"].is_null());
}

#[actix_web::test]
async fn create_applies_defaults_and_canonical_edition() {
    let app = test_app!(AppState::for_tests());

    let resp = test::call_service(
        &app,
        post("/api/create", json!({ "editionName": "  classic " })).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["game"]["ownerName"], "Player 1");
    assert_eq!(body["game"]["edition"], "Classic");
    assert_eq!(body["game"]["maxScore"], 7);
}

#[actix_web::test]
async fn create_without_body_uses_defaults() {
    let app = test_app!(AppState::for_tests());

    let req = test::TestRequest::post().uri("/api/create").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["game"]["ownerName"], "Player 1");
    assert_eq!(body["game"]["edition"], "Moyosola");
    assert_eq!(body["game"]["phase"], "p1_answer");
}

#[actix_web::test]
async fn full_playthrough_over_http() {
    let app = test_app!(AppState::for_tests());

    let created: Value = test::call_and_read_body_json(
        &app,
        post("/api/create", json!({ "ownerName": "Ada", "editionName": "Classic" }))
            .to_request(),
    )
    .await;
    let code = created["code"].as_str().unwrap().to_string();
    let token = created["ownerToken"].as_str().unwrap().to_string();
    let n = created["game"]["maxScore"].as_u64().unwrap() as usize;

    // Player 2 can join while Player 1 is still answering; the phase stays put
    let joined: Value = test::call_and_read_body_json(
        &app,
        post("/api/join", json!({ "code": code.to_lowercase(), "name": "Bo" })).to_request(),
    )
    .await;
    assert_eq!(joined["game"]["guestName"], "Bo");
    assert_eq!(joined["game"]["phase"], "p1_answer");

    for i in 0..n {
        let answered: Value = test::call_and_read_body_json(
            &app,
            post(
                "/api/p1/answer",
                json!({ "code": code, "answer": format!("answer {i}"), "ownerToken": token }),
            )
            .to_request(),
        )
        .await;
        let expected_phase = if i + 1 == n { "p2_guess" } else { "p1_answer" };
        assert_eq!(answered["game"]["phase"], expected_phase);
    }

    let mut expected_score = 0;
    for i in 0..n {
        // Match every other answer, with different case and padding
        let guess = if i % 2 == 0 {
            format!("  ANSWER {i} ")
        } else {
            "something else".to_string()
        };
        let guessed: Value = test::call_and_read_body_json(
            &app,
            post("/api/p2/guess", json!({ "code": code, "guess": guess })).to_request(),
        )
        .await;

        assert_eq!(guessed["index"], i);
        assert_eq!(guessed["matched"], i % 2 == 0);
        if i % 2 == 0 {
            expected_score += 1;
        }
        assert_eq!(guessed["game"]["score"], expected_score);
    }

    let state: Value = test::call_and_read_body_json(
        &app,
        post("/api/state", json!({ "code": code })).to_request(),
    )
    .await;
    assert_eq!(state["game"]["phase"], "done");
    assert_eq!(state["game"]["score"], expected_score);
    assert!(visible_answers(&state["game"]).iter().all(Option::is_some));

    let reset: Value = test::call_and_read_body_json(
        &app,
        post("/api/reset", json!({ "code": code })).to_request(),
    )
    .await;
    assert_eq!(reset["game"]["phase"], "p2_guess");
    assert_eq!(reset["game"]["score"], 0);
    assert_eq!(reset["game"]["currentIndex"], 0);
    assert_eq!(reset["game"]["answeredCount"], n);
    assert!(reset["game"]["guesses"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn answers_are_hidden_from_guest_until_guessed() {
    let app = test_app!(AppState::for_tests());

    let created: Value = test::call_and_read_body_json(
        &app,
        post("/api/create", json!({ "ownerName": "Ada", "editionName": "Classic" }))
            .to_request(),
    )
    .await;
    let code = created["code"].as_str().unwrap().to_string();
    let token = created["ownerToken"].as_str().unwrap().to_string();

    let first: Value = test::call_and_read_body_json(
        &app,
        post(
            "/api/p1/answer",
            json!({ "code": code, "answer": "Paris", "ownerToken": token }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(visible_answers(&first["game"])[0].as_deref(), Some("Paris"));

    let guest_view: Value = test::call_and_read_body_json(
        &app,
        post("/api/state", json!({ "code": code })).to_request(),
    )
    .await;
    assert_eq!(guest_view["game"]["answeredCount"], 1);
    assert_eq!(visible_answers(&guest_view["game"]), vec![None]);

    let owner_view: Value = test::call_and_read_body_json(
        &app,
        post("/api/state", json!({ "code": code, "ownerToken": token })).to_request(),
    )
    .await;
    assert_eq!(
        visible_answers(&owner_view["game"]),
        vec![Some("Paris".to_string())]
    );
}

#[actix_web::test]
async fn guessed_answers_are_revealed_one_by_one() {
    let app = test_app!(AppState::for_tests());

    let created: Value = test::call_and_read_body_json(
        &app,
        post("/api/create", json!({ "editionName": "Classic" })).to_request(),
    )
    .await;
    let code = created["code"].as_str().unwrap().to_string();
    let token = created["ownerToken"].as_str().unwrap().to_string();
    let n = created["game"]["maxScore"].as_u64().unwrap() as usize;

    for i in 0..n {
        let req = post(
            "/api/p1/answer",
            json!({ "code": code, "answer": format!("a{i}"), "ownerToken": token }),
        );
        let resp = test::call_service(&app, req.to_request()).await;
        assert!(resp.status().is_success());
    }
    let resp = test::call_service(&app, post("/api/join", json!({ "code": code })).to_request())
        .await;
    assert!(resp.status().is_success());

    let guessed: Value = test::call_and_read_body_json(
        &app,
        post("/api/p2/guess", json!({ "code": code, "guess": "a0" })).to_request(),
    )
    .await;
    assert_eq!(guessed["game"]["guestName"], "Player 2");

    let answers = visible_answers(&guessed["game"]);
    assert_eq!(answers[0].as_deref(), Some("a0"));
    assert!(answers[1..].iter().all(Option::is_none));
}
