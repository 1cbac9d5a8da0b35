//! Session routes. All `POST` with JSON bodies.
//!
//! Every response carries the redacted `game` view; create additionally
//! returns the join code and the owner token, guesses report `matched`.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::SessionView;
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::state::app_state::AppState;

const DEFAULT_OWNER_NAME: &str = "Player 1";
const DEFAULT_GUEST_NAME: &str = "Player 2";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub owner_name: Option<String>,
    pub edition_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    #[serde(default)]
    pub code: String,
    pub name: Option<String>,
    pub owner_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRequest {
    #[serde(default)]
    pub code: String,
    pub owner_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub answer: String,
    pub owner_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub guess: String,
    pub owner_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub code: String,
    pub owner_token: String,
    pub game: SessionView,
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub game: SessionView,
}

#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub game: SessionView,
    pub matched: bool,
    pub index: usize,
}

/// POST /api/create
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let owner_name = req.owner_name.as_deref().unwrap_or(DEFAULT_OWNER_NAME);

    let created = app_state
        .sessions
        .create_game(owner_name, req.edition_name.as_deref())?;

    Ok(HttpResponse::Ok().json(CreateResponse {
        code: created.code,
        owner_token: created.owner_token,
        game: created.game,
    }))
}

/// POST /api/join
async fn join_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<JoinRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let name = req.name.as_deref().unwrap_or(DEFAULT_GUEST_NAME);

    let game = app_state
        .sessions
        .join_game(&req.code, name, req.owner_token.as_deref())?;

    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

/// POST /api/state
///
/// Polled by the second player while the first is still answering.
async fn get_state(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CodeRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let game = app_state
        .sessions
        .get_state(&req.code, req.owner_token.as_deref())?;

    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

/// POST /api/p1/answer
async fn submit_answer(
    app_state: web::Data<AppState>,
    body: ValidatedJson<AnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let game = app_state
        .sessions
        .submit_answer(&req.code, &req.answer, req.owner_token.as_deref())?;

    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

/// POST /api/p2/guess
async fn submit_guess(
    app_state: web::Data<AppState>,
    body: ValidatedJson<GuessRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let result = app_state
        .sessions
        .submit_guess(&req.code, &req.guess, req.owner_token.as_deref())?;

    Ok(HttpResponse::Ok().json(GuessResponse {
        game: result.game,
        matched: result.matched,
        index: result.index,
    }))
}

/// POST /api/reset
async fn reset_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CodeRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let game = app_state
        .sessions
        .reset_game(&req.code, req.owner_token.as_deref())?;

    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/create").route(web::post().to(create_game)))
        .service(web::resource("/join").route(web::post().to(join_game)))
        .service(web::resource("/state").route(web::post().to(get_state)))
        .service(web::resource("/p1/answer").route(web::post().to(submit_answer)))
        .service(web::resource("/p2/guess").route(web::post().to(submit_guess)))
        .service(web::resource("/reset").route(web::post().to(reset_game)));
}
