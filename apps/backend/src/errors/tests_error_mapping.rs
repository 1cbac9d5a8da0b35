// Unit tests for error mapping - pure domain logic without HTTP dependencies
use crate::domain::session::Phase;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::EmptyInput, "answer must not be blank");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::EmptyInput);
    assert_eq!(app.status().as_u16(), 400);

    let app: AppError = DomainError::validation(ValidationKind::UnknownEdition, "nope").into();
    assert_eq!(app.code().as_str(), "UNKNOWN_EDITION");
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts_to_409() {
    let phase = DomainError::phase_mismatch(Phase::P2Guess, Phase::P1Answer);
    let app: AppError = phase.into();
    assert_eq!(app.code().as_str(), "PHASE_MISMATCH");
    assert_eq!(app.status().as_u16(), 409);
    assert!(app.detail().contains("p2_guess"));

    let joined: AppError = DomainError::conflict(ConflictKind::AlreadyJoined, "taken").into();
    assert_eq!(joined.code(), ErrorCode::AlreadyJoined);
    assert_eq!(joined.status().as_u16(), 409);

    let not_joined: AppError = DomainError::conflict(ConflictKind::NotJoined, "wait").into();
    assert_eq!(not_joined.code(), ErrorCode::NotJoined);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_forbidden() {
    let app: AppError = DomainError::forbidden("bad token").into();
    assert_eq!(app.code(), ErrorCode::InvalidOwnerToken);
    assert_eq!(app.status().as_u16(), 403);
}

#[test]
fn maps_infra() {
    let exhausted = DomainError::infra(InfraErrorKind::CodeSpaceExhausted, "full");
    let app: AppError = exhausted.into();
    assert_eq!(app.code().as_str(), "CODE_SPACE_EXHAUSTED");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn humanized_titles() {
    assert_eq!(AppError::humanize_code("GAME_NOT_FOUND"), "Game Not Found");
    assert_eq!(AppError::humanize_code("INTERNAL"), "Internal");
}
