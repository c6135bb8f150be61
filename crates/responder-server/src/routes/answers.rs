use actix_web::{web, HttpResponse};
use responder_core::NewAnswer;

use crate::error::AppError;
use crate::extractors::Body;
use crate::state::AppState;

const NOT_FOUND: &str = "Not found";
const QUESTION_NOT_FOUND: &str = "Question with provided ID not found";

async fn list_answers(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let question_id = path.into_inner();
    let store = app_state.store.clone();
    let answers = web::block(move || store.list_answers(&question_id)).await??;

    answers
        .map(|answers| HttpResponse::Ok().json(answers))
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

async fn add_answer(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: Body<NewAnswer>,
) -> Result<HttpResponse, AppError> {
    let question_id = path.into_inner();
    let payload = body.into_inner();
    payload.validate()?;

    let answer = payload.into_answer(app_state.next_id());
    let answer_id = answer.id.clone();
    let store = app_state.store.clone();
    let target = question_id.clone();
    let updated = web::block(move || store.add_answer(&target, answer)).await??;

    match updated {
        Some(_) => {
            tracing::info!(%question_id, %answer_id, "answer.created");
            Ok(HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body("ok"))
        }
        None => Err(AppError::not_found(QUESTION_NOT_FOUND)),
    }
}

async fn get_answer(
    path: web::Path<(String, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (question_id, answer_id) = path.into_inner();
    let store = app_state.store.clone();
    let answer = web::block(move || store.get_answer(&question_id, &answer_id)).await??;

    answer
        .map(|answer| HttpResponse::Ok().json(answer))
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/questions/{question_id}/answers", web::get().to(list_answers))
        .route("/questions/{question_id}/answers", web::post().to(add_answer))
        .route(
            "/questions/{question_id}/answers/{answer_id}",
            web::get().to(get_answer),
        );
}
