use actix_web::{web, HttpResponse};
use responder_core::NewQuestion;
use serde_json::json;

use crate::error::AppError;
use crate::extractors::Body;
use crate::state::AppState;

async fn list_questions(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = app_state.store.clone();
    let questions = web::block(move || store.list_questions()).await??;
    Ok(HttpResponse::Ok().json(questions))
}

/// An unknown id answers 200 with `{}` rather than 404.
async fn get_question(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let question_id = path.into_inner();
    let store = app_state.store.clone();
    let question = web::block(move || store.get_question_by_id(&question_id)).await??;

    Ok(match question {
        Some(question) => HttpResponse::Ok().json(question),
        None => HttpResponse::Ok().json(json!({})),
    })
}

async fn create_question(
    app_state: web::Data<AppState>,
    body: Body<NewQuestion>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    payload.validate()?;

    let question = payload.into_question(|| app_state.next_id());
    let store = app_state.store.clone();
    let saved = question.clone();
    web::block(move || store.add_question(saved)).await??;

    tracing::info!(
        question_id = %question.id,
        answers = question.answers.len(),
        "question.created"
    );
    Ok(HttpResponse::Ok().json(question))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/questions", web::get().to(list_questions))
        .route("/questions", web::post().to(create_question))
        .route("/questions/{question_id}", web::get().to(get_question));
}
