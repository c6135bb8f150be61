use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::{form_error_handler, json_error_handler, AppError};

pub mod answers;
pub mod questions;

#[derive(Debug, Serialize)]
struct Welcome {
    message: &'static str,
}

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Welcome {
        message: "Welcome to responder!",
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .route("/", web::get().to(root))
        .configure(questions::configure_routes)
        .configure(answers::configure_routes);
}
