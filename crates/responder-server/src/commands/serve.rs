use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use responder_server::{routes, AppState, ServerConfig, StructuredLogger};
use responder_store::QuestionStore;

pub async fn run(config: ServerConfig) -> Result<()> {
    let store = QuestionStore::open(&config.storage_file);

    // The store never creates the document, so refuse to start without one.
    let count = store.list_questions().with_context(|| {
        format!(
            "cannot load {} (run `responder init` to create it)",
            config.storage_file.display()
        )
    })?.len();

    let data = web::Data::new(AppState::new(store));
    let (host, port) = config.bind_addr();

    tracing::info!(
        host,
        port,
        storage_file = %config.storage_file.display(),
        questions = count,
        "responder listening"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host, port))
    .with_context(|| format!("failed to bind {host}:{port}"))?
    .run()
    .await
    .context("server terminated with an error")
}
