use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::controller::contact;
use crate::repo::SubmissionRepo;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Run the application on a specified TCP listener
pub fn run(listener: TcpListener, repo: Arc<dyn SubmissionRepo>) -> anyhow::Result<Server> {
    // Wrap application data
    let repo: web::Data<dyn SubmissionRepo> = web::Data::from(repo);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(repo.clone())
            .service(health_check)
            .service(contact::scope())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
