use std::net::TcpListener;
use std::sync::Arc;

use anyhow::Context;

use agency_intake::app;
use agency_intake::repo::SupabaseRepo;
use agency_intake::settings::Settings;
use agency_intake::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init()?;

    let settings = Settings::load()?;

    let repo = SupabaseRepo::new(
        settings.store.url()?,
        settings.store.anon_key(),
        settings.store.service_key(),
        settings.store.timeout(),
    )?;

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    app::run(listener, Arc::new(repo))?
        .await
        .context("Failed to run app")
}
