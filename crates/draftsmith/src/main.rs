use std::process::ExitCode;

use draftsmith::{Config, Outcome, Pipeline, RunError, exit_status};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,draftsmith=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run().await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "run failed");
    }

    ExitCode::from(exit_status(&result))
}

async fn run() -> Result<Outcome, RunError> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pipeline = Pipeline::from_config(&config)?;
    let mut rng = StdRng::from_entropy();

    pipeline
        .run(&mut rng, chrono::Local::now().date_naive())
        .await
}
