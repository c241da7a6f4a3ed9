mod cli;
mod config;
mod error;
mod infra;
mod listing;
mod routes;
mod server;
mod telemetry;

pub use crate::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
