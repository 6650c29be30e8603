mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use dca_sentinel::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
