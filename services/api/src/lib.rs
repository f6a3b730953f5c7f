mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use breed_wiki::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
