use anyhow::Result;
use reservations::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
