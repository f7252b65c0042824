use anyhow::Result;
use rutdoc::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
