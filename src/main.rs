use anyhow::Result;
use careermate::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
