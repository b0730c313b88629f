use anyhow::Result;
use holonet::config::Settings;

use super::Session;

/// Answer a single question and exit
pub async fn run(settings: &Settings, question: &str) -> Result<()> {
    tracing::info!("Answering: {}", question);

    let session = Session::open(settings).await?;
    let answer = session.qa.ask(question.trim()).await;
    println!("{}", answer);

    session.close();
    Ok(())
}
