use anyhow::Result;
use holonet::config::{Settings, APP_NAME, APP_VERSION};

use super::Session;

pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "Quantas naves Han Solo pilota?",
    "Listar citações de Darth Vader",
    "Quem é Luke Skywalker?",
    "Listar personagens",
];

/// Run the example questions against the configured store
pub async fn run(settings: &Settings) -> Result<()> {
    println!("{} v{}", APP_NAME, APP_VERSION);

    let session = Session::open(settings).await?;
    for question in EXAMPLE_QUESTIONS {
        println!("\nPergunta: {}", question);
        println!("Resposta: {}", session.qa.ask(question).await);
    }

    session.close();
    Ok(())
}
