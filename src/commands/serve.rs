use anyhow::Result;
use holonet::config::Settings;
use holonet::server;
use tracing::error;

use super::Session;

/// Start the web chat; a failed startup still serves, refusing every question
pub async fn run(settings: &Settings, host: &str, port: u16) -> Result<()> {
    let session = match Session::open(settings).await {
        Ok(session) => Some(session),
        Err(e) => {
            error!("Erro ao inicializar sistema: {}", e);
            None
        }
    };

    let qa = session.as_ref().map(|session| session.qa.clone());
    server::run_server(host, port, qa).await?;

    if let Some(session) = session {
        session.close();
    }
    Ok(())
}
