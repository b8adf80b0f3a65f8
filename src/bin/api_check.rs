//! Checks API access: authenticates and prints the caller's identity.

use t3_client::prelude::*;

async fn run() -> Result<(), AppError> {
    let mut config = Config::new();
    if !config.has_credentials() {
        complete_credentials(&mut config.credentials)?;
    }

    let client = HttpClient::new(config).await?;
    let identity = client.auth().whoami().await?;

    info!("You successfully authenticated with the T3 API");
    if identity.has_t3plus {
        info!(
            "The username '{}' is registered as a T3+ username and can use all API endpoints",
            identity.username
        );
    } else {
        info!(
            "The username '{}' is not registered and can only access free endpoints",
            identity.username
        );
    }
    info!("T3 API docs can be found at https://trackandtrace.tools/api");
    Ok(())
}

#[tokio::main]
async fn main() {
    setup_logger();
    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
