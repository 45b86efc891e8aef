use dotenvy::dotenv;
use log::info;
use std::env;
use std::error::Error;
use std::sync::Arc;

use channel_redirect::config::{ConfigSource, EnvConfig, ServerConfig};
use channel_redirect::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file
    dotenv().ok();
    // Set logging levels if not already set
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "channel_redirect=debug,tower_http=info");
    }

    // Initialize tracing with previously set logging levels
    tracing_subscriber::fmt::init();

    let config: Arc<dyn ConfigSource> = Arc::new(EnvConfig);
    let server = ServerConfig::from_source(config.as_ref())?;

    let app = routes::app(config);

    info!("Listening on http://{}", server.addr);
    axum::Server::bind(&server.addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
