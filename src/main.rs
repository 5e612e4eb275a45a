use axum::serve;
use book_inventory::api::routes::create_router;
use book_inventory::config::{AppConfig, StorageMode};
use book_inventory::store::{DatasetStore, FileStore, FixtureStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging, defaulting to Info unless RUST_LOG overrides
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("Book Inventory Dump Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    match config.storage.mode {
        StorageMode::Fixture => {
            println!("Serving the built-in fixture snapshot");
            run_server(FixtureStore::new(), &config).await
        }
        StorageMode::Files => {
            println!("Serving datasets from '{}'", config.storage.data_dir);
            run_server(FileStore::new(&config.storage.data_dir), &config).await
        }
    }
}

async fn run_server<S: DatasetStore + 'static>(
    store: S,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let app = create_router().with_state(Arc::new(store));

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Dump available on http://{}/", bind_address);

    serve(listener, app).await?;

    Ok(())
}
