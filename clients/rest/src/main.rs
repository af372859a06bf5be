use actix_cors::Cors;
use actix_web::{
    dev::ServiceRequest,
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use database::{
    database::options::DatabaseOptions,
    store::{PersonStore, StorageEngine},
};

mod error;
mod routes;

const ACCESS_LOG_FORMAT: &str = "%{METHOD}xi %U %s %b - %D ms";

fn request_method(req: &ServiceRequest) -> String {
    req.method().to_string()
}

/// Access log line: method, path, status, response bytes and time taken
fn access_logger() -> Logger {
    Logger::new(ACCESS_LOG_FORMAT).custom_request_replace("METHOD", request_method)
}

#[derive(ValueEnum, Clone, Debug)]
enum StoreKind {
    /// Transient table seeded with example people
    Memory,
    /// PostgreSQL backed document store
    Document,
}

/// 📒 Phonebook REST Server, CRUD endpoints over a single person resource
#[derive(Parser, Debug)]
struct Cli {
    /// Port the REST server will run on
    #[clap(short, long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Address the REST server will run on
    #[clap(short, long, env = "ADDRESS", default_value = "0.0.0.0")]
    address: String,

    /// Where people are stored
    #[clap(long, env = "PHONEBOOK_STORE", value_enum, default_value_t = StoreKind::Memory)]
    store: StoreKind,

    /// Connection string for the document store, e.g. "host=localhost user=postgres"
    #[clap(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Start the memory store without the example people
    #[clap(long)]
    no_seed: bool,

    /// Log every HTTP request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

impl Cli {
    fn storage_engine(&self) -> anyhow::Result<StorageEngine> {
        let engine = match self.store {
            StoreKind::Memory => {
                StorageEngine::Memory(DatabaseOptions::default().set_seed(!self.no_seed))
            }
            StoreKind::Document => StorageEngine::Document(
                self.database_url
                    .clone()
                    .context("--database-url (or DATABASE_URL) is required for the document store")?,
            ),
        };

        Ok(engine)
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let store = PersonStore::connect(args.storage_engine()?).await?;

    log::info!("Server running on port {}", args.port);

    let log_http = args.log_http;
    let app_store = store.clone();

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_store.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::unknown_endpoint))
            .wrap(Cors::permissive())
            .wrap(Condition::new(log_http, access_logger()))
    })
    .workers(args.http_workers)
    .bind((args.address.clone(), args.port))?
    .run()
    .await?;

    if let PersonStore::Memory(request_manager) = store {
        match request_manager.send_shutdown_request().await {
            Ok(response) => log::info!("Shutting down server: {}", response),
            Err(err) => log::warn!("Database did not shut down cleanly: {}", err),
        }
    }

    Ok(())
}
