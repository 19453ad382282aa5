//! Stores messages in the `rmqDemo` table and logs the stored records.
//!
//! Usage:
//!
//! ```text
//! rmq_demo [--list] [MESSAGE]...
//! ```
//!
//! Connection settings come from `DATABASE_URL` and `RMQ_DEMO_POOL_SIZE`,
//! optionally loaded from a `.env` file. The table is created on first run.

use clap::Parser;
use rmq_demo::{
    config::StoreConfig,
    logging::init_tracing,
    message_record::{
        adapters::postgres::{PostgresMessageRecordRepository, apply_schema, connect},
        services::MessageRecordService,
    },
};
use std::sync::Arc;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "rmq_demo", about = "Store message records in PostgreSQL")]
struct Args {
    /// Log every stored record after inserting.
    #[arg(long)]
    list: bool,

    /// Messages to store, one record each.
    messages: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Missing .env is not an error.
    let _env_file = dotenvy::dotenv().ok();
    init_tracing()?;

    let args = Args::parse();
    let config = StoreConfig::from_env()?;
    let pool = connect(&config).await?;
    apply_schema(&pool).await?;

    let service = MessageRecordService::new(Arc::new(PostgresMessageRecordRepository::new(pool)));
    for message in args.messages {
        service.record(message).await?;
    }

    if args.list {
        for record in service.list().await? {
            info!(record = %serde_json::to_string(&record)?, "stored record");
        }
    }
    info!(total = service.count().await?, "done");
    Ok(())
}
