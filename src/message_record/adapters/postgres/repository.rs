//! `PostgreSQL` repository implementation for message records.

use super::{
    models::{MessageRecordRow, NewMessageRecordRow},
    schema::rmq_demo,
};
use crate::config::StoreConfig;
use crate::message_record::{
    domain::{MessageRecord, RecordId},
    ports::{MessageRecordError, MessageRecordRepository, MessageRecordResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::{debug, info};

/// `PostgreSQL` connection pool type used by message record adapters.
pub type RecordPgPool = Pool<ConnectionManager<PgConnection>>;

/// DDL creating the `rmqDemo` table, shared with the Diesel migration.
pub const CREATE_TABLE_SQL: &str =
    include_str!("../../../../migrations/2026-10-18-000000_create_rmq_demo/up.sql");

/// Builds a connection pool from store configuration.
///
/// # Errors
///
/// Returns [`MessageRecordError::Persistence`] when the pool cannot open its
/// initial connections.
pub async fn connect(config: &StoreConfig) -> MessageRecordResult<RecordPgPool> {
    let url = config.database_url().to_owned();
    let max_size = config.pool_size();
    info!(max_size, "opening PostgreSQL pool");
    tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .build(ConnectionManager::<PgConnection>::new(url))
            .map_err(MessageRecordError::persistence)
    })
    .await
    .map_err(MessageRecordError::persistence)?
}

/// Creates the `rmqDemo` table when it does not exist yet.
///
/// # Errors
///
/// Returns [`MessageRecordError::Persistence`] when the DDL fails.
pub async fn apply_schema(pool: &RecordPgPool) -> MessageRecordResult<()> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(MessageRecordError::persistence)?;
        connection
            .batch_execute(CREATE_TABLE_SQL)
            .map_err(MessageRecordError::persistence)
    })
    .await
    .map_err(MessageRecordError::persistence)??;
    info!("rmqDemo schema ready");
    Ok(())
}

/// `PostgreSQL`-backed message record repository.
#[derive(Debug, Clone)]
pub struct PostgresMessageRecordRepository {
    pool: RecordPgPool,
}

impl PostgresMessageRecordRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RecordPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MessageRecordResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MessageRecordResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MessageRecordError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MessageRecordError::persistence)?
    }
}

#[async_trait]
impl MessageRecordRepository for PostgresMessageRecordRepository {
    async fn insert(&self, record: &MessageRecord) -> MessageRecordResult<MessageRecord> {
        if let Some(id) = record.id() {
            return Err(MessageRecordError::AlreadyPersisted(id));
        }
        let new_row = NewMessageRecordRow::from(record);

        let row = self
            .run_blocking(move |connection| {
                diesel::insert_into(rmq_demo::table)
                    .values(&new_row)
                    .returning(MessageRecordRow::as_returning())
                    .get_result::<MessageRecordRow>(connection)
                    .map_err(MessageRecordError::persistence)
            })
            .await?;
        debug!(id = row.id, "inserted rmqDemo row");
        Ok(MessageRecord::from(row))
    }

    async fn update(&self, record: &MessageRecord) -> MessageRecordResult<()> {
        let id = record.id().ok_or(MessageRecordError::NotPersisted)?;
        let message = record.message().to_owned();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(rmq_demo::table.find(id.value()))
                .set(rmq_demo::message.eq(Some(message)))
                .execute(connection)
                .map_err(MessageRecordError::persistence)?;

            if updated_count == 0 {
                return Err(MessageRecordError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: RecordId) -> MessageRecordResult<Option<MessageRecord>> {
        self.run_blocking(move |connection| {
            let row = rmq_demo::table
                .find(id.value())
                .select(MessageRecordRow::as_select())
                .first::<MessageRecordRow>(connection)
                .optional()
                .map_err(MessageRecordError::persistence)?;
            Ok(row.map(MessageRecord::from))
        })
        .await
    }

    async fn list_all(&self) -> MessageRecordResult<Vec<MessageRecord>> {
        self.run_blocking(move |connection| {
            let rows = rmq_demo::table
                .order(rmq_demo::id.asc())
                .select(MessageRecordRow::as_select())
                .load::<MessageRecordRow>(connection)
                .map_err(MessageRecordError::persistence)?;
            Ok(rows.into_iter().map(MessageRecord::from).collect())
        })
        .await
    }

    async fn delete(&self, id: RecordId) -> MessageRecordResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(rmq_demo::table.find(id.value()))
                .execute(connection)
                .map_err(MessageRecordError::persistence)?;

            if deleted_count == 0 {
                return Err(MessageRecordError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn count(&self) -> MessageRecordResult<u64> {
        self.run_blocking(move |connection| {
            let total = rmq_demo::table
                .count()
                .get_result::<i64>(connection)
                .map_err(MessageRecordError::persistence)?;
            u64::try_from(total).map_err(MessageRecordError::invalid_persisted_data)
        })
        .await
    }
}
