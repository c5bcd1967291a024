use crate::entities::{prelude::*, trends};
use crate::models::{Entry, InvalidSlot, Slot};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Statement,
};
use std::time::Duration;
use tracing::info;

pub mod migrator;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("trend {id} on {date}: {source}")]
    InvalidSlot {
        id: i64,
        date: String,
        #[source]
        source: InvalidSlot,
    },
}

/// Read access to collected trend entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All entries stored for `date`, slot 0 first. Empty when nothing matches.
    async fn fetch_entries_for_date(&self, date: &str) -> Result<Vec<Entry>, StoreError>;
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn connect(db_url: &str) -> Result<Self, StoreError> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        use sea_orm_migration::MigratorTrait;

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl EntryStore for Store {
    async fn fetch_entries_for_date(&self, date: &str) -> Result<Vec<Entry>, StoreError> {
        let rows = Trends::find()
            .filter(trends::Column::Date.eq(date))
            .order_by_asc(trends::Column::Slot)
            .order_by_asc(trends::Column::Id)
            .all(&self.conn)
            .await?;

        rows.into_iter().map(to_entry).collect()
    }
}

fn to_entry(row: trends::Model) -> Result<Entry, StoreError> {
    let slot = Slot::try_from(row.slot).map_err(|source| StoreError::InvalidSlot {
        id: row.id,
        date: row.date.clone(),
        source,
    })?;

    Ok(Entry {
        id: row.id,
        date: row.date,
        slot,
        raw_response: row.raw_response,
        fetched_at: row.fetched_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, Set};

    async fn memory_store() -> Store {
        Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .expect("in-memory store")
    }

    async fn insert(store: &Store, date: &str, slot: i32, body: &str) {
        trends::ActiveModel {
            date: Set(date.to_string()),
            slot: Set(slot),
            raw_response: Set(body.to_string()),
            fetched_at: Set(format!("{date}T00:00:00Z")),
            ..Default::default()
        }
        .insert(&store.conn)
        .await
        .expect("insert trend");
    }

    #[tokio::test]
    async fn entries_come_back_in_slot_order() {
        let store = memory_store().await;
        insert(&store, "2026-01-05", 1, "noon").await;
        insert(&store, "2026-01-05", 0, "midnight").await;
        insert(&store, "2026-01-06", 0, "other day").await;

        let entries = store.fetch_entries_for_date("2026-01-05").await.unwrap();
        let bodies: Vec<_> = entries.iter().map(|e| e.raw_response.as_str()).collect();
        assert_eq!(bodies, ["midnight", "noon"]);
        assert_eq!(entries[0].slot, Slot::Midnight);
        assert_eq!(entries[1].slot, Slot::Noon);
    }

    #[tokio::test]
    async fn missing_date_yields_empty_list() {
        let store = memory_store().await;
        insert(&store, "2026-01-05", 0, "midnight").await;

        let entries = store.fetch_entries_for_date("2026-01-04").await.unwrap();
        assert!(entries.is_empty());

        let entries = store.fetch_entries_for_date("2026-02-30").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn unexpected_slot_is_an_error() {
        let store = memory_store().await;
        insert(&store, "2026-01-05", 7, "broken").await;

        let err = store.fetch_entries_for_date("2026-01-05").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidSlot { .. }));
    }

    #[tokio::test]
    async fn ping_succeeds() {
        memory_store().await.ping().await.unwrap();
    }
}
