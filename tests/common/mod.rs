#![allow(dead_code)]

use std::path::PathBuf;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use seaorm_auth_adapter::{ModelMapping, SchemaVariant, SeaOrmAdapter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// A fresh in-memory SQLite database on a single connection, so every query
/// of a test sees the same database.
pub async fn connect() -> DatabaseConnection {
    init_tracing();

    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite")
}

/// A SQLite database file behind a pool of several connections, so racing
/// statements really run side by side. The file is removed on drop.
pub struct SharedDatabase {
    pub adapter: SeaOrmAdapter,
    path: PathBuf,
}

impl Drop for SharedDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub async fn shared_database(connections: u32) -> SharedDatabase {
    init_tracing();

    let path = std::env::temp_dir().join(format!("seaorm-auth-{}.db", uuid::Uuid::new_v4()));
    let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    opt.max_connections(connections)
        .min_connections(connections)
        .sqlx_logging(false);
    let conn = Database::connect(opt)
        .await
        .expect("failed to open sqlite file");

    // Writers queue on the busy timeout instead of blocking readers.
    conn.execute_unprepared("PRAGMA journal_mode=WAL")
        .await
        .expect("failed to enable WAL");

    let adapter = SeaOrmAdapter::new(conn);
    adapter.create_schema().await.expect("failed to create schema");
    SharedDatabase { adapter, path }
}

pub async fn adapter_with(mapping: ModelMapping, variant: SchemaVariant) -> SeaOrmAdapter {
    let adapter = SeaOrmAdapter::new(connect().await)
        .with_model_mapping(mapping)
        .expect("valid mapping")
        .with_schema_variant(variant);
    adapter.create_schema().await.expect("failed to create schema");
    adapter
}

pub async fn adapter() -> SeaOrmAdapter {
    adapter_with(ModelMapping::default(), SchemaVariant::Current).await
}

/// Every combination of table naming and schema variant the adapter supports.
pub fn configurations() -> Vec<(ModelMapping, SchemaVariant)> {
    let renamed = ModelMapping::default()
        .with_user_table("people")
        .with_account_table("linked_identities")
        .with_session_table("logins")
        .with_verification_request_table("email_tokens");

    vec![
        (ModelMapping::default(), SchemaVariant::Current),
        (renamed.clone(), SchemaVariant::Current),
        (ModelMapping::default(), SchemaVariant::Legacy),
        (renamed, SchemaVariant::Legacy),
    ]
}
