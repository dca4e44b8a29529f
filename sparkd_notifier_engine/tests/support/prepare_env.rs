use log::*;
use sparkd_notifier_engine::SqliteDatabase;
use sqlx::{migrate::MigrateDatabase, Sqlite};

pub fn random_db_path() -> String {
    let dir = std::env::temp_dir();
    format!("sqlite://{}/sparkd_test_store_{}.db", dir.display(), rand::random::<u64>())
}

/// Creates a fresh database at `url`, runs the migrations, and returns a connection to it.
pub async fn prepare_test_env(url: &str) -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
    if let Err(e) = Sqlite::drop_database(url).await {
        trace!("Nothing to drop at {url}: {e:?}");
    }
    Sqlite::create_database(url).await.expect("Error creating database");
    info!("🚀️ Created Sqlite database {url}");
    let db = SqliteDatabase::new_with_url(url, 5).await.expect("Error creating connection to database");
    db.run_migrations().await.expect("Error running DB migrations");
    db
}

pub async fn tear_down(mut db: SqliteDatabase) {
    if let Err(e) = db.close().await {
        error!("🚀️ Failed to close database: {e}");
    }
    if let Err(e) = Sqlite::drop_database(db.url()).await {
        warn!("🚀️ Failed to drop database {}: {e}", db.url());
    }
}

/// Rewrites the creation time of a notification, so that tests can fabricate old records.
pub async fn backdate_notification(db: &SqliteDatabase, id: i64, created_at: chrono::DateTime<chrono::Utc>) {
    sqlx::query("UPDATE notifications SET created_at = $1 WHERE id = $2")
        .bind(created_at.format("%Y-%m-%d %H:%M:%S").to_string())
        .bind(id)
        .execute(db.pool())
        .await
        .expect("Error backdating notification");
}
