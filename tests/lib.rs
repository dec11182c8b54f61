//! Helpers for tests that need a real Postgres.
//!
//! Set `TEST_DATABASE_URL` to a server the tests may create and drop
//! databases on; without it the Postgres tests return early.

use migration::{Migrator, MigratorTrait};
use platform_db::DbPool;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, Statement};
use url::Url;
use uuid::Uuid;

/// A freshly created, migrated database that is dropped by `cleanup`.
pub struct PgTestContext {
    pub db: DbPool,
    admin_url: String,
    db_name: String,
}

impl PgTestContext {
    pub async fn new_migrated() -> Option<Self> {
        let base = std::env::var("TEST_DATABASE_URL").ok()?;
        let (admin_url, db_name, test_url) = build_urls(&base)?;
        let admin = Database::connect(&admin_url).await.ok()?;
        admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("CREATE DATABASE \"{db_name}\";"),
            ))
            .await
            .ok()?;
        let db = Database::connect(&test_url).await.ok()?;
        Migrator::up(&db, None).await.ok()?;
        Some(Self {
            db,
            admin_url,
            db_name,
        })
    }

    pub async fn cleanup(self) {
        let Self {
            db,
            admin_url,
            db_name,
        } = self;
        drop(db);
        if let Ok(admin) = Database::connect(&admin_url).await {
            let drop_sql = format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE);");
            let _ = admin
                .execute(Statement::from_string(DatabaseBackend::Postgres, drop_sql))
                .await;
        }
    }
}

fn build_urls(base: &str) -> Option<(String, String, String)> {
    let url = Url::parse(base).ok()?;
    let db_path = url.path().trim_start_matches('/').to_string();
    let base_name = if db_path.is_empty() {
        "employees_test".to_string()
    } else {
        db_path
    };
    let db_name = format!("{}_{}", base_name, Uuid::new_v4().simple());
    let mut admin_url = url.clone();
    admin_url.set_path("/postgres");
    let mut test_url = url;
    test_url.set_path(&format!("/{db_name}"));
    Some((admin_url.to_string(), db_name, test_url.to_string()))
}
