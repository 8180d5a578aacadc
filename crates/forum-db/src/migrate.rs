//! Schema migrations, compiled into the binary
//!
//! The SQL files under `migrations/` are embedded with `include_str!` so a
//! deployed binary does not depend on the source checkout.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;

use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::PgPool;
use tracing::info;

/// `<version>_<description>` file stem and its SQL, in apply order
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "20240101000001_create_profiles",
        include_str!("../migrations/20240101000001_create_profiles.sql"),
    ),
    (
        "20240101000002_create_posts",
        include_str!("../migrations/20240101000002_create_posts.sql"),
    ),
    (
        "20240101000003_create_comments",
        include_str!("../migrations/20240101000003_create_comments.sql"),
    ),
    (
        "20240101000004_create_notifications",
        include_str!("../migrations/20240101000004_create_notifications.sql"),
    ),
];

/// Migration source backed by the embedded SQL
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedMigrations;

impl EmbeddedMigrations {
    /// Parse the embedded files the way sqlx names directory migrations
    pub fn migrations(self) -> Result<Vec<Migration>, BoxDynError> {
        MIGRATIONS
            .iter()
            .map(|(stem, sql)| -> Result<Migration, BoxDynError> {
                let (version, description) = stem
                    .split_once('_')
                    .ok_or_else(|| format!("migration name without version: {stem}"))?;
                let version: i64 = version
                    .parse()
                    .map_err(|_| format!("invalid migration version: {stem}"))?;

                Ok(Migration::new(
                    version,
                    Cow::Owned(description.replace('_', " ")),
                    MigrationType::Simple,
                    Cow::Borrowed(*sql),
                    false,
                ))
            })
            .collect()
    }
}

impl<'s> MigrationSource<'s> for EmbeddedMigrations {
    fn resolve(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 's>> {
        Box::pin(async move { self.migrations() })
    }
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations).await?;
    info!(count = migrator.iter().count(), "Applying migrations");
    migrator.run(pool).await
}
