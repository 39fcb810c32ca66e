//! Test helpers for integration tests
//!
//! Provides a migrated database connection wrapped in a [`ForumService`],
//! and cleanup of the rows a test seeded.

use anyhow::Result;
use forum_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use forum_db::{create_pool, run_migrations, PgPool};
use forum_service::{ForumService, ServiceContext};

use crate::fixtures::SeededForum;

/// Forum service backed by a real database
pub struct TestForum {
    pub forum: ForumService,
    pub pool: PgPool,
}

impl TestForum {
    /// Connect with the test configuration and apply migrations
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(&config).await
    }

    /// Connect with a custom config
    pub async fn start_with_config(config: &AppConfig) -> Result<Self> {
        // A previous test may already have installed the subscriber
        let _ = try_init_tracing_with_config(TracingConfig::from_app_config(config));

        let pool = create_pool(&config.database).await?;
        run_migrations(&pool).await?;

        Ok(Self {
            forum: ForumService::new(ServiceContext::from_pool(pool.clone())),
            pool,
        })
    }

    /// Delete everything a seeded forum created
    ///
    /// Removing the group cascades to discussions, threads and replies;
    /// removing the users cascades to their instructor records.
    pub async fn cleanup(&self, seeded: &SeededForum) -> Result<()> {
        sqlx::query("DELETE FROM discussion_groups WHERE id = $1")
            .bind(seeded.group.into_inner())
            .execute(&self.pool)
            .await?;

        let users: Vec<i32> = seeded.users().map(|id| id.into_inner()).collect();
        sqlx::query("DELETE FROM users WHERE id = ANY($1)")
            .bind(&users)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}
