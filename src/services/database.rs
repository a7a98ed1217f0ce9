use std::time::Duration;

use anyhow::Result;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::models::NutritionRecord;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Append-only sink for nutrition rows.
#[async_trait::async_trait]
pub trait DietStore: Send + Sync {
    async fn append(&self, record: &NutritionRecord) -> Result<()>;
}

pub struct Database {
    pool: PgPool,
    schema_ready: OnceCell<()>,
}

impl Database {
    /// Build the pool without connecting; the first append opens a connection.
    pub fn new(config: &DatabaseConfig) -> Self {
        Self::with_acquire_timeout(config, ACQUIRE_TIMEOUT)
    }

    pub fn with_acquire_timeout(config: &DatabaseConfig, timeout: Duration) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user)
            .password(&config.password);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(timeout)
            .connect_lazy_with(options);

        Database {
            pool,
            schema_ready: OnceCell::new(),
        }
    }

    async fn ensure_table(&self) -> Result<()> {
        self.schema_ready
            .get_or_try_init(|| async {
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS diet (
                        "Calories" TEXT,
                        "Protein" TEXT,
                        "Carbs" TEXT,
                        "Fats" TEXT,
                        "Date" TIMESTAMP
                    )
                    "#,
                )
                .execute(&self.pool)
                .await?;
                log::debug!("✅ diet table ready");
                Ok::<(), sqlx::Error>(())
            })
            .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl DietStore for Database {
    async fn append(&self, record: &NutritionRecord) -> Result<()> {
        self.ensure_table().await?;

        sqlx::query(
            r#"
            INSERT INTO diet ("Calories", "Protein", "Carbs", "Fats", "Date")
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&record.calories)
        .bind(&record.protein)
        .bind(&record.carbs)
        .bind(&record.fats)
        .bind(record.date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
