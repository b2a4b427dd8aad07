// src/bin/backfill_slugs.rs
//! Assign slugs to movies, books, trips and restaurants created before slugs
//! existed. Safe to re-run: only rows without a slug are touched.
use anyhow::{Result, bail};
use shelf::config::AppConfig;
use shelf::domain::slug::SlugBackfill;
use shelf::infrastructure::{
    database, repositories::PostgresSlugRepository, telemetry, util::DefaultSlugGenerator,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("info,sqlx=warn");

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let backfill = SlugBackfill::new(
        Arc::new(PostgresSlugRepository::new(pool)),
        Arc::new(DefaultSlugGenerator),
    );

    let mut failed_rows = 0usize;
    let mut failed_kinds = 0usize;
    for outcome in backfill.run_all().await {
        match outcome {
            Ok(report) => {
                tracing::info!(
                    kind = %report.kind,
                    assigned = report.assigned.len(),
                    failed = report.failures.len(),
                    "backfill summary"
                );
                for failure in &report.failures {
                    tracing::warn!(kind = %report.kind, id = %failure.id, reason = %failure.reason, "row left without slug");
                }
                failed_rows += report.failures.len();
            }
            Err(err) => {
                tracing::error!(error = %err, "backfill aborted for a kind");
                failed_kinds += 1;
            }
        }
    }

    if failed_rows > 0 || failed_kinds > 0 {
        bail!("slug backfill incomplete: {failed_rows} row(s) and {failed_kinds} kind(s) failed");
    }
    Ok(())
}
