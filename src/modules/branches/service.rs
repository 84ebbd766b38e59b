use anyhow::Context;
use rekap_core::AppError;
use rekap_models::BranchStats;
use sqlx::PgPool;
use tracing::instrument;

pub struct BranchService;

impl BranchService {
    /// Transaction count and revenue per branch, ordered by branch id.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "transactions"))]
    pub async fn list_stats(db: &PgPool) -> Result<Vec<BranchStats>, AppError> {
        let branches = sqlx::query_as::<_, BranchStats>(
            r#"
            SELECT branch_id,
                   COUNT(*) AS total_transactions,
                   COALESCE(SUM(total), 0)::DOUBLE PRECISION AS total_revenue
            FROM transactions
            GROUP BY branch_id
            ORDER BY branch_id ASC
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch branches")?;

        Ok(branches)
    }
}
