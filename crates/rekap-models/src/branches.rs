use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Transaction count and revenue for one branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BranchStats {
    pub branch_id: i32,
    pub total_transactions: i64,
    pub total_revenue: f64,
}
