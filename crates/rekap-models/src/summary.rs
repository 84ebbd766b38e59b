//! Revenue and volume aggregates over transactions.

use rekap_core::serde::{deserialize_optional_i32, deserialize_optional_string};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Totals for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DailySummary {
    #[sqlx(default)]
    pub date: String,
    pub total_transactions: i64,
    pub total_revenue: f64,
    pub total_kg: f64,
    pub total_pc: i64,
    /// Number of fully paid transactions
    pub total_paid: i64,
}

/// One day inside a date-range breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RangeSummaryRow {
    pub date: String,
    pub total_transactions: i64,
    pub total_revenue: f64,
    pub total_kg: f64,
    pub total_pc: i64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DailySummaryParams {
    /// `YYYY-MM-DD`, defaults to today (UTC)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub branch_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeSummaryParams {
    /// First day, `YYYY-MM-DD` (required)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start_date: Option<String>,
    /// Last day, inclusive, `YYYY-MM-DD` (required)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub branch_id: Option<i32>,
}
