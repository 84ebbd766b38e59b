//! Point-of-sale transaction records.
//!
//! The backing table keeps the source system's column names; queries alias
//! them to the field names below.

use chrono::{DateTime, Utc};
use rekap_core::PaginationParams;
use rekap_core::serde::{
    deserialize_optional_i32, deserialize_optional_i64, deserialize_optional_string,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transaction {
    pub id: i32,
    pub branch_id: i32,
    /// Receipt number printed at the counter
    pub transaction_no: String,
    /// When the order was dropped off
    pub entry_date: DateTime<Utc>,
    pub customer_name: String,
    /// Processing status of the order
    pub status: String,
    /// Payment status (`lunas` when fully paid)
    pub payment_status: String,
    pub down_payment: f64,
    pub settlement: f64,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub discount: f64,
    pub points_discount: f64,
    pub total: f64,
    pub weight_kg: f64,
    pub piece_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Query parameters for `GET /api/transactions`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TransactionFilterParams {
    /// Entry date, `YYYY-MM-DD`. Unparsable values are ignored.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub branch_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 20)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl TransactionFilterParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params_from_query_strings() {
        let json = r#"{"date":"2024-05-01","branch_id":"3","status":"","page":"2"}"#;
        let params: TransactionFilterParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.date.as_deref(), Some("2024-05-01"));
        assert_eq!(params.branch_id, Some(3));
        assert_eq!(params.status, None);
        assert_eq!(params.pagination().page(), 2);
        assert_eq!(params.pagination().limit(), 20);
    }

    #[test]
    fn test_filter_params_reject_non_numeric_branch() {
        let json = r#"{"branch_id":"main"}"#;
        assert!(serde_json::from_str::<TransactionFilterParams>(json).is_err());
    }
}
