use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use rekap_core::AppError;
use rekap_models::{DailySummary, DailySummaryParams, RangeSummaryParams, RangeSummaryRow};
use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::utils::dates::{DATE_FORMAT, day_bounds, parse_date, range_bounds, today};
use crate::utils::filter::RecordFilter;

/// Per-day rows between two dates, echoing the requested bounds.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RangeSummaryResponse {
    pub data: Vec<RangeSummaryRow>,
    pub start_date: String,
    pub end_date: String,
}

fn parse_required(value: Option<&str>, field: &str) -> Result<NaiveDate, AppError> {
    parse_date(value.unwrap_or_default()).ok_or_else(|| {
        AppError::bad_request(anyhow!("Invalid {} format, use: YYYY-MM-DD", field))
    })
}

/// Resolves the day a daily summary covers. A missing date means today.
pub fn resolve_daily_date(params: &DailySummaryParams) -> Result<NaiveDate, AppError> {
    match params.date.as_deref() {
        None => Ok(today()),
        Some(value) => parse_date(value)
            .ok_or_else(|| AppError::bad_request(anyhow!("Invalid date format, use: YYYY-MM-DD"))),
    }
}

/// Validates the inclusive `[start_date, end_date]` pair of a range summary.
pub fn resolve_range(params: &RangeSummaryParams) -> Result<(NaiveDate, NaiveDate), AppError> {
    if params.start_date.is_none() || params.end_date.is_none() {
        return Err(AppError::bad_request(anyhow!(
            "start_date and end_date are required"
        )));
    }

    let start = parse_required(params.start_date.as_deref(), "start_date")?;
    let end = parse_required(params.end_date.as_deref(), "end_date")?;

    if end < start {
        return Err(AppError::bad_request(anyhow!(
            "end_date must not be before start_date"
        )));
    }

    Ok((start, end))
}

pub struct SummaryService;

impl SummaryService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "transactions"))]
    pub async fn daily(
        db: &PgPool,
        date: NaiveDate,
        branch_id: Option<i32>,
    ) -> Result<DailySummary, AppError> {
        let filter = RecordFilter {
            entry_window: Some(day_bounds(date)),
            branch_id,
            status: None,
        };

        let query = format!(
            r#"
            SELECT COUNT(*) AS total_transactions,
                   COALESCE(SUM(total), 0)::DOUBLE PRECISION AS total_revenue,
                   COALESCE(SUM(jumlah_kg), 0)::DOUBLE PRECISION AS total_kg,
                   COALESCE(SUM(jumlah_pc), 0)::BIGINT AS total_pc,
                   COUNT(*) FILTER (WHERE status_pembayaran = 'lunas') AS total_paid
            FROM transactions{}
            "#,
            filter.where_clause()
        );

        let mut summary = filter
            .bind(sqlx::query_as::<_, DailySummary>(&query))
            .fetch_one(db)
            .await
            .context("Failed to fetch daily summary")?;
        summary.date = date.format(DATE_FORMAT).to_string();

        debug!(total = summary.total_transactions, "daily summary computed");
        Ok(summary)
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "transactions"))]
    pub async fn range(
        db: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
        branch_id: Option<i32>,
    ) -> Result<Vec<RangeSummaryRow>, AppError> {
        let filter = RecordFilter {
            entry_window: Some(range_bounds(start, end)),
            branch_id,
            status: None,
        };

        let query = format!(
            r#"
            SELECT TO_CHAR(tanggal_masuk AT TIME ZONE 'UTC', 'YYYY-MM-DD') AS date,
                   COUNT(*) AS total_transactions,
                   COALESCE(SUM(total), 0)::DOUBLE PRECISION AS total_revenue,
                   COALESCE(SUM(jumlah_kg), 0)::DOUBLE PRECISION AS total_kg,
                   COALESCE(SUM(jumlah_pc), 0)::BIGINT AS total_pc
            FROM transactions{}
            GROUP BY 1
            ORDER BY 1 ASC
            "#,
            filter.where_clause()
        );

        let rows = filter
            .bind(sqlx::query_as::<_, RangeSummaryRow>(&query))
            .fetch_all(db)
            .await
            .context("Failed to fetch range summary")?;

        debug!(days = rows.len(), "range summary computed");
        Ok(rows)
    }
}
