use anyhow::{Context, anyhow};
use rekap_core::{AppError, Paginated};
use rekap_models::{Transaction, TransactionFilterParams};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::utils::dates::{day_bounds, parse_date};
use crate::utils::filter::RecordFilter;

/// Source columns aliased to the [`Transaction`] field names.
pub const TRANSACTION_COLUMNS: &str = "id, branch_id, \
    no_transaksi AS transaction_no, \
    tanggal_masuk AS entry_date, \
    nama_pelanggan AS customer_name, \
    status, \
    status_pembayaran AS payment_status, \
    dp AS down_payment, \
    pelunasan AS settlement, \
    subtotal, \
    biaya_antar_jemput AS delivery_fee, \
    diskon AS discount, \
    diskon_poin AS points_discount, \
    total, \
    jumlah_kg AS weight_kg, \
    jumlah_pc AS piece_count, \
    created_at";

impl From<&TransactionFilterParams> for RecordFilter {
    /// An unparsable `date` is dropped rather than rejected.
    fn from(params: &TransactionFilterParams) -> Self {
        Self {
            entry_window: params.date.as_deref().and_then(parse_date).map(day_bounds),
            branch_id: params.branch_id,
            status: params.status.clone(),
        }
    }
}

pub struct TransactionService;

impl TransactionService {
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "transactions"))]
    pub async fn list(
        db: &PgPool,
        params: TransactionFilterParams,
    ) -> Result<Paginated<Transaction>, AppError> {
        let pagination = params.pagination();
        let filter = RecordFilter::from(&params);
        let where_clause = filter.where_clause();

        let count_query = format!("SELECT COUNT(*) FROM transactions{}", where_clause);
        let (total,) = filter
            .bind(sqlx::query_as::<_, (i64,)>(&count_query))
            .fetch_one(db)
            .await
            .context("Failed to fetch transactions")?;

        let data_query = format!(
            "SELECT {} FROM transactions{} ORDER BY tanggal_masuk DESC LIMIT {} OFFSET {}",
            TRANSACTION_COLUMNS,
            where_clause,
            pagination.limit(),
            pagination.offset()
        );
        let transactions = filter
            .bind(sqlx::query_as::<_, Transaction>(&data_query))
            .fetch_all(db)
            .await
            .context("Failed to fetch transactions")?;

        debug!(
            total = %total,
            returned = %transactions.len(),
            "transactions fetched"
        );

        Ok(Paginated::new(transactions, total, &pagination))
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "transactions"))]
    pub async fn find_by_transaction_no(
        db: &PgPool,
        transaction_no: &str,
    ) -> Result<Transaction, AppError> {
        let query = format!(
            "SELECT {} FROM transactions WHERE no_transaksi = $1 LIMIT 1",
            TRANSACTION_COLUMNS
        );

        sqlx::query_as::<_, Transaction>(&query)
            .bind(transaction_no)
            .fetch_optional(db)
            .await
            .context("Failed to fetch transaction")?
            .ok_or_else(|| AppError::not_found(anyhow!("Transaction not found")))
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "transactions"))]
    pub async fn list_by_branch(db: &PgPool, branch_id: i32) -> Result<Vec<Transaction>, AppError> {
        let query = format!(
            "SELECT {} FROM transactions WHERE branch_id = $1 ORDER BY tanggal_masuk DESC",
            TRANSACTION_COLUMNS
        );

        let transactions = sqlx::query_as::<_, Transaction>(&query)
            .bind(branch_id)
            .fetch_all(db)
            .await
            .context("Failed to fetch transactions")?;

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_params() {
        let params = TransactionFilterParams {
            date: Some("2024-05-01".to_string()),
            branch_id: Some(3),
            status: Some("diproses".to_string()),
            ..Default::default()
        };
        let filter = RecordFilter::from(&params);

        let (start, end) = filter.entry_window.unwrap();
        assert_eq!(start.to_rfc3339(), "2024-05-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-05-02T00:00:00+00:00");
        assert_eq!(filter.branch_id, Some(3));
        assert_eq!(filter.status.as_deref(), Some("diproses"));
    }

    #[test]
    fn test_unparsable_date_is_ignored() {
        let params = TransactionFilterParams {
            date: Some("kemarin".to_string()),
            ..Default::default()
        };

        assert_eq!(RecordFilter::from(&params), RecordFilter::default());
    }
}
