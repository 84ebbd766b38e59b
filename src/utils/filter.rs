//! Dynamic `WHERE` clauses over the `transactions` table.

use chrono::{DateTime, Utc};
use sqlx::Postgres;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;

/// Conditions shared by the listing and summary queries.
///
/// [`RecordFilter::where_clause`] numbers its placeholders in the same order
/// [`RecordFilter::bind`] binds them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub entry_window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub branch_id: Option<i32>,
    pub status: Option<String>,
}

impl RecordFilter {
    pub fn where_clause(&self) -> String {
        let mut clause = String::from(" WHERE 1=1");
        let mut index = 0;
        let mut next = || {
            index += 1;
            index
        };

        if self.entry_window.is_some() {
            let (start, end) = (next(), next());
            clause.push_str(&format!(
                " AND tanggal_masuk >= ${} AND tanggal_masuk < ${}",
                start, end
            ));
        }

        if self.branch_id.is_some() {
            clause.push_str(&format!(" AND branch_id = ${}", next()));
        }

        if self.status.is_some() {
            clause.push_str(&format!(" AND status = ${}", next()));
        }

        clause
    }

    pub fn bind<'q, O>(
        &self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        if let Some((start, end)) = self.entry_window {
            query = query.bind(start).bind(end);
        }

        if let Some(branch_id) = self.branch_id {
            query = query.bind(branch_id);
        }

        if let Some(status) = &self.status {
            query = query.bind(status.clone());
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dates::{day_bounds, parse_date};

    #[test]
    fn test_empty_filter() {
        assert_eq!(RecordFilter::default().where_clause(), " WHERE 1=1");
    }

    #[test]
    fn test_placeholders_follow_present_conditions() {
        let filter = RecordFilter {
            entry_window: None,
            branch_id: Some(2),
            status: Some("selesai".to_string()),
        };

        assert_eq!(
            filter.where_clause(),
            " WHERE 1=1 AND branch_id = $1 AND status = $2"
        );
    }

    #[test]
    fn test_all_conditions() {
        let filter = RecordFilter {
            entry_window: parse_date("2024-05-01").map(day_bounds),
            branch_id: Some(2),
            status: Some("selesai".to_string()),
        };

        assert_eq!(
            filter.where_clause(),
            " WHERE 1=1 AND tanggal_masuk >= $1 AND tanggal_masuk < $2 AND branch_id = $3 AND status = $4"
        );
    }
}
