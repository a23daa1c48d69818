use std::error::Error;
use std::fmt;

use sales_store::models::{ProfitChangeRecord, SegmentValue};
use sales_store::schema::{
    MEASURE_PERCENT_PROFIT_CHANGE,
    MEASURE_PROFIT_CHANGE,
    MEASURE_PROFIT_T1,
    MEASURE_PROFIT_T2,
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::query::ProfitChangeQuery;

#[derive(Debug)]
pub enum StoreError {
    Postgres(Box<sqlx::Error>),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres(err) => write!(f, "Postgres error: {err}"),
        }
    }
}

impl Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Postgres(Box::new(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only executor for the profit-change query over the `sales_data`
/// warehouse table. Holds a `PgPool`; each call checks one connection out for
/// the duration of a single statement and releases it on every exit path.
#[derive(Debug, Clone)]
pub struct SalesStore {
    pool: PgPool,
}

impl SalesStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Executes a validated profit-change query and decodes the ordered
    /// result records.
    ///
    /// # Errors
    /// Returns `StoreError::Postgres` when the query fails or a result column
    /// cannot be decoded; warehouse errors propagate unmodified, with no
    /// retries and no partial results.
    pub async fn profit_change_by_segment(
        &self,
        query: &ProfitChangeQuery,
    ) -> StoreResult<Vec<ProfitChangeRecord>> {
        let sql = query.to_sql();
        tracing::debug!(
            profit_type = %query.profit_type(),
            granularity = %query.granularity(),
            groups = query.group_by().len(),
            limit = query.limit(),
            "executing profit-change query"
        );
        let rows = sqlx::query(&sql)
            .bind(query.periods().baseline())
            .bind(query.periods().comparison())
            .bind(i64::from(query.limit()))
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| record_from_row(row, query.group_by()))
            .collect()
    }
}

fn record_from_row(row: &PgRow, group_by: &[String]) -> StoreResult<ProfitChangeRecord> {
    let mut segment = Vec::with_capacity(group_by.len());
    for column in group_by {
        let value: Option<String> = row.try_get(column.as_str())?;
        segment.push(SegmentValue::new(column.clone(), value));
    }
    Ok(ProfitChangeRecord {
        segment,
        profit_t1_jpy: row.try_get(MEASURE_PROFIT_T1)?,
        profit_t2_jpy: row.try_get(MEASURE_PROFIT_T2)?,
        profit_change: row.try_get(MEASURE_PROFIT_CHANGE)?,
        percent_profit_change: row.try_get(MEASURE_PERCENT_PROFIT_CHANGE)?,
    })
}
