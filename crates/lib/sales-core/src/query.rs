use std::error::Error;
use std::fmt;

use sales_store::schema::{TABLE_SALES_DATA, is_grouping_column};

use crate::period::TimeGranularity;
use crate::profit::ProfitVariant;

pub const DEFAULT_LIMIT: u32 = 10;

/// Input errors raised before any query reaches the warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TimeValueCount(usize),
    EmptyGroupBy,
    UnknownGroupingColumn(String),
    ZeroLimit,
    UnknownProfitVariant(String),
    UnknownGranularity(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeValueCount(count) => {
                write!(f, "exactly two time values required, got {count}")
            }
            Self::EmptyGroupBy => write!(f, "group_by must name at least one column"),
            Self::UnknownGroupingColumn(name) => {
                write!(f, "unknown grouping column: {name}")
            }
            Self::ZeroLimit => write!(f, "limit must be a positive integer"),
            Self::UnknownProfitVariant(name) => {
                write!(f, "unknown profit type: {name} (expected middle_man, seller, or overall)")
            }
            Self::UnknownGranularity(name) => {
                write!(f, "unknown time column: {name} (expected ym, yq, or yh)")
            }
        }
    }
}

impl Error for ValidationError {}

/// An ordered pair of period values: the baseline t1 and the comparison t2.
///
/// The first value is always the baseline regardless of the chronological
/// order implied by the literal contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodPair {
    baseline: String,
    comparison: String,
}

impl PeriodPair {
    #[must_use]
    pub const fn new(baseline: String, comparison: String) -> Self {
        Self {
            baseline,
            comparison,
        }
    }

    /// Builds a pair from a caller-supplied list.
    ///
    /// # Errors
    /// Returns `ValidationError::TimeValueCount` unless exactly two values are
    /// supplied.
    pub fn from_values(values: &[String]) -> Result<Self, ValidationError> {
        match values {
            [baseline, comparison] => Ok(Self::new(baseline.clone(), comparison.clone())),
            other => Err(ValidationError::TimeValueCount(other.len())),
        }
    }

    #[must_use]
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    #[must_use]
    pub fn comparison(&self) -> &str {
        &self.comparison
    }
}

/// A validated profit-change query: everything needed to assemble and bind
/// the aggregate statement. Construction is the validation boundary; a value
/// of this type only ever holds allow-listed grouping identifiers, a positive
/// limit, and exactly two period values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfitChangeQuery {
    profit_type: ProfitVariant,
    granularity: TimeGranularity,
    periods: PeriodPair,
    group_by: Vec<String>,
    limit: u32,
}

impl ProfitChangeQuery {
    /// Validates the inputs and builds a query descriptor.
    ///
    /// # Errors
    /// Returns a `ValidationError` when `group_by` is empty or names a column
    /// outside the schema allow-list, or when `limit` is zero.
    pub fn new(
        profit_type: ProfitVariant,
        granularity: TimeGranularity,
        periods: PeriodPair,
        group_by: Vec<String>,
        limit: u32,
    ) -> Result<Self, ValidationError> {
        if group_by.is_empty() {
            return Err(ValidationError::EmptyGroupBy);
        }
        if let Some(unknown) = group_by.iter().find(|name| !is_grouping_column(name)) {
            return Err(ValidationError::UnknownGroupingColumn(unknown.clone()));
        }
        if limit == 0 {
            return Err(ValidationError::ZeroLimit);
        }
        Ok(Self {
            profit_type,
            granularity,
            periods,
            group_by,
            limit,
        })
    }

    #[must_use]
    pub const fn profit_type(&self) -> ProfitVariant {
        self.profit_type
    }

    #[must_use]
    pub const fn granularity(&self) -> TimeGranularity {
        self.granularity
    }

    #[must_use]
    pub const fn periods(&self) -> &PeriodPair {
        &self.periods
    }

    #[must_use]
    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Assembles the aggregate statement executed against the warehouse.
    ///
    /// The statement binds `$1` = baseline period, `$2` = comparison period,
    /// `$3` = row limit. Grouping identifiers are interpolated only after the
    /// allow-list check in [`Self::new`]; the profit expression comes from the
    /// closed [`ProfitVariant`] enumeration. `calc` computes per-group
    /// conditional sums for both periods, `final` adds the delta and the
    /// window total, and the outer select derives the rounded contribution
    /// percentage, defined as 0 when the total change is 0. Ordering is by
    /// `|profit_change|` descending with the grouping columns ascending as a
    /// deterministic tie-break.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let columns = self.group_by.join(", ");
        let profit_expr = self.profit_type.sql_expr();
        let match_t1 = period_match_sql(self.granularity, "$1");
        let match_t2 = period_match_sql(self.granularity, "$2");
        format!(
            r"WITH calc AS (
    SELECT
        {columns},
        SUM(CASE WHEN {match_t1} THEN {profit_expr} ELSE 0 END) AS profit_t1_jpy,
        SUM(CASE WHEN {match_t2} THEN {profit_expr} ELSE 0 END) AS profit_t2_jpy
    FROM {TABLE_SALES_DATA}
    GROUP BY {columns}
),
final AS (
    SELECT
        *,
        profit_t2_jpy - profit_t1_jpy AS profit_change,
        SUM(profit_t2_jpy - profit_t1_jpy) OVER () AS total_profit_change
    FROM calc
)
SELECT
    {columns},
    profit_t1_jpy::float8 AS profit_t1_jpy,
    profit_t2_jpy::float8 AS profit_t2_jpy,
    profit_change::float8 AS profit_change,
    (CASE
        WHEN total_profit_change = 0 THEN 0
        ELSE ROUND((profit_change::numeric / ABS(total_profit_change)::numeric) * 100, 2)
    END)::float8 AS percent_profit_change
FROM final
ORDER BY ABS(profit_change) DESC, {columns}
LIMIT $3"
        )
    }
}

/// SQL rendering of the per-row period predicate in [`crate::period`]: exact
/// column equality, or a year-prefix match when the bound target contains no
/// delimiter character. `placeholder` is a trusted bind marker, never caller
/// text.
fn period_match_sql(granularity: TimeGranularity, placeholder: &str) -> String {
    let column = granularity.column();
    let delimiter = granularity.delimiter();
    format!(
        "{column} = {placeholder} OR (position('{delimiter}' IN {placeholder}) = 0 AND {column} LIKE {placeholder} || '%')"
    )
}
