use std::fmt;
use std::str::FromStr;

use sales_store::schema::{COL_YH, COL_YM, COL_YQ};

use crate::query::ValidationError;

/// Time bucket size used to match periods: year-month, year-quarter, or
/// year-half. Each granularity reads exactly one warehouse column and carries
/// the delimiter character that separates the year from the sub-year part
/// (`2022/05`, `2022 Q2`, `2022 H1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeGranularity {
    Ym,
    Yq,
    Yh,
}

impl TimeGranularity {
    /// The warehouse column matched against period values.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Ym => COL_YM,
            Self::Yq => COL_YQ,
            Self::Yh => COL_YH,
        }
    }

    /// The character whose absence marks a period value as a bare year.
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Ym => '/',
            Self::Yq => 'Q',
            Self::Yh => 'H',
        }
    }

    /// Infers a granularity from the shape of a period value: `Q` means
    /// quarter, otherwise `H` means half, otherwise year-month. A bare year
    /// like `"2022"` lands on year-month, where the prefix rule still matches
    /// every month of that year.
    #[must_use]
    pub fn infer(value: &str) -> Self {
        if value.contains('Q') {
            Self::Yq
        } else if value.contains('H') {
            Self::Yh
        } else {
            Self::Ym
        }
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for TimeGranularity {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ym" => Ok(Self::Ym),
            "yq" => Ok(Self::Yq),
            "yh" => Ok(Self::Yh),
            other => Err(ValidationError::UnknownGranularity(other.to_string())),
        }
    }
}

/// Per-row period predicate: does `row_value` (the row's value in the
/// granularity's column) belong to the period named by `target`?
///
/// A row matches on exact equality, or by year prefix when the target
/// contains none of the granularity's delimiter characters. The prefix rule
/// is what lets a caller pass `"2022"` to mean every month, quarter, or half
/// of 2022. Rows are only ever matched against their own granularity's
/// column; this predicate is the single in-process source of truth mirrored
/// by the generated SQL.
#[must_use]
pub fn matches_period(granularity: TimeGranularity, row_value: &str, target: &str) -> bool {
    row_value == target
        || (!target.contains(granularity.delimiter()) && row_value.starts_with(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_year_matches_every_month_by_prefix() {
        for month in 1..=12 {
            let row = format!("2022/{month:02}");
            assert!(matches_period(TimeGranularity::Ym, &row, "2022"));
        }
        assert!(!matches_period(TimeGranularity::Ym, "2023/01", "2022"));
    }

    #[test]
    fn delimiter_in_target_disables_prefix_fallback() {
        assert!(matches_period(TimeGranularity::Ym, "2022/05", "2022/05"));
        assert!(!matches_period(TimeGranularity::Ym, "2022/05/x", "2022/05"));
        assert!(!matches_period(TimeGranularity::Ym, "2022/06", "2022/05"));
    }

    #[test]
    fn quarter_and_half_use_their_own_delimiters() {
        assert!(matches_period(TimeGranularity::Yq, "2022 Q2", "2022 Q2"));
        assert!(!matches_period(TimeGranularity::Yq, "2022 Q3", "2022 Q2"));
        assert!(matches_period(TimeGranularity::Yq, "2022 Q3", "2022"));
        assert!(matches_period(TimeGranularity::Yh, "2022 H1", "2022"));
        assert!(!matches_period(TimeGranularity::Yh, "2022 H2", "2022 H1"));
    }

    #[test]
    fn prefix_rule_is_granularity_specific() {
        // "2022 Q2" has no '/' in it, so under ym it would be a prefix target;
        // under yq the Q delimiter forces exact matching.
        assert!(matches_period(TimeGranularity::Ym, "2022 Q2 x", "2022 Q2"));
        assert!(!matches_period(TimeGranularity::Yq, "2022 Q2 x", "2022 Q2"));
    }

    #[test]
    fn infers_granularity_from_value_shape() {
        assert_eq!(TimeGranularity::infer("2022 Q2"), TimeGranularity::Yq);
        assert_eq!(TimeGranularity::infer("2022 H1"), TimeGranularity::Yh);
        assert_eq!(TimeGranularity::infer("2022/05"), TimeGranularity::Ym);
        assert_eq!(TimeGranularity::infer("2022"), TimeGranularity::Ym);
    }

    #[test]
    fn inference_prefers_quarter_when_both_markers_appear() {
        assert_eq!(TimeGranularity::infer("2022 Q1 H2"), TimeGranularity::Yq);
    }

    #[test]
    fn parses_column_names() {
        assert_eq!("ym".parse(), Ok(TimeGranularity::Ym));
        assert_eq!("yq".parse(), Ok(TimeGranularity::Yq));
        assert_eq!("yh".parse(), Ok(TimeGranularity::Yh));
        assert!("yw".parse::<TimeGranularity>().is_err());
    }
}
