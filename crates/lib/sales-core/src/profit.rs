use std::fmt;
use std::str::FromStr;

use crate::query::ValidationError;

const MIDDLE_MAN_PROFIT_EXPR: &str = "COALESCE(mid_man_qty, 0) * (COALESCE(mid_man_unit_price_jpy, 0) - COALESCE(maker_unit_price_jpy, 0))";
const SELLER_PROFIT_EXPR: &str = "COALESCE(seller_qty, 0) * (COALESCE(seller_unit_price_jpy, 0) - COALESCE(mid_man_unit_price_jpy, 0))";
const OVERALL_PROFIT_EXPR: &str = "COALESCE(mid_man_qty, 0) * (COALESCE(mid_man_unit_price_jpy, 0) - COALESCE(maker_unit_price_jpy, 0)) + COALESCE(seller_qty, 0) * (COALESCE(seller_unit_price_jpy, 0) - COALESCE(mid_man_unit_price_jpy, 0))";

/// Which layer of the maker → mid-man → seller resale chain the profit
/// calculation isolates.
///
/// Each variant maps to a fixed per-row SQL expression of the form
/// `quantity * (higher price - lower price)` with missing quantities and
/// prices treated as zero. `Overall` is the sum of the other two expressions,
/// not an independently stored column. Only these enumerated expressions ever
/// reach generated SQL; raw caller text never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfitVariant {
    MiddleMan,
    Seller,
    Overall,
}

impl ProfitVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MiddleMan => "middle_man",
            Self::Seller => "seller",
            Self::Overall => "overall",
        }
    }

    /// The per-row profit expression interpolated into the aggregate query.
    #[must_use]
    pub const fn sql_expr(self) -> &'static str {
        match self {
            Self::MiddleMan => MIDDLE_MAN_PROFIT_EXPR,
            Self::Seller => SELLER_PROFIT_EXPR,
            Self::Overall => OVERALL_PROFIT_EXPR,
        }
    }
}

impl fmt::Display for ProfitVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfitVariant {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "middle_man" => Ok(Self::MiddleMan),
            "seller" => Ok(Self::Seller),
            "overall" => Ok(Self::Overall),
            other => Err(ValidationError::UnknownProfitVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_variants() {
        assert_eq!("middle_man".parse(), Ok(ProfitVariant::MiddleMan));
        assert_eq!("seller".parse(), Ok(ProfitVariant::Seller));
        assert_eq!("overall".parse(), Ok(ProfitVariant::Overall));
    }

    #[test]
    fn rejects_unknown_variant_without_default() {
        let err = "maker".parse::<ProfitVariant>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownProfitVariant("maker".to_string())
        );
    }

    #[test]
    fn overall_is_the_sum_of_the_other_expressions() {
        let combined = format!("{MIDDLE_MAN_PROFIT_EXPR} + {SELLER_PROFIT_EXPR}");
        assert_eq!(ProfitVariant::Overall.sql_expr(), combined);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for variant in [
            ProfitVariant::MiddleMan,
            ProfitVariant::Seller,
            ProfitVariant::Overall,
        ] {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
    }
}
