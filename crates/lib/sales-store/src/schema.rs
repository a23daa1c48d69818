pub const TABLE_SALES_DATA: &str = "sales_data";

pub const COL_YM: &str = "ym";
pub const COL_YQ: &str = "yq";
pub const COL_YH: &str = "yh";

pub const COL_MAKER_UNIT_PRICE: &str = "maker_unit_price_jpy";
pub const COL_MID_MAN_UNIT_PRICE: &str = "mid_man_unit_price_jpy";
pub const COL_SELLER_UNIT_PRICE: &str = "seller_unit_price_jpy";
pub const COL_MID_MAN_QTY: &str = "mid_man_qty";
pub const COL_SELLER_QTY: &str = "seller_qty";

pub const MEASURE_PROFIT_T1: &str = "profit_t1_jpy";
pub const MEASURE_PROFIT_T2: &str = "profit_t2_jpy";
pub const MEASURE_PROFIT_CHANGE: &str = "profit_change";
pub const MEASURE_PERCENT_PROFIT_CHANGE: &str = "percent_profit_change";

/// Segment columns that may appear in a `GROUP BY` key. Grouping input is
/// checked against this list before any identifier reaches generated SQL.
pub const GROUPING_COLUMNS: &[&str] = &["bu", "product", "customer", "pn"];

pub const DEFAULT_GROUP_BY: &[&str] = &["bu", "product", "customer"];

#[must_use]
pub fn is_grouping_column(name: &str) -> bool {
    GROUPING_COLUMNS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_by_is_allow_listed() {
        for column in DEFAULT_GROUP_BY {
            assert!(is_grouping_column(column), "{column} must be allow-listed");
        }
    }

    #[test]
    fn rejects_unknown_identifiers() {
        assert!(!is_grouping_column("ym"));
        assert!(!is_grouping_column("sales_data"));
        assert!(!is_grouping_column("bu; DROP TABLE sales_data"));
        assert!(!is_grouping_column(""));
    }
}
