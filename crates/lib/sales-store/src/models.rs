use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::schema::{
    MEASURE_PERCENT_PROFIT_CHANGE,
    MEASURE_PROFIT_CHANGE,
    MEASURE_PROFIT_T1,
    MEASURE_PROFIT_T2,
};

/// One grouping-column value carried by a result record.
///
/// The value is `None` when the warehouse row itself holds NULL in that
/// segment column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentValue {
    pub column: String,
    pub value: Option<String>,
}

impl SegmentValue {
    #[must_use]
    pub fn new(column: impl Into<String>, value: Option<String>) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }
}

/// One output row of the profit-change query: the grouping values in caller
/// order, profit at both periods, their difference, and that difference's
/// share of the total change across all groups.
///
/// Serializes as a single flat JSON object: grouping columns first (in the
/// order the caller asked for), then the four measures.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitChangeRecord {
    pub segment: Vec<SegmentValue>,
    pub profit_t1_jpy: f64,
    pub profit_t2_jpy: f64,
    pub profit_change: f64,
    pub percent_profit_change: f64,
}

impl Serialize for ProfitChangeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.segment.len() + 4))?;
        for segment in &self.segment {
            map.serialize_entry(&segment.column, &segment.value)?;
        }
        map.serialize_entry(MEASURE_PROFIT_T1, &self.profit_t1_jpy)?;
        map.serialize_entry(MEASURE_PROFIT_T2, &self.profit_t2_jpy)?;
        map.serialize_entry(MEASURE_PROFIT_CHANGE, &self.profit_change)?;
        map.serialize_entry(MEASURE_PERCENT_PROFIT_CHANGE, &self.percent_profit_change)?;
        map.end()
    }
}
