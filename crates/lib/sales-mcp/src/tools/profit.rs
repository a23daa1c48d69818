use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use sales_core::period::TimeGranularity;
use sales_core::profit::ProfitVariant;
use sales_core::query::{DEFAULT_LIMIT, PeriodPair, ProfitChangeQuery};
use sales_store::schema::DEFAULT_GROUP_BY;
use serde::{Deserialize, Serialize};

use crate::{SalesMcp, helpers};

/// Parameters for the profit-change query.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetProfitChangeParams {
    /// Profit layer: "middle_man", "seller", or "overall".
    pub profit_type: String,
    /// Warehouse time column: "ym", "yq", or "yh". Optional; inferred from
    /// the first time value when omitted.
    pub time_column: Option<String>,
    /// Exactly two period strings, baseline first. A bare year like "2022"
    /// matches every period of that year.
    pub time_values: Vec<String>,
    /// Segment columns to group by, e.g. ["bu", "product", "customer", "pn"].
    pub group_by: Option<Vec<String>>,
    /// Maximum number of rows to return (default 10).
    pub limit: Option<u32>,
}

#[tool_router(router = tool_router_profit, vis = "pub")]
impl SalesMcp {
    #[tool(
        description = "Compare profit between two time periods, grouped by segment columns. Returns one record per group with profit at both periods, the change, and the change's percentage share of the total change, ranked by magnitude of change."
    )]
    async fn get_profit_change(
        &self,
        Parameters(params): Parameters<GetProfitChangeParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let profit_type: ProfitVariant = params
            .profit_type
            .parse()
            .map_err(helpers::invalid_params)?;
        let periods = PeriodPair::from_values(&params.time_values).map_err(helpers::invalid_params)?;
        // An explicit time_column is authoritative; the shape of the baseline
        // value only decides the granularity when the caller omits it.
        let granularity: TimeGranularity = match params.time_column.as_deref() {
            Some(value) => value.parse().map_err(helpers::invalid_params)?,
            None => TimeGranularity::infer(periods.baseline()),
        };
        let group_by = params.group_by.unwrap_or_else(|| {
            DEFAULT_GROUP_BY.iter().map(ToString::to_string).collect()
        });
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        let query = ProfitChangeQuery::new(profit_type, granularity, periods, group_by, limit)
            .map_err(helpers::invalid_params)?;
        let records = self
            .store()
            .profit_change_by_segment(&query)
            .await
            .map_err(helpers::store_err)?;
        Ok(CallToolResult::success(vec![Content::json(records)?]))
    }
}
