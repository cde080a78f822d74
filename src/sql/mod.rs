//! IoTDB SQL generation for the fixed benchmark query catalog

pub mod error;
pub mod translator;

pub use error::{TranslateError, TranslateResult};
pub use translator::{
    agg_range_query, agg_value_query, aggregate_select_head, group_by_query, latest_point_query,
    precise_query, range_query, simple_select_head, translate, value_range_query,
    value_range_query_order_by_desc, CLEANUP_SQL,
};
