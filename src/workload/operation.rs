//! Benchmark operation names

use std::str::FromStr;

/// Operations the benchmark harness drives through an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Ingestion,
    PreciseQuery,
    RangeQuery,
    ValueRangeQuery,
    AggRangeQuery,
    AggValueQuery,
    AggRangeValueQuery,
    GroupByQuery,
    LatestPointQuery,
    RangeQueryOrderByDesc,
    ValueRangeQueryOrderByDesc,
}

impl Operation {
    /// All query operations, in benchmark order
    pub fn queries() -> &'static [Operation] {
        &[
            Operation::PreciseQuery,
            Operation::RangeQuery,
            Operation::ValueRangeQuery,
            Operation::AggRangeQuery,
            Operation::AggValueQuery,
            Operation::AggRangeValueQuery,
            Operation::GroupByQuery,
            Operation::LatestPointQuery,
            Operation::RangeQueryOrderByDesc,
            Operation::ValueRangeQueryOrderByDesc,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Ingestion => "INGESTION",
            Operation::PreciseQuery => "PRECISE_POINT",
            Operation::RangeQuery => "TIME_RANGE",
            Operation::ValueRangeQuery => "VALUE_RANGE",
            Operation::AggRangeQuery => "AGG_RANGE",
            Operation::AggValueQuery => "AGG_VALUE",
            Operation::AggRangeValueQuery => "AGG_RANGE_VALUE",
            Operation::GroupByQuery => "GROUP_BY",
            Operation::LatestPointQuery => "LATEST_POINT",
            Operation::RangeQueryOrderByDesc => "RANGE_QUERY_DESC",
            Operation::ValueRangeQueryOrderByDesc => "VALUE_RANGE_QUERY_DESC",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    /// Accepts the benchmark name (`TIME_RANGE`) in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        std::iter::once(&Operation::Ingestion)
            .chain(Operation::queries())
            .find(|op| op.name() == wanted)
            .copied()
            .ok_or_else(|| format!("unknown operation: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for op in Operation::queries() {
            assert_eq!(op.name().parse::<Operation>().unwrap(), *op);
        }
        assert_eq!(
            "time-range".parse::<Operation>().unwrap(),
            Operation::RangeQuery
        );
        assert!("nope".parse::<Operation>().is_err());
    }

    #[test]
    fn test_queries_excludes_ingestion() {
        assert_eq!(Operation::queries().len(), 10);
        assert!(!Operation::queries().contains(&Operation::Ingestion));
    }
}
