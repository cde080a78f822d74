//! Query shape to IoTDB SQL translation
//!
//! Every builder is a pure function of its descriptor. Identifiers (device
//! paths and sensor names) come from [`crate::schema::path`] and are written
//! into the statement verbatim.
//!
//! ```text
//! Q1 precise      SELECT s FROM p WHERE time = t
//! Q2 range        SELECT s FROM p WHERE time >= a AND time <= b
//! Q3 value range  Q2 AND p.s > v ...
//! Q4 agg range    SELECT f(s) FROM p WHERE time >= a AND time <= b
//! Q5 agg value    SELECT f(s) FROM p WHERE p.s > v AND ...
//! Q7 group by     SELECT f(s) FROM p group by ([a,b),gms)
//! Q8 latest       SELECT last s FROM p
//! Q10 desc        Q3 order by time desc
//! ```

use std::sync::Arc;

use super::error::{TranslateError, TranslateResult};
use crate::schema::{series_path, DeviceSchema, Sensor};
use crate::workload::{
    AggRangeQuery, AggValueQuery, AggregateFunction, GroupByQuery, LatestPointQuery, PreciseQuery,
    Query, RangeQuery, ValueRangeQuery,
};

/// Statement that wipes every database under `root`
pub const CLEANUP_SQL: &str = "delete database root.**";

const ORDER_BY_TIME_DESC: &str = " order by time desc";

/// Translate any query, `None` when the shape has no SQL form for this backend
pub fn translate(query: &Query) -> TranslateResult<Option<String>> {
    let sql = match query {
        Query::Precise(q) => precise_query(q)?,
        Query::Range(q) => range_query(q)?,
        Query::ValueRange(q) => value_range_query(q)?,
        Query::AggRange(q) => agg_range_query(q)?,
        Query::AggValue(q) => agg_value_query(q)?,
        Query::GroupBy(q) => group_by_query(q)?,
        Query::LatestPoint(q) => latest_point_query(q)?,
        Query::ValueRangeOrderByDesc(q) => value_range_query_order_by_desc(q)?,
        Query::AggRangeValue(_) | Query::RangeOrderByDesc(_) => return Ok(None),
    };
    Ok(Some(sql))
}

/// Q1: `SELECT <sensors> FROM <devices> WHERE time = <timestamp>`
pub fn precise_query(query: &PreciseQuery) -> TranslateResult<String> {
    let head = simple_select_head(&query.devices)?;
    Ok(format!("{} WHERE time = {}", head, query.timestamp))
}

/// Q2: inclusive time range
pub fn range_query(query: &RangeQuery) -> TranslateResult<String> {
    let head = simple_select_head(&query.devices)?;
    Ok(with_time_range(head, query.start, query.end))
}

/// Q3: time range plus `<path>.<sensor> > <threshold>` for every device and sensor
pub fn value_range_query(query: &ValueRangeQuery) -> TranslateResult<String> {
    let mut sql = with_time_range(
        simple_select_head(&query.devices)?,
        query.start,
        query.end,
    );
    for clause in value_filters(&query.devices, query.value_threshold) {
        sql.push_str(" AND ");
        sql.push_str(&clause);
    }
    Ok(sql)
}

/// Q4: aggregate over an inclusive time range
pub fn agg_range_query(query: &AggRangeQuery) -> TranslateResult<String> {
    let head = aggregate_select_head(&query.devices, query.agg_fun)?;
    Ok(with_time_range(head, query.start, query.end))
}

/// Q5: aggregate with the value filters as the whole WHERE predicate
pub fn agg_value_query(query: &AggValueQuery) -> TranslateResult<String> {
    let head = aggregate_select_head(&query.devices, query.agg_fun)?;
    let predicate = value_filters(&query.devices, query.value_threshold).join(" AND ");
    Ok(format!("{} WHERE {}", head, predicate))
}

/// Q7: aggregate in half-open `[start,end)` windows of `granularity` ms
pub fn group_by_query(query: &GroupByQuery) -> TranslateResult<String> {
    let head = aggregate_select_head(&query.devices, query.agg_fun)?;
    Ok(format!(
        "{} group by ([{},{}),{}ms)",
        head, query.start, query.end, query.granularity
    ))
}

/// Q8: `SELECT last <sensors> FROM <devices>`
pub fn latest_point_query(query: &LatestPointQuery) -> TranslateResult<String> {
    let sensors = select_sensors(&query.devices)?;
    Ok(format!(
        "SELECT last {} FROM {}",
        join_names(sensors, |s| s.name.clone()),
        from_list(&query.devices)
    ))
}

/// Q10: Q3 in descending time order
pub fn value_range_query_order_by_desc(query: &ValueRangeQuery) -> TranslateResult<String> {
    let mut sql = value_range_query(query)?;
    sql.push_str(ORDER_BY_TIME_DESC);
    Ok(sql)
}

/// `SELECT <sensor_1>, ..., <sensor_n> FROM <path_1>, ..., <path_k>`
pub fn simple_select_head(devices: &[Arc<DeviceSchema>]) -> TranslateResult<String> {
    let sensors = select_sensors(devices)?;
    Ok(format!(
        "SELECT {} FROM {}",
        join_names(sensors, |s| s.name.clone()),
        from_list(devices)
    ))
}

/// `SELECT <fn>(<sensor_1>), ..., <fn>(<sensor_n>) FROM <paths>`
pub fn aggregate_select_head(
    devices: &[Arc<DeviceSchema>],
    agg_fun: AggregateFunction,
) -> TranslateResult<String> {
    let sensors = select_sensors(devices)?;
    Ok(format!(
        "SELECT {} FROM {}",
        join_names(sensors, |s| format!("{}({})", agg_fun, s.name)),
        from_list(devices)
    ))
}

/// Sensor list of the first device; all devices of a query share it
fn select_sensors(devices: &[Arc<DeviceSchema>]) -> TranslateResult<&[Sensor]> {
    let first = devices.first().ok_or(TranslateError::NoDevices)?;
    if first.sensors.is_empty() {
        return Err(TranslateError::NoSensors {
            device: first.path(),
        });
    }
    Ok(first.sensors.as_slice())
}

fn from_list(devices: &[Arc<DeviceSchema>]) -> String {
    devices
        .iter()
        .map(|d| d.path())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_names(sensors: &[Sensor], render: impl Fn(&Sensor) -> String) -> String {
    sensors.iter().map(render).collect::<Vec<_>>().join(", ")
}

fn with_time_range(mut head: String, start: i64, end: i64) -> String {
    head.push_str(&format!(" WHERE time >= {} AND time <= {}", start, end));
    head
}

/// One `<path>.<sensor> > <threshold>` predicate per device and sensor
///
/// The threshold is truncated toward zero to an integer literal.
fn value_filters(devices: &[Arc<DeviceSchema>], threshold: f64) -> Vec<String> {
    let threshold = threshold as i64;
    devices
        .iter()
        .flat_map(|device| {
            device
                .sensors
                .iter()
                .map(move |sensor| format!("{} > {}", series_path(device, sensor), threshold))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SensorType;
    use crate::workload::{AggRangeValueQuery, Devices};

    fn device(name: &str) -> Arc<DeviceSchema> {
        Arc::new(
            DeviceSchema::new("g1", name)
                .tag("region", "east")
                .sensor("s0", SensorType::Double)
                .sensor("s1", SensorType::Double),
        )
    }

    fn one_device() -> Devices {
        vec![device("d1")]
    }

    fn two_devices() -> Devices {
        vec![device("d1"), device("d2")]
    }

    fn value_range(devices: Devices) -> ValueRangeQuery {
        ValueRangeQuery {
            devices,
            start: 10,
            end: 20,
            value_threshold: 5.0,
        }
    }

    #[test]
    fn test_precise_query() {
        let sql = precise_query(&PreciseQuery {
            devices: one_device(),
            timestamp: 100,
        })
        .unwrap();
        assert_eq!(sql, "SELECT s0, s1 FROM root.g1.east.d1 WHERE time = 100");
    }

    #[test]
    fn test_range_query_is_inclusive() {
        let sql = range_query(&RangeQuery {
            devices: one_device(),
            start: 10,
            end: 20,
        })
        .unwrap();
        assert_eq!(
            sql,
            "SELECT s0, s1 FROM root.g1.east.d1 WHERE time >= 10 AND time <= 20"
        );
    }

    #[test]
    fn test_select_head_lists_every_device() {
        let sql = simple_select_head(&two_devices()).unwrap();
        assert_eq!(sql, "SELECT s0, s1 FROM root.g1.east.d1, root.g1.east.d2");
    }

    #[test]
    fn test_select_head_uses_first_device_sensors() {
        let devices: Devices = vec![
            Arc::new(DeviceSchema::new("g", "a").sensor("x", SensorType::Int32)),
            Arc::new(
                DeviceSchema::new("g", "b")
                    .sensor("y", SensorType::Int32)
                    .sensor("z", SensorType::Int32),
            ),
        ];
        let sql = simple_select_head(&devices).unwrap();
        assert_eq!(sql, "SELECT x FROM root.g.a, root.g.b");
    }

    #[test]
    fn test_value_range_query_filters_every_pair() {
        let sql = value_range_query(&value_range(two_devices())).unwrap();
        assert_eq!(
            sql,
            "SELECT s0, s1 FROM root.g1.east.d1, root.g1.east.d2 \
             WHERE time >= 10 AND time <= 20 \
             AND root.g1.east.d1.s0 > 5 AND root.g1.east.d1.s1 > 5 \
             AND root.g1.east.d2.s0 > 5 AND root.g1.east.d2.s1 > 5"
        );
        assert_eq!(sql.matches(" > 5").count(), 4);
    }

    #[test]
    fn test_threshold_is_truncated() {
        let mut query = value_range(one_device());
        query.value_threshold = 5.9;
        let sql = value_range_query(&query).unwrap();
        assert!(sql.ends_with("root.g1.east.d1.s1 > 5"));
    }

    #[test]
    fn test_agg_range_query() {
        let sql = agg_range_query(&AggRangeQuery {
            devices: one_device(),
            agg_fun: AggregateFunction::Count,
            start: 1,
            end: 2,
        })
        .unwrap();
        assert_eq!(
            sql,
            "SELECT count(s0), count(s1) FROM root.g1.east.d1 WHERE time >= 1 AND time <= 2"
        );
    }

    #[test]
    fn test_agg_value_query_where_has_no_leading_and() {
        let sql = agg_value_query(&AggValueQuery {
            devices: two_devices(),
            agg_fun: AggregateFunction::MaxValue,
            value_threshold: 3.0,
        })
        .unwrap();
        assert_eq!(
            sql,
            "SELECT max_value(s0), max_value(s1) FROM root.g1.east.d1, root.g1.east.d2 \
             WHERE root.g1.east.d1.s0 > 3 AND root.g1.east.d1.s1 > 3 \
             AND root.g1.east.d2.s0 > 3 AND root.g1.east.d2.s1 > 3"
        );
        let predicate = sql.split(" WHERE ").nth(1).unwrap();
        assert!(!predicate.starts_with("AND"));
    }

    #[test]
    fn test_group_by_query_is_half_open() {
        let sql = group_by_query(&GroupByQuery {
            devices: one_device(),
            agg_fun: AggregateFunction::Avg,
            start: 0,
            end: 1000,
            granularity: 100,
        })
        .unwrap();
        assert_eq!(
            sql,
            "SELECT avg(s0), avg(s1) FROM root.g1.east.d1 group by ([0,1000),100ms)"
        );
    }

    #[test]
    fn test_latest_point_query() {
        let sql = latest_point_query(&LatestPointQuery {
            devices: two_devices(),
        })
        .unwrap();
        assert_eq!(
            sql,
            "SELECT last s0, s1 FROM root.g1.east.d1, root.g1.east.d2"
        );
    }

    #[test]
    fn test_desc_variant_appends_order_by() {
        let query = value_range(two_devices());
        let asc = value_range_query(&query).unwrap();
        let desc = value_range_query_order_by_desc(&query).unwrap();
        assert_eq!(desc, format!("{} order by time desc", asc));
    }

    #[test]
    fn test_unsupported_shapes_translate_to_none() {
        let agg_range_value = Query::AggRangeValue(AggRangeValueQuery {
            devices: one_device(),
            agg_fun: AggregateFunction::Sum,
            start: 0,
            end: 1,
            value_threshold: 0.0,
        });
        let range_desc = Query::RangeOrderByDesc(RangeQuery {
            devices: one_device(),
            start: 0,
            end: 1,
        });

        assert_eq!(translate(&agg_range_value).unwrap(), None);
        assert_eq!(translate(&range_desc).unwrap(), None);
    }

    #[test]
    fn test_translate_dispatches() {
        let query = Query::Precise(PreciseQuery {
            devices: one_device(),
            timestamp: 100,
        });
        assert_eq!(
            translate(&query).unwrap().as_deref(),
            Some("SELECT s0, s1 FROM root.g1.east.d1 WHERE time = 100")
        );
    }

    #[test]
    fn test_empty_device_list_is_an_error() {
        let err = latest_point_query(&LatestPointQuery {
            devices: Vec::new(),
        })
        .unwrap_err();
        assert_eq!(err, TranslateError::NoDevices);
    }

    #[test]
    fn test_sensorless_device_is_an_error() {
        let err = precise_query(&PreciseQuery {
            devices: vec![Arc::new(DeviceSchema::new("g", "d"))],
            timestamp: 0,
        })
        .unwrap_err();
        assert_eq!(
            err,
            TranslateError::NoSensors {
                device: "root.g.d".to_string()
            }
        );
    }
}
