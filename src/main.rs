//! iotdb-rest-bench CLI
//!
//! Command-line driver for the IoTDB REST adapter:
//! - Print or write the default config
//! - Wipe benchmark data
//! - Run a smoke workload through every operation
//! - Show the SQL a query shape translates to

use clap::{Parser, Subcommand};
use iotdb_rest_bench::workload::synthetic::{self, QueryParams};
use iotdb_rest_bench::{
    config, logging, sql, AggregateFunction, Config, Database, Operation, RestApi, SensorType,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iotdb-rest-bench")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Benchmark adapter for the IoTDB REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete every database under root (irreversible)
    Cleanup,

    /// Insert a synthetic batch per device, then run every query shape
    Smoke {
        /// Storage group name
        #[arg(long, default_value = "g_0")]
        group: String,
        /// Number of devices
        #[arg(long, default_value = "2")]
        devices: usize,
        /// Sensors per device
        #[arg(long, default_value = "3")]
        sensors: usize,
        /// Rows per batch
        #[arg(long, default_value = "100")]
        rows: usize,
        /// Milliseconds between rows
        #[arg(long, default_value = "10")]
        interval: i64,
    },

    /// Print the SQL for one query shape without contacting the server
    Sql {
        /// Operation name, e.g. TIME_RANGE or GROUP_BY
        operation: Operation,
        /// Number of devices
        #[arg(long, default_value = "1")]
        devices: usize,
        /// Sensors per device
        #[arg(long, default_value = "2")]
        sensors: usize,
        #[arg(long, default_value = "0")]
        start: i64,
        #[arg(long, default_value = "1000")]
        end: i64,
        #[arg(long, default_value = "0")]
        threshold: f64,
        /// Group-by window in milliseconds
        #[arg(long, default_value = "100")]
        granularity: i64,
        /// Aggregate function, e.g. max_value (default: from config)
        #[arg(long)]
        agg: Option<AggregateFunction>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    logging::init(&config.logging);

    match cli.command {
        Commands::Config { output } => {
            let content = config::generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::Cleanup => {
            let api = RestApi::new(&config.database, config.workload.sensor_ts_alignment)?;
            api.cleanup().await?;
            api.close().await?;
            println!("Deleted all databases under root");
        }

        Commands::Smoke {
            group,
            devices,
            sensors,
            rows,
            interval,
        } => {
            smoke(&config, &group, devices, sensors, rows, interval).await?;
        }

        Commands::Sql {
            operation,
            devices,
            sensors,
            start,
            end,
            threshold,
            granularity,
            agg,
        } => {
            let params = QueryParams {
                start,
                end,
                value_threshold: threshold,
                granularity,
                agg_fun: agg.unwrap_or(config.workload.query_aggregate_function),
            };
            let schemas = synthetic::device_schemas("g_0", devices, sensors, SensorType::Double);
            let query = synthetic::query(operation, schemas, &params)
                .ok_or_else(|| anyhow::anyhow!("{} is not a query", operation))?;

            match sql::translate(&query)? {
                Some(text) => println!("{}", text),
                None => println!("{} is not supported by the REST adapter", operation),
            }
        }
    }

    Ok(())
}

async fn smoke(
    config: &Config,
    group: &str,
    devices: usize,
    sensors: usize,
    rows: usize,
    interval: i64,
) -> anyhow::Result<()> {
    let api = RestApi::new(&config.database, config.workload.sensor_ts_alignment)?;
    api.init().await?;

    let schemas = synthetic::device_schemas(group, devices, sensors, SensorType::Double);
    if let Some(elapsed) = api.register_schema(&schemas).await? {
        tracing::info!("Schema registered in {:?}", elapsed);
    }

    let start = chrono::Utc::now().timestamp_millis();
    for schema in &schemas {
        let batch = synthetic::batch(schema.clone(), start, interval, rows)?;
        let status = api.insert_one_batch(&batch).await;
        println!(
            "{:<24} {:<20} {} ({} points)",
            Operation::Ingestion,
            schema.path(),
            status,
            batch.point_count()
        );
    }

    let params = QueryParams {
        start,
        end: start + interval * rows as i64,
        value_threshold: 0.0,
        granularity: (interval * rows as i64 / 10).max(1),
        agg_fun: config.workload.query_aggregate_function,
    };

    for operation in Operation::queries() {
        let Some(query) = synthetic::query(*operation, schemas.clone(), &params) else {
            continue;
        };
        match api.execute(&query).await {
            Some(status) => println!("{:<24} {}", operation, status),
            None => println!("{:<24} unsupported", operation),
        }
    }

    api.close().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_accepts_aggregate_flag() {
        let cli = Cli::try_parse_from(["iotdb-rest-bench", "sql", "AGG_RANGE", "--agg", "max"])
            .unwrap();
        match cli.command {
            Commands::Sql { operation, agg, .. } => {
                assert_eq!(operation, Operation::AggRangeQuery);
                assert_eq!(agg, Some(AggregateFunction::MaxValue));
            }
            _ => panic!("expected sql command"),
        }
    }

    #[test]
    fn test_sql_rejects_unknown_aggregate() {
        let result =
            Cli::try_parse_from(["iotdb-rest-bench", "sql", "AGG_RANGE", "--agg", "median"]);
        assert!(result.is_err());
    }
}
