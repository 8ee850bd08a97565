use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::str::FromStr;

mod extract;
mod fetch;
mod init;
mod output;
mod parse;
mod queries;
mod report;
mod telemetry;

#[derive(Parser)]
#[command(name = "court", about = "eCourts case lookup CLI")]
struct Cli {
    /// SQLite DSN for the query audit log
    #[arg(global = true, long)]
    db: Option<String>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Init(init::InitCmd),
    Fetch(fetch::FetchCmd),
    Parse(parse::ParseCmd),
    Queries(queries::QueriesCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and COURT_LOG_FORMAT
    telemetry::config::init_tracing();

    let dsn = cli
        .db
        .or_else(|| env::var("COURT_DB").ok())
        .unwrap_or_else(|| "sqlite://case_queries.db".to_string());

    let opts = SqliteConnectOptions::from_str(&dsn)?.create_if_missing(true);
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    match cli.command {
        Commands::Init(args) => init::run(&pool, args).await?,
        Commands::Fetch(args) => fetch::run(&pool, args).await?,
        Commands::Parse(args) => parse::run(args).await?,
        Commands::Queries(args) => queries::run(&pool, args).await?,
    }

    Ok(())
}
