//! # Lead Search SQL
//!
//! Renders the lead query a search command produces, optionally running it
//! against the database.
//!
//! ```text
//! search-sql email_sent 12
//! search-sql email_pending 4 --execute
//! search-sql page_source google --prefix mtc_ --json
//! ```

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use lead_search::config::SearchConfig;
use lead_search::constants::permissions;
use lead_search::logging::init_structured_logging;
use lead_search::repository::{Email, EmailRepository, PgEmailRepository};
use lead_search::search::{CanonicalLocalizer, GrantedPermissions, LeadSearchSubscriber};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "search-sql")]
#[command(about = "Show the lead query produced by a search command")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Command token, e.g. email_sent
    command: String,

    /// Command argument, e.g. an email id
    #[arg(default_value = "")]
    argument: String,

    /// Configuration file (default: config/lead-search.*)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Locale of the command token
    #[arg(short, long)]
    locale: Option<String>,

    /// Table prefix
    #[arg(short, long)]
    prefix: Option<String>,

    /// Run the query and print the matching lead ids
    #[arg(short, long)]
    execute: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Email lookup used when no database is configured; every id is unknown
struct OfflineEmails;

#[async_trait]
impl EmailRepository for OfflineEmails {
    async fn find_by_id(&self, _id: i64) -> lead_search::Result<Option<Email>> {
        Ok(None)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_structured_logging();
    let cli = Cli::parse();

    let mut config = SearchConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(prefix) = cli.prefix {
        config.table_prefix = prefix;
    }
    if config.database_url.is_none() {
        config.database_url = std::env::var("DATABASE_URL").ok();
    }

    let pool = match config.database_url.as_deref() {
        Some(url) => Some(
            PgPoolOptions::new()
                .max_connections(2)
                .connect_lazy(url)
                .context("creating database pool")?,
        ),
        None => None,
    };
    if cli.execute && pool.is_none() {
        anyhow::bail!("--execute needs DATABASE_URL or database_url in the configuration");
    }

    let emails: Arc<dyn EmailRepository> = match &pool {
        Some(pool) => Arc::new(PgEmailRepository::new(pool.clone(), &config)),
        None => Arc::new(OfflineEmails),
    };
    let subscriber = LeadSearchSubscriber::new(
        config,
        Arc::new(CanonicalLocalizer),
        Arc::new(GrantedPermissions::new([permissions::LEADS_VIEW_OTHER])),
        emails,
    );

    let mut query = subscriber.leads().create_query();
    let outcome = subscriber
        .apply_search_command(&mut query, &cli.command, &cli.argument)
        .await?;
    info!(command = %cli.command, handled = outcome.search_status, "Search command applied");

    let lead_ids = match (&pool, cli.execute) {
        (Some(pool), true) => Some(query.fetch_lead_ids(pool).await.context("running lead query")?),
        _ => None,
    };

    if cli.json {
        let parameters: serde_json::Map<String, serde_json::Value> =
            query.parameters().iter().cloned().collect();
        let report = json!({
            "sql": query.build_sql(),
            "count_sql": query.count_sql(),
            "parameters": parameters,
            "outcome": outcome,
            "lead_ids": lead_ids,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if outcome.is_untouched() {
        println!("'{}' is not a lead search command; free-text search applies", cli.command);
    }
    println!("{}", query.build_sql());
    for (name, value) in query.describe_parameters() {
        println!("  :{name} = {value}");
    }
    println!(
        "strict={} return_parameters={} search_status={}",
        outcome.strict, outcome.return_parameters, outcome.search_status
    );
    if let Some(ids) = lead_ids {
        println!("{} leads: {:?}", ids.len(), ids);
    }

    Ok(())
}
