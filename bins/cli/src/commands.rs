//! Subcommand handlers.
//!
//! Handlers convert every domain error into [`AppError`] before it crosses
//! into `anyhow`, so `main` can recover the exit code.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use brokerbook_client::BrokerbookClient;
use brokerbook_core::directory::{DirectoryEntry, search};
use brokerbook_core::fiscal::resolve_default;
use brokerbook_core::ledger::{LedgerError, TransactionDraft};
use brokerbook_shared::types::{BrokerId, FinancialYearId, TransactionNumber};
use brokerbook_shared::{AppConfig, AppError};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use tracing::{debug, info};

use crate::report;

/// Brokerbook subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print row totals and form totals for a draft file.
    Totals(TotalsArgs),
    /// Load a stored transaction and print it with totals.
    Fetch(FetchArgs),
    /// Validate a draft file and create or update the transaction.
    Submit(SubmitArgs),
    /// List financial years, marking the default.
    Years,
    /// List sellers.
    Sellers(DirectoryArgs),
    /// List buyers.
    Buyers(DirectoryArgs),
    /// List products.
    Products(DirectoryArgs),
}

/// Arguments for `totals`.
#[derive(Args, Debug)]
pub struct TotalsArgs {
    /// Draft JSON file.
    pub draft: PathBuf,
    /// Print totals as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `fetch`.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Transaction number.
    #[arg(long)]
    pub number: String,
    /// Broker key. Defaults to `defaults.broker_id`.
    #[arg(long)]
    pub broker: Option<String>,
    /// Financial year key. Defaults to `defaults.financial_year_id`, then to
    /// the year the backend reports as current.
    #[arg(long)]
    pub financial_year: Option<String>,
    /// Write the fetched draft as JSON to this file.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments for `submit`.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Draft JSON file.
    pub draft: PathBuf,
    /// Replace the stored transaction named by the draft's `transactionNumber`.
    #[arg(long)]
    pub update: bool,
}

/// Arguments for `sellers`, `buyers` and `products`.
#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// Only show entries whose name or city contains this text.
    #[arg(long)]
    pub search: Option<String>,
}

/// Runs one subcommand.
///
/// `config` is only required by the commands that call the backend, so
/// `totals` still works when no configuration can be loaded.
pub async fn dispatch(command: Command, config: Result<AppConfig, AppError>) -> anyhow::Result<()> {
    match command {
        Command::Totals(args) => run_totals(&args),
        Command::Fetch(args) => run_fetch(&args, &config?).await,
        Command::Submit(args) => run_submit(&args, &config?).await,
        Command::Years => run_years(&config?).await,
        Command::Sellers(args) => run_sellers(&args, &config?).await,
        Command::Buyers(args) => run_buyers(&args, &config?).await,
        Command::Products(args) => run_products(&args, &config?).await,
    }
}

/// Computes totals for a draft file. Works offline.
pub fn run_totals(args: &TotalsArgs) -> anyhow::Result<()> {
    print!("{}", totals_output(args)?);
    Ok(())
}

fn totals_output(args: &TotalsArgs) -> anyhow::Result<String> {
    let draft = load_draft(&args.draft)?;
    if args.json {
        let json = serde_json::to_string_pretty(&draft.form.totals())?;
        Ok(format!("{json}\n"))
    } else {
        Ok(report::draft(&draft))
    }
}

/// Loads a stored transaction and prints it with totals.
pub async fn run_fetch(args: &FetchArgs, config: &AppConfig) -> anyhow::Result<()> {
    let client = BrokerbookClient::new(&config.api).map_err(AppError::from)?;

    let number = TransactionNumber::new(&args.number)
        .map_err(|e| AppError::Validation(format!("transaction number: {e}")))?;
    let broker = pick_id::<BrokerId>("broker", args.broker.as_deref(), config.defaults.broker_id.as_deref())?
        .ok_or_else(|| AppError::Validation("no broker given: pass --broker or set defaults.broker_id".into()))?;
    let financial_year = match pick_id::<FinancialYearId>(
        "financial year",
        args.financial_year.as_deref(),
        config.defaults.financial_year_id.as_deref(),
    )? {
        Some(id) => id,
        None => default_year_id(&client, today()).await?,
    };

    debug!(%number, %broker, %financial_year, "fetching transaction");
    let draft = client
        .ledger()
        .get_transaction(&number, &broker, &financial_year)
        .await
        .map_err(AppError::from)?;

    print!("{}", report::draft(&draft));
    if let Some(path) = &args.save {
        let json = serde_json::to_string_pretty(&draft)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "draft saved");
    }
    Ok(())
}

/// Validates a draft file, then creates or updates the transaction.
pub async fn run_submit(args: &SubmitArgs, config: &AppConfig) -> anyhow::Result<()> {
    let draft = load_draft(&args.draft)?;
    let payload = draft
        .to_payload()
        .map_err(|e| AppError::from(LedgerError::from(e)))?;
    let client = BrokerbookClient::new(&config.api).map_err(AppError::from)?;

    let saved = if args.update {
        let number = draft
            .transaction_number
            .as_ref()
            .ok_or_else(|| AppError::from(LedgerError::MissingTransactionNumber))?;
        client.ledger().update(number, &payload).await
    } else {
        client.ledger().create(&payload).await
    }
    .map_err(AppError::from)?;

    let number = saved
        .transaction_number
        .as_ref()
        .or(draft.transaction_number.as_ref().filter(|_| args.update));
    match (number, saved.message.as_deref()) {
        (Some(number), Some(message)) => println!("{message} (transaction {number})"),
        (Some(number), None) => println!("Saved transaction {number}"),
        (None, Some(message)) => println!("{message}"),
        (None, None) => println!("Saved"),
    }
    println!("Brokerage: {}", payload.brokerage);
    Ok(())
}

/// Lists financial years, marking the default.
pub async fn run_years(config: &AppConfig) -> anyhow::Result<()> {
    let client = BrokerbookClient::new(&config.api).map_err(AppError::from)?;
    let years = client.financial_years().list().await.map_err(AppError::from)?;
    if years.is_empty() {
        println!("No financial years");
        return Ok(());
    }
    let default = resolve_default(&years, today());
    print!("{}", report::years(&years, default));
    Ok(())
}

/// Lists sellers, optionally filtered.
pub async fn run_sellers(args: &DirectoryArgs, config: &AppConfig) -> anyhow::Result<()> {
    let client = BrokerbookClient::new(&config.api).map_err(AppError::from)?;
    let entries = client.directory().sellers().await.map_err(AppError::from)?;
    print!("{}", listing(&entries, args));
    Ok(())
}

/// Lists buyers, optionally filtered.
pub async fn run_buyers(args: &DirectoryArgs, config: &AppConfig) -> anyhow::Result<()> {
    let client = BrokerbookClient::new(&config.api).map_err(AppError::from)?;
    let entries = client.directory().buyers().await.map_err(AppError::from)?;
    print!("{}", listing(&entries, args));
    Ok(())
}

/// Lists products, optionally filtered.
pub async fn run_products(args: &DirectoryArgs, config: &AppConfig) -> anyhow::Result<()> {
    let client = BrokerbookClient::new(&config.api).map_err(AppError::from)?;
    let entries = client.directory().products().await.map_err(AppError::from)?;
    print!("{}", listing(&entries, args));
    Ok(())
}

fn listing<I: Display>(entries: &[DirectoryEntry<I>], args: &DirectoryArgs) -> String {
    let matched = search(entries, args.search.as_deref().unwrap_or_default());
    if matched.is_empty() {
        return "No matching entries\n".to_string();
    }
    report::directory(&matched)
}

fn load_draft(path: &Path) -> Result<TransactionDraft, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::NotFound(format!("{}: {e}", path.display())))?;
    parse_draft(&text).map_err(|e| AppError::Validation(format!("{}: {e}", path.display())))
}

fn parse_draft(text: &str) -> Result<TransactionDraft, serde_json::Error> {
    serde_json::from_str(text)
}

/// Command-line value wins over the configured default. Blank values are
/// rejected rather than silently ignored.
fn pick_id<I>(what: &str, arg: Option<&str>, configured: Option<&str>) -> Result<Option<I>, AppError>
where
    I: std::str::FromStr<Err = brokerbook_shared::types::BlankIdError>,
{
    arg.or(configured)
        .map(|raw| raw.parse().map_err(|e| AppError::Validation(format!("{what}: {e}"))))
        .transpose()
}

async fn default_year_id(client: &BrokerbookClient, today: NaiveDate) -> Result<FinancialYearId, AppError> {
    let year = client
        .financial_years()
        .default_year(today)
        .await?
        .ok_or_else(|| AppError::NotFound("backend has no financial years".into()))?;
    info!(financial_year = %year.id, name = %year.name, "using default financial year");
    Ok(year.id)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
