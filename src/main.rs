//! import-spots - bulk load surf spots from a CSV file
//!
//! Reads every row, validates the whole file, then writes all spots in one
//! transaction. Ctrl-C or the configured timeout rolls the run back.

#![allow(missing_docs)]

use anyhow::{Context, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use surf_spots::config::Config;
use surf_spots::core::import::{
    CsvEntrySource, ImportControl, ImportOptions, ValidationMode, import_spots,
};
use surf_spots::storage::Database;
use surf_spots::utils::format_duration;
use surf_spots::utils::logging::init_logging;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Bulk import surf spots into the spot directory
#[derive(Debug, Parser)]
#[command(
    name = "import-spots",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")")
)]
struct Cli {
    /// CSV file with the columns name, latitude, longitude, locality, country_code
    path: PathBuf,

    /// YAML configuration file; without it configuration comes from the environment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database URL (sqlite: or postgres://)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Rows per INSERT statement
    #[arg(long)]
    batch_size: Option<usize>,

    /// Abort and roll back after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Report every invalid row instead of stopping at the first one
    #[arg(long)]
    collect_all: bool,
}

impl Cli {
    /// File or environment, then flags; validated once everything is applied
    async fn load_config(&self) -> surf_spots::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path).await?,
            None => Config::from_env()?,
        };

        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.import.batch_size = batch_size;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.import.timeout_secs = Some(timeout_secs);
        }
        if self.collect_all {
            config.import.validation = ValidationMode::CollectAll;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match cli.load_config().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();

    let db = Database::new(&config.database)
        .await
        .context("connecting to the database")?;
    db.migrate().await.context("running migrations")?;

    let delimiter = config
        .import
        .delimiter_byte()
        .ok_or_else(|| anyhow!("delimiter {:?} is not ASCII", config.import.delimiter))?;
    let source = CsvEntrySource::new(cli.path.clone()).with_delimiter(delimiter);
    let writer = db.bulk_writer(config.import.batch_size);
    let options = ImportOptions {
        validation: config.import.validation,
    };

    let cancel = CancellationToken::new();
    let mut control = ImportControl::new()
        .with_cancellation(cancel.clone())
        .on_batch(|batch, written| info!("Inserted rows {} ({} so far)", batch, written));
    if let Some(timeout) = config.import.timeout() {
        control = control.with_timeout(timeout);
    }
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, rolling back");
            cancel.cancel();
        }
    });

    info!(
        "Importing {} (batch size {}, {:?})",
        cli.path.display(),
        config.import.batch_size,
        config.import.validation
    );
    let result = import_spots(&source, &writer, &options, &control).await;
    ctrl_c.abort();

    let count = match result {
        Ok(count) => count,
        Err(e) if e.is_nothing_to_import() => {
            warn!("{} contains no spots", cli.path.display());
            0
        }
        Err(e) => return Err(e).context(format!("importing {}", cli.path.display())),
    };

    println!(
        "{} spot(s) imported in {}",
        count,
        format_duration(started.elapsed())
    );

    db.close().await?;
    Ok(())
}
