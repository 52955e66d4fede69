// file: src/main.rs
// description: commandline entry point for querying a division corpus
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use geo_repository::utils::logging::{format_error, format_success, format_warning};
use geo_repository::{
    Config, CorpusInspector, Division, EntityKind, FileRepository, OperationTimer, Record,
    Validator,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "geo_repository")]
#[command(version)]
#[command(about = "Query a sharded geographic division corpus", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Overrides store.root from the configuration
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    #[arg(long, action = ArgAction::Set)]
    color: Option<bool>,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shard path a kind resolves to
    Resolve {
        kind: EntityKind,

        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Print every record of a kind's shard
    List {
        kind: EntityKind,

        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        #[arg(long)]
        fields: bool,
    },

    /// Look a division up by geonames id
    Find { kind: EntityKind, id: u64 },

    /// Print the translated record of a division
    Translate {
        kind: EntityKind,

        code: String,

        language: Option<String>,

        /// Owning country, required for cities
        #[arg(long)]
        country: Option<String>,
    },

    /// Check the corpus layout under the root
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::default_config()
    };

    if let Some(root) = cli.root {
        config.store.root = root;
    }
    if let Some(color) = cli.color {
        config.logging.color = color;
    }
    config.logging.verbose |= cli.verbose;

    geo_repository::utils::logging::init_logger(&config.logging);

    if !cli.config.exists() {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
    }
    info!("Using corpus root {}", config.store.root.display());

    let mut repository = config.repository();

    match cli.command {
        Commands::Resolve { kind, params } => cmd_resolve(&repository, kind, &params),
        Commands::List {
            kind,
            params,
            fields,
        } => cmd_list(&repository, kind, &params, fields),
        Commands::Find { kind, id } => cmd_find(&repository, kind, id),
        Commands::Translate {
            kind,
            code,
            language,
            country,
        } => {
            let language = language.unwrap_or_else(|| config.store.default_language.clone());
            cmd_translate(&mut repository, kind, code, &language, country)
        }
        Commands::Check => cmd_check(&config),
    }
}

fn cmd_resolve(repository: &FileRepository, kind: EntityKind, params: &[String]) -> Result<()> {
    let params = Validator::parse_params(params)?;
    let path = repository.resolve_path(kind, &params)?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_list(
    repository: &FileRepository,
    kind: EntityKind,
    params: &[String],
    fields: bool,
) -> Result<()> {
    let params = Validator::parse_params(params)?;
    let timer = OperationTimer::new(&format!("list {}", kind));

    let records = repository
        .get_data(kind, &params)
        .with_context(|| format!("Failed to load {} data", kind))?;

    timer.warn_if_slow(Duration::from_millis(20));
    timer.finish_with_count(records.len());

    if records.is_empty() {
        eprintln!("{}", format_warning("No records"));
    }

    if fields {
        let child = child_kind(kind);
        let maps: Vec<Map<String, Value>> = records
            .into_iter()
            .map(|record| Division::new(child, record).to_map())
            .collect();
        print_json(&maps)
    } else {
        print_json(&records)
    }
}

fn cmd_find(repository: &FileRepository, kind: EntityKind, id: u64) -> Result<()> {
    match repository.index_search(id, kind) {
        Ok(record) => print_json(&record),
        Err(e) if e.is_not_found() => {
            eprintln!("{}", format_error(&e.to_string()));
            Err(e.into())
        }
        Err(e) => Err(e).context("Index lookup failed"),
    }
}

fn cmd_translate(
    repository: &mut FileRepository,
    kind: EntityKind,
    code: String,
    language: &str,
    country: Option<String>,
) -> Result<()> {
    Validator::validate_language(language)?;

    let mut meta = Map::new();
    meta.insert("code".to_string(), Value::String(code.clone()));
    if let Some(country) = country {
        meta.insert("country".to_string(), Value::String(country));
    }
    let subject = Division::new(kind, Record::new(meta));

    match repository.get_translations(&subject, language)? {
        Some(record) => print_json(record),
        None => {
            eprintln!(
                "{}",
                format_warning(&format!("No '{}' translation for {} {}", language, kind, code))
            );
            Ok(())
        }
    }
}

fn cmd_check(config: &Config) -> Result<()> {
    let repository = config.repository();
    let report = CorpusInspector::new(&config.store.root, repository.layout()).inspect();

    print!("{}", report.format());

    if report.is_healthy() {
        println!("{}", format_success("Corpus looks complete"));
        Ok(())
    } else {
        anyhow::bail!("Corpus check reported {:?}", report.overall_status)
    }
}

/// Kind of the records a kind's shard holds.
fn child_kind(kind: EntityKind) -> EntityKind {
    match kind {
        EntityKind::Planet => EntityKind::Country,
        EntityKind::Country => EntityKind::State,
        EntityKind::State | EntityKind::City => EntityKind::City,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}
