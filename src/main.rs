//! TimeForged Dashboard CLI
//!
//! Terminal front end for the TimeForged reports:
//! - Show service status and the logged-in user
//! - Summaries, sessions and hourly activity over a date range
//! - Store or clear the API key

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use timeforged_dash::config::{generate_default_config, Config, LoggingConfig};
use timeforged_dash::credentials::{CredentialStore, FileStore, MemoryStore};
use timeforged_dash::report::{self, RangePreset, ReportRange};
use timeforged_dash::{logging, ApiClient, ClientError, ReportQuery};

#[derive(Parser)]
#[command(name = "tfdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TimeForged dashboard in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL override
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// API key override (not stored; also read from TF_API_KEY)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Time range: today, yesterday, week, month
    #[arg(long, default_value = "week")]
    range: RangePreset,

    /// Custom start (ISO 8601); overrides --range
    #[arg(long)]
    from: Option<String>,

    /// Custom end (ISO 8601); overrides --range
    #[arg(long)]
    to: Option<String>,

    /// Only count activity in this project
    #[arg(long)]
    project: Option<String>,

    /// Only count activity in this language
    #[arg(long)]
    language: Option<String>,
}

impl RangeArgs {
    fn report_range(&self) -> ReportRange {
        ReportRange::from_args(self.range, self.from.clone(), self.to.clone())
    }

    fn report_query(&self, now: DateTime<Utc>) -> ReportQuery {
        ReportQuery {
            range: self.report_range().resolve(now),
            project: self.project.clone(),
            language: self.language.clone(),
        }
    }

    /// Range label, with any filters appended
    fn label(&self) -> String {
        let mut label = self.report_range().label().to_string();
        if let Some(project) = &self.project {
            label.push_str(&format!(" · project {}", project));
        }
        if let Some(language) = &self.language {
            label.push_str(&format!(" · language {}", language));
        }
        label
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show service status
    Status,

    /// Show today's summary
    Today,

    /// Summary report for a range
    Report(RangeArgs),

    /// List tracked sessions
    Sessions(RangeArgs),

    /// Activity by hour of day
    Activity(RangeArgs),

    /// Show the user the API key belongs to
    Whoami,

    /// Store an API key
    Login {
        /// The API key
        key: String,
    },

    /// Remove the stored API key
    Logout,

    /// Report whether an API key is stored
    AuthStatus,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let (config, problems) = Config::load_default();

    logging::init(&cli_logging(cli.verbose, &config.logging), "error");
    for problem in &problems {
        eprintln!("warning: {}", problem);
    }

    if let Err(e) = run(cli, config).await {
        eprintln!("error: {}", e);
        if let Some(client_error) = e.downcast_ref::<ClientError>() {
            if client_error.is_connect() {
                eprintln!("Is the TimeForged daemon running?");
            } else if client_error.is_unauthorized() {
                eprintln!("Set an API key with: tfdash login <key>");
            }
        }
        std::process::exit(1);
    }
}

/// Logging for the CLI: `-v` forces debug; otherwise `TF_LOG_LEVEL` or
/// `logging.level`, else errors only (failures are already printed).
fn cli_logging(verbose: bool, config: &LoggingConfig) -> LoggingConfig {
    let mut logging = config.clone();
    if verbose {
        logging.level = Some("debug".to_string());
    }
    logging
}

/// Pick the key source: explicit override, then TF_API_KEY, then the stored key
fn credential_store(key: Option<String>) -> Arc<dyn CredentialStore> {
    match key.or_else(|| std::env::var("TF_API_KEY").ok()) {
        Some(key) => Arc::new(MemoryStore::with_key(key)),
        None => Arc::new(FileStore::open_default()),
    }
}

fn print_output<T: Serialize>(
    format: OutputFormat,
    value: &T,
    render: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => print!("{}", render(value)),
    }
    Ok(())
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let server_url = cli.server.unwrap_or(config.client.server_url);
    let client = ApiClient::new(server_url, credential_store(cli.key));
    let format = cli.format;

    match cli.command {
        Commands::Status => match client.status().await {
            Ok(status) => print_output(format, &status, report::render_status)?,
            Err(e) => {
                tracing::debug!("Status failed ({}), trying health endpoint", e);
                let health = client.health().await.map_err(|_| e)?;
                print_output(format, &health, report::render_health)?;
            }
        },

        Commands::Today => {
            let query = ReportQuery::new(RangePreset::Today.resolve(Utc::now()));
            show_summary(&client, format, &query, RangePreset::Today.label()).await?;
        }

        Commands::Report(args) => {
            show_summary(&client, format, &args.report_query(Utc::now()), &args.label()).await?;
        }

        Commands::Sessions(args) => {
            let sessions = client.sessions_for(&args.report_query(Utc::now())).await?;
            print_output(format, &sessions, |s| report::render_sessions(s))?;
        }

        Commands::Activity(args) => {
            let activity = client.activity_for(&args.report_query(Utc::now())).await?;
            print_output(format, &activity, |a| report::render_activity(a))?;
        }

        Commands::Whoami => {
            let user = client.me().await?;
            print_output(format, &user, report::render_user)?;
        }

        Commands::Login { key } => {
            let store = FileStore::open_default();
            store.set(key.trim())?;
            println!("API key saved to {:?}", store.path());
            println!("Run `tfdash whoami` to verify it.");
        }

        Commands::Logout => {
            let store = FileStore::open_default();
            store.clear()?;
            println!("API key removed");
        }

        Commands::AuthStatus => {
            let store = FileStore::open_default();
            if store.has() {
                println!("API key stored in {:?}", store.path());
            } else {
                println!("No API key stored");
                println!("Set one with: tfdash login <key>");
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("creating {:?}", parent))?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn show_summary(
    client: &ApiClient,
    format: OutputFormat,
    query: &ReportQuery,
    label: &str,
) -> anyhow::Result<()> {
    let summary = client.summary_for(query).await?;
    print_output(format, &summary, |s| report::render_summary(s, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_range() {
        let cli = Cli::try_parse_from(["tfdash", "report", "--range", "month"]).unwrap();
        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.report_range(), ReportRange::Preset(RangePreset::Month));
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_custom_bounds_override_range() {
        let cli = Cli::try_parse_from([
            "tfdash", "sessions", "--from", "2024-01-01", "--to", "2024-01-31", "--format", "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Sessions(args) => assert_eq!(
                args.report_range(),
                ReportRange::Custom {
                    from: Some("2024-01-01".to_string()),
                    to: Some("2024-01-31".to_string()),
                }
            ),
            _ => panic!("expected sessions"),
        }
    }

    #[test]
    fn test_project_filter() {
        use chrono::TimeZone;

        let cli = Cli::try_parse_from([
            "tfdash", "report", "--range", "today", "--project", "timeforged",
        ])
        .unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.label(), "Today · project timeforged");
                assert_eq!(
                    args.report_query(now).query_string(),
                    "from=2024-03-15T00%3A00%3A00Z&to=2024-03-15T23%3A59%3A59Z&project=timeforged"
                );
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_unknown_range_rejected() {
        assert!(Cli::try_parse_from(["tfdash", "report", "--range", "fortnight"]).is_err());
    }

    #[test]
    fn test_log_level_follows_config_unless_verbose() {
        let configured = LoggingConfig {
            level: Some("warn".to_string()),
            format: "pretty".to_string(),
        };
        assert_eq!(cli_logging(false, &configured).level_or("error"), "warn");
        assert_eq!(cli_logging(true, &configured).level_or("error"), "debug");
        assert_eq!(cli_logging(false, &LoggingConfig::default()).level_or("error"), "error");
    }

    #[test]
    fn test_key_override_uses_memory_store() {
        let store = credential_store(Some("override".to_string()));
        assert_eq!(store.get().unwrap().as_deref(), Some("override"));
    }
}
