use crate::configuration::constants::api::DEFAULT_API_URL;
use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum OutputFormat {
        Text, Json, Github,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Trigger a suite run and wait for it to complete
    #[structopt(name = "run")]
    Run(RunOpt),

    /// Check the status of an existing suite run
    #[structopt(name = "status")]
    Status(StatusOpt),
}

#[derive(StructOpt, Debug)]
pub struct RunOpt {
    /// Suite ID to run
    #[structopt(long = "suite-id")]
    pub suite_id: String,

    /// Base URL of the deployment under test
    #[structopt(long = "base-url")]
    pub base_url: String,

    /// Maximum time to wait for tests, e.g. 600, 90s, 15m
    #[structopt(long, default_value = "600", parse(try_from_str = crate::time::parse_duration))]
    pub timeout: Duration,

    /// Polling interval, e.g. 5, 5s, 500ms
    #[structopt(long = "poll-interval", default_value = "5s", parse(try_from_str = crate::time::parse_duration))]
    pub poll_interval: Duration,

    /// CI run identifier
    #[structopt(long = "ci-run-id")]
    pub ci_run_id: Option<String>,

    /// Branch name
    #[structopt(long)]
    pub branch: Option<String>,

    /// Commit SHA
    #[structopt(long)]
    pub commit: Option<String>,

    #[structopt(flatten)]
    pub api: ApiOpt,
}

#[derive(StructOpt, Debug)]
pub struct StatusOpt {
    /// Suite run ID to check
    #[structopt(long = "suite-run-id")]
    pub suite_run_id: String,

    #[structopt(flatten)]
    pub api: ApiOpt,
}

#[derive(StructOpt, Debug)]
pub struct ApiOpt {
    /// API key for authentication
    #[structopt(long = "api-key", env = "KEYSTONE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Keystone API base URL
    #[structopt(long = "api-url", env = "KEYSTONE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Output format
    #[structopt(case_insensitive = true, long, possible_values = &OutputFormat::variants(), default_value = "text")]
    pub output: OutputFormat,
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
