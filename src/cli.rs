use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use count_on_me::{Listener, NotifyingEngine, evaluate_expression, parse_keys};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Count On Me - Build and evaluate arithmetic expressions key by key
#[derive(Parser, Debug)]
#[command(name = "count-on-me")]
#[command(
    about = "Type digits, a decimal point and + - x ÷ like on a keypad, then evaluate with ="
)]
#[command(version)]
pub struct CliArgs {
    /// Keys to press, e.g. `40 + 6 x 9.3 ÷ 2` or `12+3=`
    #[arg(allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Read key lines from standard input (default when no keys are given)
    #[arg(short, long)]
    pub interactive: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub keys: Option<String>,
    pub interactive: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args)
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let keys = if args.keys.is_empty() {
        None
    } else {
        let joined = args.keys.join(" ");
        parse_keys(&joined).context("Invalid key sequence")?;
        Some(joined)
    };

    Ok(CliConfig {
        interactive: args.interactive || keys.is_none(),
        keys,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Prints the screen to stdout and alerts to stderr
struct ConsoleListener;

impl Listener for ConsoleListener {
    fn on_display_update(&mut self, current: &str) {
        println!("{}", current);
    }

    fn on_error(&mut self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

fn run_interactive() -> Result<()> {
    let mut calculator = NotifyingEngine::new(ConsoleListener);
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from standard input")?;
        let line = line.trim();
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        match parse_keys(line) {
            Ok(keys) => keys.into_iter().for_each(|key| calculator.press(key)),
            Err(e) => warn!("Ignoring line '{}': {}", line, e),
        }
    }

    info!("Session ended with '{}'", calculator.engine().display());
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    if let Some(keys) = &config.keys {
        info!("Evaluating key sequence '{}'", keys);
        let display = evaluate_expression(keys).context("Could not evaluate the key sequence")?;
        println!("{}", display);
    }

    if config.interactive {
        run_interactive()?;
    }

    Ok(())
}
