use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use streamgrid::config::{self, Config};
use streamgrid::data_provider::StreamDataProvider;
use streamgrid::layout_constants::{HELIX_MAX_PAGE_SIZE, STREAM_FETCH_OFFSET};
use streamgrid::twitch::TwitchClient;
use streamgrid::{commands, tui};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "streamgrid")]
#[command(
    about = "Browse the top live Twitch streams for a game",
    long_about = "Browse the top live Twitch streams for a game\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Game to browse (defaults to the configured game)
    #[arg(short, long, global = true)]
    game: Option<String>,

    /// Serve fixture data instead of calling Twitch
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    /// Number of live streams the mock client reports (0 shows the error view)
    #[cfg(feature = "development")]
    #[arg(long, global = true, requires = "mock")]
    mock_streams: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top live streams for a game
    Streams {
        /// Number of streams to show
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=HELIX_MAX_PAGE_SIZE as i64))]
        limit: Option<u32>,

        /// Number of top streams to skip
        #[arg(short, long, default_value_t = STREAM_FETCH_OFFSET)]
        offset: u32,
    },
    /// Display current configuration
    Config,
}

fn create_client(cli: &Cli, config: &Config) -> Arc<dyn StreamDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        use streamgrid::dev::mock_client::MockClient;
        return match cli.mock_streams {
            Some(count) => Arc::new(MockClient::with_stream_count(count)),
            None => Arc::new(MockClient::new()),
        };
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    match TwitchClient::new(&config.twitch) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create Twitch client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            if e.is_configuration_error() {
                if let Some(path) = config::get_config_path() {
                    eprintln!("Set your Twitch credentials in {}", path.display());
                }
            }
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("game: {}", cfg.game);
    println!("fetch_limit: {}", cfg.fetch_limit);
    println!();
    println!("[twitch]");
    println!("client_id: {}", if cfg.twitch.client_id.is_empty() { "(not set)" } else { "(set)" });
    println!("access_token: {}", if cfg.twitch.access_token.is_some() { "(set)" } else { "(not set)" });
    println!("client_secret: {}", if cfg.twitch.client_secret.is_some() { "(set)" } else { "(not set)" });
    println!("api_base_url: {}", cfg.twitch.api_base_url);
    println!("timeout_secs: {}", cfg.twitch.timeout_secs);
    println!();
    println!("[player]");
    println!("command: {}", cfg.player.command);
    println!("args: {:?}", cfg.player.args);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("title_bar_bg: {:?}", cfg.display.title_bar_bg);
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Some(game) = &cli.game {
        config.game = game.clone();
    }

    match &cli.command {
        // Config doesn't need a client
        Some(Commands::Config) => handle_config_command(&config),
        Some(Commands::Streams { limit, offset }) => {
            let client = create_client(&cli, &config);
            let limit = limit.unwrap_or(config.fetch_limit);
            if let Err(e) =
                commands::streams::run(client.as_ref(), &config.game, *offset, limit, &config.display).await
            {
                eprintln!("Error: {:#}", e);
                tracing::error!("Command failed: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            let client = create_client(&cli, &config);
            if let Err(e) = tui::run(client, config).await {
                eprintln!("Error running TUI: {}", e);
                std::process::exit(1);
            }
        }
    }
}
