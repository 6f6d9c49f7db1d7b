mod app;
mod config;
mod constants;
mod input;
mod mail;
mod ui;

use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::{Config, ServerConfig};
use crate::mail::HttpEmailService;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,courier=debug"));

    // The terminal belongs to the UI, so prefer a log file in the config directory
    let log_file = Config::config_dir()
        .ok()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("courier.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"courier - Terminal client for a webmail backend

Usage: courier [--server URL] [command]

Commands:
    (none)      Start the mail client
    setup       Configure the backend server
    help        Show this help message

Options:
    --server URL    Use this backend for this run only

Configuration file: ~/.config/courier/config.toml
"#
    );
}

fn prompt(label: &str) -> Result<String> {
    use std::io::{self, Write};

    print!("{}", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn run_setup() -> Result<()> {
    println!("Courier Setup");
    println!("=============\n");

    let config_path = Config::config_path()?;
    let mut config = if config_path.exists() {
        let answer = prompt("Configuration already exists. Overwrite server? [y/N]: ")?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Setup cancelled.");
            return Ok(());
        }
        Config::load()?
    } else {
        Config::default()
    };

    let default_url = ServerConfig::default().base_url;
    config.server.base_url = loop {
        let url = prompt(&format!("Server URL [{}]: ", default_url))?;
        let url = if url.is_empty() {
            default_url.clone()
        } else {
            url
        };

        let candidate = ServerConfig {
            base_url: url.clone(),
            ..config.server.clone()
        };
        match candidate.validate() {
            Ok(()) => break url,
            Err(e) => println!("{:#}", e),
        }
    };

    config.ensure_dirs()?;
    config.save()?;
    println!("Configuration saved to {}", config_path.display());
    println!("\nSetup complete! Run 'courier' to start.");
    Ok(())
}

/// Command line after pulling out `--server URL`
struct Args {
    server: Option<String>,
    command: Option<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut server = None;
    let mut command = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--server" {
            server = Some(args.next().context("--server needs a URL")?);
        } else if let Some(url) = arg.strip_prefix("--server=") {
            server = Some(url.to_string());
        } else if command.is_none() {
            command = Some(arg);
        } else {
            anyhow::bail!("Unexpected argument: {}", arg);
        }
    }

    Ok(Args { server, command })
}

async fn run_client(server: Option<String>) -> Result<()> {
    setup_logging();

    let config = Config::load()?.with_server(server)?;
    config.ensure_dirs()?;

    crate::ui::theme::init_theme(config.ui.theme);

    tracing::info!("Starting courier against {}", config.server.base_url);
    let service = HttpEmailService::new(&config.server)?;

    let mut app = App::new(&config, Arc::new(service));
    app.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    match args.command.as_deref() {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("setup") => run_setup(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => run_client(args.server).await,
    }
}
