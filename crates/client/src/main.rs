//! Interactive register.
//!
//! Reads one command per line from stdin. Lookups, adds and checkouts report
//! their outcome on stdout; failures show up in the log on stderr.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tilldesk_client::commands::{Command, CommandError, HELP};
use tilldesk_client::config::{API_URL_ENV, DEFAULT_CURRENCY_SUFFIX};
use tilldesk_client::{ClientConfig, HttpProductSource, Register, StdioNotifier, view};
use tilldesk_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "tilldesk", about = "Point-of-sale register backed by a product lookup API")]
struct Args {
    /// Base URL of the product API.
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,
    /// Text appended to every price.
    #[arg(long, default_value = DEFAULT_CURRENCY_SUFFIX)]
    currency_suffix: String,
    /// Log output format (pretty or json).
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tilldesk_observability::init(args.log_format);

    let config = ClientConfig::from_env()
        .with_api_url(args.api_url)
        .with_currency_suffix(args.currency_suffix);

    match config.api_url.as_deref() {
        Some(url) => tracing::info!(api_url = url, "register started"),
        None => tracing::warn!("register started without an API base URL; lookups will fail"),
    }

    let register = Register::new(Arc::new(HttpProductSource::from_config(&config)));
    run(&register, &config).await
}

async fn run(register: &Register, config: &ClientConfig) -> Result<()> {
    let suffix = config.currency_suffix.as_str();
    let stdin = std::io::stdin();
    println!("{HELP}");

    loop {
        print!("> ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::SetCode(code) => register.set_code(code).await,
            Command::Read => show_lookup(register, suffix).await,
            Command::Scan(code) => {
                register.set_code(code).await;
                show_lookup(register, suffix).await;
            }
            Command::Add => match register.confirm_add().await {
                Some(product) => println!("Added {}", product.name()),
                None => println!("No product to add"),
            },
            Command::Buy => {
                register.checkout(&StdioNotifier).await;
            }
            Command::List => {
                let state = register.snapshot().await;
                println!("{}", view::render_list(state.purchases(), suffix));
            }
            Command::Show => {
                let state = register.snapshot().await;
                println!("{}", view::render_state(&state, suffix));
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}

async fn show_lookup(register: &Register, suffix: &str) {
    match register.read_code().await {
        Some(product) => println!("{}", view::product_card(&product, suffix)),
        None => println!("(no product)"),
    }
}
