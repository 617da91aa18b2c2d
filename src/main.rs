use clap::Parser;
use flashdeck::core::config::{self, CliOverrides, FlashdeckConfig, ResolvedConfig};
use flashdeck::{source, tui};
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "flashdeck", about = "Terminal study-card viewer")]
struct Args {
    /// Cards document: a file path or an http(s) URL
    #[arg(short, long)]
    source: Option<String>,

    /// Title shown in the header
    #[arg(short, long)]
    title: Option<String>,

    /// Load and normalize the deck, print it as JSON, and exit
    #[arg(long)]
    print: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to flashdeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("flashdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("Falling back to default config: {}", e);
            eprintln!("flashdeck: {e} (using defaults)");
            FlashdeckConfig::default()
        }
    };
    let cli = CliOverrides {
        source: args.source.as_deref(),
        title: args.title.as_deref(),
    };
    let config = config::resolve(&file_config, &cli);

    info!("Flashdeck starting up with source: {}", config.source);

    if args.print {
        return print_deck(&config).await;
    }

    tui::run(config)
}

/// Prints the normalized deck as JSON.
async fn print_deck(config: &ResolvedConfig) -> std::io::Result<()> {
    let deck_source = source::from_location(&config.source, config.timeout);
    let json = source::export_json(deck_source.as_ref()).await?;
    println!("{json}");
    Ok(())
}
