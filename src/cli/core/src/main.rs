/* src/cli/core/src/main.rs */

mod logging;
mod present;
mod search;
mod serve;
mod ui;
mod view;


use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "homepage", about = "Configuration-driven homepage renderer")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve page configurations and the page shell
  Serve {
    /// Site configuration file (defaults to CONFIG / CONFIG_FILE)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Listen address (defaults to LISTEN or 127.0.0.1:3000)
    #[arg(short, long)]
    listen: Option<String>,
    /// Built front-end directory (defaults to DIST_DIR)
    #[arg(short, long)]
    dist: Option<PathBuf>,
  },
  /// Load the configuration for a path and print its layout
  View {
    /// Page path, e.g. /home
    path: String,
    /// Configuration service base address
    #[arg(long, env = "HOMEPAGE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
    /// Print HTML instead of the terminal preview
    #[arg(long)]
    html: bool,
    /// Expand the error detail panel
    #[arg(long)]
    details: bool,
  },
  /// Resolve a search query against a page's search template
  Search {
    /// Page path, e.g. /home
    path: String,
    /// Query text
    query: String,
    /// Configuration service base address
    #[arg(long, env = "HOMEPAGE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
    /// Open in a new context (the secondary modifier)
    #[arg(short, long)]
    new_tab: bool,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  logging::init_logging();
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, listen, dist } => serve::run_serve(config, listen, dist).await,
    Command::View { path, api_base, html, details } => {
      view::run_view(&api_base, &path, html, details).await
    }
    Command::Search { path, query, api_base, new_tab } => {
      search::run_search(&api_base, &path, &query, new_tab).await
    }
  }
}
