//! vaultsync: Vault configuration listing for sync plugins
//!
//! Enumerates a note-vault's hidden configuration tree the way a sync
//! plugin sees it:
//! - Breadth-first listing with bounded-concurrency fetching
//! - Reserved workspace entries and the plugin's own private data filtered
//! - Allow-list patterns resolved into traversable hidden roots

use std::path::PathBuf;
use std::sync::Arc;

use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand, builder::Styles};
use color_eyre::Result;
use tracing::info;

use vaultsync_core::{Entity, VaultConfig, allowlist_roots, enumerate_config, enumerate_roots};
use vaultsync_storage::LocalStorage;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::Red.on_default());

/// Fallback plugin id when neither the flag nor the config file names one
const DEFAULT_PLUGIN_ID: &str = "vaultsync";

#[derive(Parser)]
#[command(name = "vaultsync")]
#[command(version)]
#[command(styles = STYLES)]
#[command(about = "List a vault's hidden configuration tree for syncing")]
#[command(long_about = r#"
vaultsync enumerates the files a sync plugin would upload.

Examples:
  vaultsync config ./vault                      List the .obsidian tree
  vaultsync config ./vault --bookmarks-only     Find the bookmarks file
  vaultsync hidden ./vault -p '^\.trash/.*'     List allow-listed hidden roots
  vaultsync allowlist '^\.foo/bar.*'            Resolve patterns to roots
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the hidden configuration tree of a vault
    Config {
        /// Vault root directory
        vault: PathBuf,

        /// Configuration folder inside the vault
        #[arg(long, default_value = ".obsidian")]
        config_dir: String,

        /// Plugin id whose private data is filtered out
        #[arg(long)]
        plugin_id: Option<String>,

        /// Stop after two levels and keep only the bookmarks file
        #[arg(long)]
        bookmarks_only: bool,

        /// Output format (json, summary)
        #[arg(short, long, default_value = "summary")]
        format: String,
    },

    /// List everything under the hidden roots allowed by patterns
    Hidden {
        /// Vault root directory
        vault: PathBuf,

        /// Allow-list pattern (repeatable); defaults to .vaultsync.toml
        #[arg(short, long = "pattern")]
        patterns: Vec<String>,

        /// Output format (json, summary)
        #[arg(short, long, default_value = "summary")]
        format: String,
    },

    /// Resolve patterns into allow-listed hidden roots
    Allowlist {
        /// Allow-list patterns
        patterns: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Config {
            vault,
            config_dir,
            plugin_id,
            bookmarks_only,
            format,
        } => {
            let config = VaultConfig::load(&vault)?;
            let plugin_id = plugin_id
                .or(config.plugin_id)
                .unwrap_or_else(|| DEFAULT_PLUGIN_ID.to_string());

            let storage = Arc::new(LocalStorage::new(&vault));
            let entities =
                enumerate_config(&config_dir, &storage, &plugin_id, bookmarks_only).await?;
            print_entities(&entities, &format)?;
        }

        Commands::Hidden {
            vault,
            patterns,
            format,
        } => {
            let patterns = if patterns.is_empty() {
                VaultConfig::load(&vault)?.allowlist
            } else {
                patterns
            };

            let roots: Vec<String> = allowlist_roots(&patterns).into_iter().collect();
            info!("resolved {} hidden root(s)", roots.len());

            let storage = Arc::new(LocalStorage::new(&vault));
            let entities = enumerate_roots(&roots, &storage).await?;
            print_entities(&entities, &format)?;
        }

        Commands::Allowlist { patterns } => {
            let mut roots: Vec<String> = allowlist_roots(&patterns).into_iter().collect();
            roots.sort();
            for root in roots {
                println!("{root}");
            }
        }
    }

    Ok(())
}

fn print_entities(entities: &[Entity], format: &str) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(entities)?),
        _ => {
            for entity in entities {
                if entity.is_folder() {
                    println!("{:>12}  {}", "-", entity.key);
                } else {
                    println!("{:>12}  {}", entity.size, entity.key);
                }
            }
            info!("{} entries listed", entities.len());
        }
    }
    Ok(())
}
