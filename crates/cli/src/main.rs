//! Polymart CLI - Command-line storefront.
//!
//! Each invocation is one page load: the saved cart is restored, at most one
//! user action is applied, and the cart panel is redrawn.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! polymart products
//!
//! # Add a product to the cart
//! polymart add 1
//!
//! # Adjust a cart line
//! polymart increase 1
//! polymart decrease 1
//! polymart remove 1
//!
//! # Show the cart
//! polymart cart
//! ```
//!
//! # Commands
//!
//! - `products` - List catalog products
//! - `cart` - Show the cart panel
//! - `add`, `increase`, `decrease`, `remove` - Edit the cart
//! - `checkout` - Not available without a backend

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use polymart_core::ProductId;
use polymart_storefront::config::{LogFormat, StorefrontConfig};
use polymart_storefront::{CartEvent, LineAction, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "polymart")]
#[command(author, version, about = "Polymart storefront CLI")]
struct Cli {
    /// Directory holding the saved cart (overrides `POLYMART_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON catalog file (overrides `POLYMART_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products,
    /// Show the cart
    Cart,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Add one unit to a cart line
    Increase {
        /// Product ID
        id: ProductId,
    },
    /// Take one unit off a cart line
    Decrease {
        /// Product ID
        id: ProductId,
    },
    /// Remove a cart line
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Proceed to checkout
    Checkout,
}

impl Commands {
    /// The cart event this command raises, if any.
    const fn event(&self) -> Option<CartEvent> {
        let (product_id, action) = match *self {
            Self::Products | Self::Cart => return None,
            Self::Checkout => return Some(CartEvent::Checkout),
            Self::Add { id } => return Some(CartEvent::AddToCart(id)),
            Self::Increase { id } => (id, LineAction::Increase),
            Self::Decrease { id } => (id, LineAction::Decrease),
            Self::Remove { id } => (id, LineAction::Remove),
        };
        Some(CartEvent::LineControl { product_id, action })
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = run(&cli.command, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Environment configuration with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<StorefrontConfig> {
    let config = StorefrontConfig::from_env()?;
    Ok(with_overrides(cli, config))
}

fn with_overrides(cli: &Cli, config: StorefrontConfig) -> StorefrontConfig {
    StorefrontConfig {
        data_dir: cli.data_dir.clone().unwrap_or(config.data_dir),
        catalog_path: cli.catalog.clone().or(config.catalog_path),
        ..config
    }
}

/// Initialize tracing with `EnvFilter`.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "polymart_storefront=info,polymart_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn run(command: &Commands, config: &StorefrontConfig) -> Result<()> {
    match command.event() {
        Some(event) => commands::cart::apply(config, event)?,
        None => match command {
            Commands::Products => commands::products::list(config)?,
            _ => commands::cart::show(config)?,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use polymart_storefront::StorefrontError;

    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_commands_map_to_events() {
        let id = ProductId::new(2);
        assert_eq!(Commands::Products.event(), None);
        assert_eq!(Commands::Cart.event(), None);
        assert_eq!(Commands::Add { id }.event(), Some(CartEvent::AddToCart(id)));
        assert_eq!(
            Commands::Decrease { id }.event(),
            Some(CartEvent::LineControl {
                product_id: id,
                action: LineAction::Decrease,
            })
        );
        assert_eq!(Commands::Checkout.event(), Some(CartEvent::Checkout));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["polymart", "--data-dir", "/tmp/carts", "cart"]);
        let config = with_overrides(&cli, StorefrontConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("/tmp/carts"));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.cart_key, "polymartCart");
    }

    #[test]
    fn test_missing_catalog_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            catalog_path: Some(dir.path().join("missing.json")),
            ..StorefrontConfig::default()
        };
        let err = run(&Commands::Products, &config).unwrap_err();
        assert!(matches!(err, StorefrontError::Catalog(_)));
    }

    #[test]
    fn test_checkout_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            data_dir: dir.path().to_path_buf(),
            ..StorefrontConfig::default()
        };
        let err = run(&Commands::Checkout, &config).unwrap_err();
        assert!(matches!(err, StorefrontError::Checkout(_)));
    }
}
