use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::item::ItemId;

#[derive(Parser)]
#[command(name = "antiquity-shop")]
#[command(about = "Browse an antiquities catalog and build a purchase cart")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog JSON file (defaults to the built-in sample catalog)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every item in the catalog
    List,
    /// Search items by name (case-insensitive)
    Search {
        /// Search query; blank lists everything
        #[arg(default_value = "")]
        query: String,
    },
    /// Show detailed information about an item
    Show {
        /// Item ID
        id: u32,
        /// Print the unstyled detail block
        #[arg(long)]
        plain: bool,
    },
    /// Build a cart from the given additions and print its total
    Quote {
        /// Item to add, as ID or ID:QUANTITY (repeatable)
        #[arg(short, long = "add", value_name = "ID[:QTY]")]
        additions: Vec<CartAddition>,
    },
    /// Start an interactive shopping session
    Shop,
    /// Export the catalog as JSON
    Export {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// A single `ID[:QTY]` cart addition from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartAddition {
    pub id: ItemId,
    pub quantity: u32,
}

impl FromStr for CartAddition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => (id, Some(quantity)),
            None => (s, None),
        };

        let id = id
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid item id '{}'", id.trim()))?;

        let quantity = match quantity {
            Some(quantity) => quantity
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid quantity '{}'", quantity.trim()))?,
            None => 1,
        };

        Ok(CartAddition {
            id: ItemId(id),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addition_defaults_to_one() {
        let addition: CartAddition = "3".parse().unwrap();
        assert_eq!(addition, CartAddition { id: ItemId(3), quantity: 1 });
    }

    #[test]
    fn test_parse_addition_with_quantity() {
        let addition: CartAddition = "1:2".parse().unwrap();
        assert_eq!(addition, CartAddition { id: ItemId(1), quantity: 2 });
    }

    #[test]
    fn test_parse_addition_rejects_garbage() {
        assert!("sword".parse::<CartAddition>().is_err());
        assert!("1:many".parse::<CartAddition>().is_err());
        assert!("1:-2".parse::<CartAddition>().is_err());
    }

    #[test]
    fn test_show_args() {
        let args = Args::try_parse_from(["antiquity-shop", "show", "4", "--plain"]).unwrap();
        assert!(matches!(args.command, Commands::Show { id: 4, plain: true }));
    }

    #[test]
    fn test_quote_args() {
        let args = Args::try_parse_from(["antiquity-shop", "quote", "--add", "1", "-a", "3:4"]).unwrap();
        match args.command {
            Commands::Quote { additions } => {
                assert_eq!(additions.len(), 2);
                assert_eq!(additions[1], CartAddition { id: ItemId(3), quantity: 4 });
            }
            _ => panic!("expected quote command"),
        }
    }
}
