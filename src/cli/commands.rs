use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::{error, info, warn};

use crate::{
    cli::args::*,
    inventory::{export_catalog_json, load_or_seed},
    models::item::ItemId,
    services::{CartError, ShopError, ShopSession},
    utils::{
        formatting::{
            format_cart_lines, format_cart_total, format_item_detail, format_item_summaries,
            format_item_table,
        },
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

const SHOP_ACTIONS: [&str; 7] = [
    "Browse catalog",
    "Search by name",
    "Add to cart",
    "Remove from cart",
    "View cart",
    "Clear cart",
    "Quit",
];

pub struct CliApp {
    session: ShopSession,
}

impl CliApp {
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = load_or_seed(config.catalog_path.as_deref())
            .context("Failed to load catalog")?;

        Ok(Self {
            session: ShopSession::new(catalog),
        })
    }

    pub fn from_session(session: ShopSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ShopSession {
        &self.session
    }

    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::List => self.handle_list(),
            Commands::Search { query } => self.handle_search(&query),
            Commands::Show { id, plain } => self.handle_show(ItemId(id), plain),
            Commands::Quote { additions } => self.handle_quote(&additions),
            Commands::Shop => self.handle_shop(),
            Commands::Export { output } => self.handle_export(output),
        }
    }

    fn handle_list(&self) -> Result<()> {
        self.print_items(self.session.list_items().iter());
        Ok(())
    }

    fn handle_search(&self, query: &str) -> Result<()> {
        let results = self.session.search(query);
        if results.is_empty() {
            println!("{} No items found.", INFO);
        } else {
            println!("{} {}", INFO, style(format!("Found {} items", results.len())).bold());
            println!("{}", format_item_summaries(results));
        }
        Ok(())
    }

    fn handle_show(&self, id: ItemId, plain: bool) -> Result<()> {
        match self.session.item(id) {
            Some(item) if plain => println!("{}", item.details()),
            Some(item) => {
                println!("{} {}", INFO, style("Item Details").bold().cyan());
                println!("{}", format_item_detail(item));
            }
            None => {
                println!("{} Item {} not found", WARNING, style(id).yellow());
            }
        }
        Ok(())
    }

    fn handle_quote(&mut self, additions: &[CartAddition]) -> Result<()> {
        for addition in additions {
            self.add_to_cart(addition.id, addition.quantity);
        }
        println!("{}", render_cart(&self.session));
        Ok(())
    }

    fn handle_export(&self, output: Option<PathBuf>) -> Result<()> {
        let json = export_catalog_json(self.session.catalog())
            .context("Failed to serialize catalog")?;

        match output {
            Some(path) => {
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{} Catalog exported to {}", CHECKMARK, style(path.display()).green());
                info!("Catalog exported to {}", path.display());
            }
            None => println!("{}", json),
        }
        Ok(())
    }

    fn handle_shop(&mut self) -> Result<()> {
        println!("{} {}", CART, style("Antiquity Shop").bold().cyan());
        let theme = ColorfulTheme::default();

        loop {
            let selection = Select::with_theme(&theme)
                .with_prompt("What would you like to do?")
                .items(&SHOP_ACTIONS)
                .default(0)
                .interact()?;

            match selection {
                0 => self.handle_list()?,
                1 => {
                    let query: String = Input::with_theme(&theme)
                        .with_prompt("Search")
                        .allow_empty(true)
                        .interact_text()?;
                    self.handle_search(&query)?;
                }
                2 => {
                    let id: u32 = Input::with_theme(&theme)
                        .with_prompt("Item ID")
                        .interact_text()?;
                    let quantity: u32 = Input::with_theme(&theme)
                        .with_prompt("Quantity")
                        .default(1)
                        .interact_text()?;
                    self.add_to_cart(ItemId(id), quantity);
                    println!("{}", render_cart(&self.session));
                }
                3 => self.prompt_remove(&theme)?,
                4 => println!("{}", render_cart(&self.session)),
                5 => {
                    let confirm = Confirm::with_theme(&theme)
                        .with_prompt("Empty the cart?")
                        .default(false)
                        .interact()?;
                    if confirm {
                        self.session.clear_cart();
                        println!("{} Cart cleared", CHECKMARK);
                    }
                }
                _ => break,
            }
        }

        info!("Shop session ended with cart total {}", self.session.cart_total());
        Ok(())
    }

    fn prompt_remove(&mut self, theme: &ColorfulTheme) -> Result<()> {
        let lines: Vec<(ItemId, String)> = self
            .session
            .cart_items()
            .iter()
            .map(|entry| {
                (
                    entry.item.id,
                    format!("{} (x{})", entry.item.summary(), entry.quantity_in_cart),
                )
            })
            .collect();

        if lines.is_empty() {
            println!("{} Your cart is empty.", INFO);
            return Ok(());
        }

        let labels: Vec<&str> = lines.iter().map(|(_, label)| label.as_str()).collect();
        let selection = Select::with_theme(theme)
            .with_prompt("Remove which item?")
            .items(&labels)
            .default(0)
            .interact()?;

        let (id, label) = &lines[selection];
        if self.session.remove_from_cart(*id) {
            println!("{} Removed {}", CHECKMARK, style(label).green());
        }
        println!("{}", render_cart(&self.session));
        Ok(())
    }

    /// Reports failures to the user; a rejected addition is not a command failure.
    fn add_to_cart(&mut self, id: ItemId, quantity: u32) {
        match self.session.add_to_cart(id, quantity) {
            Ok(()) => {
                println!("{} Added {} x item {} to cart", CHECKMARK, quantity, style(id).cyan());
            }
            Err(ShopError::Cart(e @ CartError::StockExceeded { .. })) => {
                println!("{} {}", WARNING, style(&e).yellow());
            }
            Err(ShopError::ItemNotFound(id)) => {
                println!("{} Item {} not found", CROSS, style(id).red());
                warn!("Attempted to add unknown item {} to cart", id);
            }
            Err(e) => {
                println!("{} Failed to add to cart: {}", CROSS, style(&e).red());
                error!("Failed to add item {} to cart: {}", id, e);
            }
        }
    }

    fn print_items<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a crate::models::item::Item>,
    {
        let table = format_item_table(items);
        if table.is_empty() {
            println!("{} No items found.", INFO);
        } else {
            println!("{}", table);
        }
    }
}

/// Cart view: one line per entry followed by the total.
pub fn render_cart(session: &ShopSession) -> String {
    let entries = session.cart_items();
    let body = if entries.is_empty() {
        "Your cart is empty.".to_string()
    } else {
        format_cart_lines(&entries)
    };
    format!("{}\n{}", body, style(format_cart_total(session.cart_total())).bold())
}
