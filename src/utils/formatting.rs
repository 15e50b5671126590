use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{cart::CartEntry, item::Item};

#[derive(Tabled)]
struct ItemTableRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Era")]
    era: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Condition")]
    condition: String,
    #[tabled(rename = "Authenticity")]
    authenticity: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: u32,
}

pub fn format_item_table<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a Item>,
{
    let rows: Vec<ItemTableRow> = items
        .into_iter()
        .map(|item| ItemTableRow {
            id: item.id.0,
            name: truncate(&item.name, 30),
            category: item.category().to_string(),
            era: item.era.clone(),
            region: item.region.clone(),
            condition: item.condition.clone(),
            authenticity: item.authenticity.clone(),
            price: format_price(item.price),
            stock: item.quantity,
        })
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

/// One `Item::summary` per line, in catalog order.
pub fn format_item_summaries<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .map(|item| format!("{:>3}  {}", style(item.id).cyan(), item.summary()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_item_detail(item: &Item) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("ID").bold(), style(item.id).cyan()));
    output.push_str(&format!("{}: {}\n", style("Name").bold(), style(&item.name).green()));
    output.push_str(&format!("{}: {}\n", style("Category").bold(), item.category()));
    if let Some(blade_length) = item.kind.blade_length_cm() {
        output.push_str(&format!("{}: {}cm\n", style("Blade Length").bold(), blade_length));
    }
    output.push_str(&format!("{}: {}\n", style("Era").bold(), item.era));
    output.push_str(&format!("{}: {}\n", style("Region").bold(), item.region));
    output.push_str(&format!("{}: {}\n", style("Condition").bold(), item.condition));
    output.push_str(&format!("{}: {}\n", style("Authenticity").bold(), item.authenticity));
    output.push_str(&format!("{}: {}\n", style("Price").bold(), style(format_price(item.price)).yellow()));

    let stock = if item.in_stock() {
        style(item.quantity.to_string()).green()
    } else {
        style("sold out".to_string()).red()
    };
    output.push_str(&format!("{}: {}\n", style("Quantity").bold(), stock));

    if !item.image_path.is_empty() {
        output.push_str(&format!("{}: {}\n", style("Image").bold(), style(&item.image_path).dim()));
    }

    output
}

/// Renders cart lines as `name (xN) - $subtotal`, one per line.
pub fn format_cart_lines(entries: &[CartEntry<'_>]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} (x{}) - {}",
                style(&entry.item.name).bold(),
                entry.quantity_in_cart,
                format_price(entry.subtotal())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_cart_total(total: f64) -> String {
    format!("Total: {}", format_price(total))
}

pub fn format_price(amount: f64) -> String {
    format!("${}", amount)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed::sample_items;

    #[test]
    fn test_format_price_drops_trailing_zeroes() {
        assert_eq!(format_price(500.0), "$500");
        assert_eq!(format_price(12.5), "$12.5");
        assert_eq!(format_cart_total(0.0), "Total: $0");
    }

    #[test]
    fn test_item_table_contains_every_item() {
        let items = sample_items();
        let table = format_item_table(&items);
        for item in &items {
            assert!(table.contains(&item.name));
        }
    }

    #[test]
    fn test_item_summaries_use_variant_format() {
        let items = sample_items();
        let listing = format_item_summaries(&items[..2]);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Antique Georgian Sword [Blade: 85cm] - $500"));
        assert!(lines[1].ends_with("Clay Pottery Vessel (Pottery, 5th Century BC) - $300"));
    }

    #[test]
    fn test_empty_table_is_blank() {
        let items: Vec<Item> = Vec::new();
        assert!(format_item_table(&items).is_empty());
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 10), "abcdefg...");
    }
}
