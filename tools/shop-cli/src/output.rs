//! Output formatting for the CLI.

use console::style;
use shop_commerce::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Badges shown on a product card.
pub fn product_badges(product: &Product) -> String {
    let mut badges = Vec::new();
    if product.is_new {
        badges.push(style("Nuevo").green().bold().to_string());
    }
    if product.is_on_sale {
        badges.push(style("Oferta").red().bold().to_string());
    }
    badges.join(" ")
}

/// Price line for a product card, with the original price struck through.
pub fn price_line(product: &Product) -> String {
    let current = style(product.price.display()).bold().to_string();
    match (product.original_price, product.discount_percentage()) {
        (Some(original), Some(pct)) => format!(
            "{} {} {}",
            current,
            style(original.display()).dim().strikethrough(),
            style(format!("-{:.0}%", pct)).red()
        ),
        _ => current,
    }
}

/// Join displayable values with commas.
pub fn join_display<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::prelude::*;

    #[test]
    fn test_join_display() {
        let sizes = [ShoeSize::from_tenths(60), ShoeSize::from_tenths(65)];
        assert_eq!(join_display(&sizes), "6, 6.5");
        assert_eq!(join_display::<String>(&[]), "");
    }

    #[test]
    fn test_badges_and_price_line() {
        console::set_colors_enabled(false);
        let catalog = Catalog::builtin();

        let mercurial = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(product_badges(mercurial), "Nuevo Oferta");
        assert_eq!(price_line(mercurial), "$275.00 $300.00 -8%");

        let future = catalog.get(&ProductId::new("3")).unwrap();
        assert_eq!(product_badges(future), "");
        assert_eq!(price_line(future), "$220.00");
    }
}
