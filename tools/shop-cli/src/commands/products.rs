//! Product listing command.

use anyhow::{Context as _, Result};
use serde::Serialize;
use shop_commerce::catalog::{Category, Product, ALL_CATEGORIES_LABEL};
use shop_commerce::search::FilterSpec;
use shop_commerce::Currency;
use std::sync::Arc;

use super::ProductsArgs;
use crate::config::price_range;
use crate::context::Context;
use crate::output::{join_display, price_line, product_badges};

/// Shown when no product passes the filters.
const NO_RESULTS: &str = "No se encontraron productos con los filtros seleccionados.";

#[derive(Serialize)]
struct Listing<'a> {
    count: usize,
    filters: &'a FilterSpec,
    products: &'a [Arc<Product>],
}

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let spec = build_spec(&args, ctx, catalog.currency())?;

    ctx.output.debug(&format!(
        "Brands: {}",
        if spec.brands.is_empty() {
            "all".to_string()
        } else {
            spec.brands.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    ));
    ctx.output.debug(&format!(
        "Category: {}",
        spec.category.map_or(ALL_CATEGORIES_LABEL, |c| c.label())
    ));

    let products = catalog.filter(&spec);

    if ctx.output.is_json() {
        ctx.output.json(&Listing {
            count: products.len(),
            filters: &spec,
            products: &products,
        });
        return Ok(());
    }

    ctx.output.header(&format!("Productos ({})", products.len()));

    if products.is_empty() {
        ctx.output.info(NO_RESULTS);
        return Ok(());
    }

    for product in &products {
        print_product(product, ctx);
    }

    Ok(())
}

fn build_spec(args: &ProductsArgs, ctx: &Context, currency: Currency) -> Result<FilterSpec> {
    let mut spec = FilterSpec::new(currency);

    spec.brands.extend(args.brand.iter().cloned());

    if let Some(category) = &args.category {
        let category: Category = category
            .parse()
            .with_context(|| format!("Invalid --category: {}", category))?;
        spec.set_category(Some(category));
    }

    let min = args.min.unwrap_or(ctx.config.filters.min_price);
    let max = args.max.unwrap_or(ctx.config.filters.max_price);
    spec.price_range = price_range(min, max, currency)?;

    if args.on_sale {
        spec.toggle_on_sale();
    }

    Ok(spec)
}

fn print_product(product: &Product, ctx: &Context) {
    let badges = product_badges(product);
    let title = if badges.is_empty() {
        format!("{} ({})", product.name, product.brand)
    } else {
        format!("{} ({}) {}", product.name, product.brand, badges)
    };

    ctx.output.list_item(&title);
    ctx.output.kv("Precio", &price_line(product));
    ctx.output.kv("Categoría", product.category.label());

    if ctx.output.is_verbose() {
        if !product.description.is_empty() {
            ctx.output.kv("Descripción", &product.description);
        }
        ctx.output.kv("Tallas", &join_display(&product.sizes));
        ctx.output.kv("Colores", &product.colors.join(", "));
        if !product.features.is_empty() {
            ctx.output.kv("Características", &product.features.join(", "));
        }
    }
}
