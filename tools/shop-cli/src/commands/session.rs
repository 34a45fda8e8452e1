//! Cart session replay.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use serde::Serialize;
use shop_commerce::prelude::*;
use shop_observability::{EventRecorder, LogLevel, Recording, StructuredLogger};

use super::SessionArgs;
use crate::context::Context;
use crate::script::{ScriptAction, SessionScript};

/// Shown for an empty cart.
const EMPTY_CART: &str = "Tu carrito está vacío";

#[derive(Serialize)]
struct SessionReport<'a> {
    session_id: &'a SessionId,
    cart: &'a CartState,
    item_count: u64,
    total: Money,
    checkouts: &'a [CheckoutSummary],
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Recording>,
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let script = SessionScript::load(&ctx.resolve_path(&args.script))?;
    let catalog = ctx.catalog()?;

    let session_id = SessionId::generate();
    let logger = session_logger(&session_id, ctx);
    let recorder = Arc::new(EventRecorder::new(session_id.clone()));
    let mut cart = CartStore::new(catalog.currency())
        .with_observer(Arc::new(TracingObserver))
        .with_observer(Arc::new(logger.clone()))
        .with_observer(recorder.clone());

    tracing::debug!(
        session = %logger.session_id(),
        actions = script.actions.len(),
        "replaying session script"
    );
    logger.info("session started");

    let mut checkouts = Vec::new();
    for (index, action) in script.actions.iter().enumerate() {
        let checkout = apply(action, &catalog, &mut cart, ctx)
            .with_context(|| format!("Action {} ({}) failed", index + 1, action.name()))?;
        checkouts.extend(checkout);
    }

    logger
        .info_builder("session finished")
        .field_u64("item_count", cart.item_count())
        .field("total", cart.total().display())
        .emit();

    let recording = recorder.recording();
    if let Some(path) = &args.record {
        let path = ctx.resolve_path(path);
        let json = recording.to_json()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write recording: {}", path.display()))?;
        ctx.output
            .debug(&format!("Recorded {} event(s) to {}", recording.events.len(), path.display()));
    }
    let events = args.trace_events.then_some(recording);

    if ctx.output.is_json() {
        ctx.output.json(&SessionReport {
            session_id: &session_id,
            cart: cart.state(),
            item_count: cart.item_count(),
            total: cart.total(),
            checkouts: &checkouts,
            events,
        });
        return Ok(());
    }

    for summary in &checkouts {
        print_checkout(summary, ctx);
    }
    print_cart(&cart, ctx);
    if let Some(recording) = &events {
        print_events(recording, ctx);
    }

    Ok(())
}

fn session_logger(session_id: &SessionId, ctx: &Context) -> StructuredLogger {
    let mut level = ctx.config.logging.level;
    if ctx.output.is_verbose() {
        level = level.min(LogLevel::Info);
    }

    StructuredLogger::new(session_id.clone())
        .with_format(ctx.config.logging.format)
        .with_min_level(level)
}

/// Dispatch one action. Only `checkout` produces a summary.
fn apply(
    action: &ScriptAction,
    catalog: &Catalog,
    cart: &mut CartStore,
    ctx: &Context,
) -> Result<Option<CheckoutSummary>> {
    match action {
        ScriptAction::Add {
            product,
            size,
            color,
        } => {
            let product = catalog.require(product)?;
            let size = size
                .or_else(|| product.default_size())
                .with_context(|| format!("{} lists no sizes; give one", product.name))?;
            let color = match color {
                Some(color) => color.clone(),
                None => product
                    .default_color()
                    .map(str::to_string)
                    .with_context(|| format!("{} lists no colors; give one", product.name))?,
            };

            if !product.offers(size, &color) {
                ctx.output.warn(&format!(
                    "{} is not listed in size {} / {}",
                    product.name, size, color
                ));
            }

            cart.add_item(product, size, color.as_str());
            ctx.output.success(&format!(
                "Producto agregado: {} (Talla {}, {})",
                product.name, size, color
            ));
        }
        ScriptAction::Remove {
            product,
            size,
            color,
        } => {
            let key = LineItemKey::new(product.clone(), *size, color.as_str());
            if !cart.remove_item(&key) {
                ctx.output.debug(&format!("No line {}; nothing removed", key));
            }
        }
        ScriptAction::Update {
            product,
            size,
            color,
            quantity,
        } => {
            let key = LineItemKey::new(product.clone(), *size, color.as_str());
            if !cart.update_quantity(&key, *quantity) {
                if cart.get_item(&key).is_some() {
                    ctx.output
                        .warn(&format!("Quantity {} is out of range for {}", quantity, key));
                } else {
                    ctx.output.debug(&format!("No line {}; nothing updated", key));
                }
            }
        }
        ScriptAction::Clear => cart.clear_cart(),
        ScriptAction::Checkout => {
            if cart.is_empty() {
                ctx.output.warn(EMPTY_CART);
            }
            return Ok(Some(cart.checkout()));
        }
    }

    Ok(None)
}

fn print_cart(cart: &CartStore, ctx: &Context) {
    ctx.output.header("Carrito de Compras");

    if cart.is_empty() {
        ctx.output.info(EMPTY_CART);
        return;
    }

    for item in cart.items() {
        ctx.output.list_item(&format!(
            "{} ({}) x{}  {}",
            item.product.name,
            item.product.brand,
            item.quantity,
            item.line_total()
        ));
        ctx.output
            .kv("Talla", &format!("{} | Color: {}", item.size, item.color));
    }

    ctx.output.kv("Artículos", &cart.item_count().to_string());
    ctx.output.kv("Total", &cart.total().display());
}

fn print_checkout(summary: &CheckoutSummary, ctx: &Context) {
    ctx.output.header("Proceder al Pago");

    for line in &summary.lines {
        ctx.output.list_item(&format!(
            "{} x{}  {}",
            line.product_name, line.quantity, line.subtotal
        ));
    }

    let savings = summary.savings();
    if !savings.is_zero() {
        ctx.output.kv("Ahorro", &savings.display());
    }
    ctx.output.kv("Total", &summary.total.display());
}

fn print_events(recording: &Recording, ctx: &Context) {
    ctx.output.header("Eventos del carrito");

    for recorded in &recording.events {
        let key = recorded
            .event
            .key()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        ctx.output.list_item(&format!(
            "#{} {} {} items={} total={}",
            recorded.seq,
            recorded.event.name(),
            key,
            recorded.item_count,
            recorded.total
        ));
    }
}
