//! # Storefront Demo
//!
//! Runs each storefront operation once against the in-process adapters.
//!
//! ## Usage
//! ```text
//! storefront-demo [path/to/storefront.toml]
//!
//! RUST_LOG=debug storefront-demo     # show every collaborator call
//! STOREFRONT_OPEN=09:00 storefront-demo
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use storefront_core::coupons::{calculate_discount, coupons};
use storefront_core::{Money, OrderId, ShippingQuote};
use storefront_workflow::adapters::{RateTable, ShippingTable};
use storefront_workflow::{Collaborators, Storefront, StorefrontConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = StorefrontConfig::load_or_default(config_path);
    info!(
        store = %config.store.name,
        open = %config.hours.open,
        close = %config.hours.close,
        "Configuration loaded"
    );

    let collaborators = Collaborators {
        rates: Arc::new(RateTable::new().with_rate("AUD", 1.52).with_rate("EUR", 0.92)),
        shipping: Arc::new(
            ShippingTable::new()
                .with_quote("Berlin", ShippingQuote::new(Money::from_dollars(20), 2))
                .with_quote("Sydney", ShippingQuote::new(Money::from_cents(4550), 9)),
        ),
        ..Collaborators::reference()
    };
    let storefront = Storefront::new(&config, collaborators);

    let price = Money::from_dollars(10);
    let converted = storefront.convert(price, "AUD").await?;
    info!(%price, %converted, "Converted to AUD");

    match storefront.convert(price, "XYZ").await {
        Ok(converted) => info!(%converted, "Converted to XYZ"),
        Err(e) => warn!(
            error = %e,
            retryable = e.as_collaborator().is_some_and(|c| c.is_retryable()),
            "Conversion failed"
        ),
    }

    for destination in ["Berlin", "Atlantis"] {
        let message = storefront.shipping_info(destination).await?;
        info!(destination, %message, "Shipping");
    }

    let content = storefront.render_page().await;
    info!(%content, "Rendered home page");

    for amount in [Money::from_dollars(100), Money::zero()] {
        let order_id = OrderId::generate();
        let result = storefront.submit_order(&order_id, amount).await?;
        info!(%order_id, %amount, result = %serde_json::to_string(&result)?, "Order submitted");
    }

    for email in ["1234@domain.com", "a"] {
        let registered = storefront.sign_up(email).await?;
        info!(email, registered, "Sign-up");
    }

    storefront.login("1234@domain.com").await?;

    info!(
        open = storefront.is_open(),
        discount = storefront.current_discount(),
        "Store status"
    );

    for coupon in coupons() {
        let discounted = price.apply_percentage_discount(coupon.discount_bps);
        info!(code = %coupon.code, discount = coupon.discount(), %discounted, "Coupon");
    }

    for code in ["SAVE10", "SAVE20", "BOGUS"] {
        let discounted = calculate_discount(price, code)?;
        info!(code, %discounted, "Discount code");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: INFO, DEBUG for storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
