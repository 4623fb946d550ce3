//! Property search demo
//!
//! Connects with `AppConfig::load()` (or the development defaults), runs a few
//! listing searches and prints the rows as JSON.
//!
//! ```text
//! RUST_LOG=lightbnb=debug,bnb_store=debug cargo run --example property_search --features debug-logging -- Vancouver
//! ```

use anyhow::Context;
use lightbnb::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("{}; using development defaults", e);
        AppConfig::default()
    });

    let bnb = LightBnb::new(config.database)
        .await
        .context("connecting to the LightBnB database")?;
    bnb.health_check().await?;
    let store = bnb.store();

    let city = std::env::args().nth(1).unwrap_or_else(|| "Vancouver".to_string());

    println!("🏠 Listings in {city} rated 4+");
    let filters = PropertyFilters::new().city(city.as_str()).minimum_rating(4.0);
    let listings = store.get_all_properties(&filters, Some(5)).await?;
    println!("{}", serde_json::to_string_pretty(&listings)?);

    println!("\n💸 Anywhere between $50 and $150 a night");
    let filters = PropertyFilters::new()
        .minimum_price_per_night(50.0)
        .maximum_price_per_night(150.0);
    for listing in store.get_all_properties(&filters, None).await? {
        println!(
            "  {:<40} ${:>8.2}  ★ {}",
            listing.property.title,
            listing.property.price_per_night(),
            listing
                .average_rating
                .map(|rating| format!("{rating:.2}"))
                .unwrap_or_else(|| "-".to_string())
        );
    }

    println!("\n📅 Reservations of guest 1");
    for reservation in store.get_all_reservations(1, None).await? {
        println!(
            "  {} → {} ({} nights) at {}",
            reservation.start_date,
            reservation.end_date,
            reservation.nights(),
            reservation.property.title
        );
    }

    match store.get_user_with_email("nobody@example.com").await? {
        Some(user) => println!("\nfound {}", user.name),
        None => println!("\nno user with that email"),
    }

    bnb.close().await;
    Ok(())
}
