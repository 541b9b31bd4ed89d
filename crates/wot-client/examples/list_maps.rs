//! List all World of Tanks maps for a realm
//!
//! Run with: WOT_APPLICATION_ID=<key> cargo run --example list_maps -- eu

use anyhow::Context;
use wot_client::{ClientOption, WotClient};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("wot_client=debug")
        .init();

    let application_key =
        std::env::var("WOT_APPLICATION_ID").context("WOT_APPLICATION_ID is not set")?;
    let realm = std::env::args().nth(1).unwrap_or_else(|| "na".to_string());

    let client = WotClient::new([
        ClientOption::application_key(application_key),
        ClientOption::realm(realm),
    ])?;

    println!("Querying {} ({})", client.realm(), client.base_url());

    let arenas = client.list_maps().context("listing maps")?;

    let mut records: Vec<_> = arenas.into_iter().map(|(_, record)| record).collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));

    println!("Found {} maps:\n", records.len());
    for record in records {
        println!(
            "{:<24} {:<10} {}",
            record.name, record.camouflage_type, record.arena_id
        );
    }

    Ok(())
}
