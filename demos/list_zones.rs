// An example of how the client can be used. Run with:
//
//     RC0_API_KEY=YOUR_API_KEY cargo run --example list_zones

use rcodezero_sdk::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(&std::env::var("RC0_API_KEY")?)?;

    let zones = client.zones().list_all().await?;

    println!("managed zones: {}", zones.len());
    for zone in &zones {
        println!(
            "{} ({}, serial {})",
            zone.domain,
            zone.zone_type,
            zone.serial.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
