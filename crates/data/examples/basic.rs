//! Basic example demonstrating the ingest boundary
//!
//! Run with: cargo run --example basic -p crowdpulse-data

use data::{parse_history, HistoryClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== crowdpulse-data Basic Example ===\n");

    // A raw density-history payload as the analytics backend delivers it,
    // including one corrupt row and one out-of-range reading.
    let json = r#"[
        {"timestamp":"2026-03-14T09:00:00","density":0.41,"personCount":12},
        {"timestamp":"2026-03-14T09:00:30","density":0.44,"personCount":14},
        {"timestamp":"broken-row","density":0.50},
        {"timestamp":"2026-03-14T09:01:00","density":7.5},
        {"timestamp":"2026-03-14T09:01:30","density":0.47,"personCount":16}
    ]"#;

    let observations = parse_history(json)?;
    println!("Parsed {} usable observations:", observations.len());
    for obs in &observations {
        println!("  {}  density={:.2}", obs.timestamp.format("%H:%M:%S"), obs.density);
    }

    // The client is wired against the backend's endpoint layout; with the
    // `fetch` feature enabled it fetches live data.
    let _client = HistoryClient::new("http://localhost:8080");
    println!("\nClient configured for http://localhost:8080");

    Ok(())
}
