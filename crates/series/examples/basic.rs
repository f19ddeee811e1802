//! Basic example demonstrating bucketed resampling
//!
//! Run with: cargo run --example basic -p crowdpulse-series

use chrono::{Duration, TimeZone, Utc};
use series::{align_comparison, bucket_labels, resample, ComparisonOffset, Observation, Period};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== crowdpulse-series Basic Example ===\n");

    let end = Utc.with_ymd_and_hms(2026, 3, 14, 14, 0, 0).unwrap();
    let window = Period::parse("2h")?.window_ending_at(end)?;
    println!(
        "Window: {} .. {} ({} buckets)\n",
        window.start(),
        window.end(),
        window.bucket_count()
    );

    // Irregular samples: one every ~4 minutes with a silent stretch.
    let today: Vec<Observation> = (0..20)
        .filter(|i| !(8..12).contains(i))
        .map(|i| {
            let ts = window.start() + Duration::minutes(4 + i * 6);
            Observation::new(ts, 0.3 + 0.02 * i as f64)
        })
        .collect();
    let yesterday: Vec<Observation> = today
        .iter()
        .map(|o| Observation::new(o.timestamp - Duration::hours(24), o.density * 0.8))
        .collect();

    let primary = resample(&today, &window);
    let offset = ComparisonOffset::Yesterday;
    let comparison = align_comparison(&yesterday, &window, offset.duration());
    let labels = bucket_labels(&window);

    println!("{:<8} {:>10} {:>12}", "Bucket", "Today", "Yesterday");
    for ((label, p), c) in labels.iter().zip(&primary).zip(&comparison) {
        let fmt = |b: &Option<series::Bucket>| match b {
            Some(b) => format!("{:.3}", b.average),
            None => "--".to_string(),
        };
        println!("{:<8} {:>10} {:>12}", label, fmt(p), fmt(c));
    }

    let populated = primary.iter().flatten().count();
    println!("\n{} of {} buckets populated", populated, primary.len());

    Ok(())
}
