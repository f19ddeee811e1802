//! Basic example demonstrating anomaly assessment
//!
//! Run with: cargo run --example basic -p crowdpulse-anomaly

use anomaly::{assess_anomaly, AnomalySeverity, Monitor, MonitoringStream, ZScoreAssessor};
use chrono::{Duration, TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== crowdpulse-anomaly Basic Example ===\n");

    // A calm afternoon of density samples around 0.42.
    let history: Vec<f64> = (0..40)
        .map(|i| 0.42 + 0.015 * ((i as f64) / 4.0).sin())
        .collect();

    println!("1. One-shot assessment");
    for current in [0.43, 0.55, 0.88] {
        let a = assess_anomaly(current, &history);
        println!(
            "   value={:.2} z={:+.2} severity={:?} band=[{:.3}, {:.3}]",
            a.current,
            a.z_score,
            a.severity,
            a.normal_band().0,
            a.normal_band().1
        );
    }

    println!("\n2. Streaming monitor");
    let start = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
    let mut monitor = Monitor::new(ZScoreAssessor::new(15), 60);

    // Flat five-level cycle, then a surge at the end.
    let mut stream: Vec<f64> = (0..40).map(|i| 0.41 + 0.005 * (i % 5) as f64).collect();
    stream.push(0.91);

    let mut alerts = 0;
    for (i, value) in stream.iter().enumerate() {
        let ts = start + Duration::seconds(30 * i as i64);
        if let Some(alert) = monitor.push(ts, *value)? {
            alerts += 1;
            println!("   ALERT {} {}", alert.timestamp.format("%H:%M:%S"), alert.message);
            assert_eq!(alert.severity, AnomalySeverity::Danger);
        }
    }
    println!("\n{} alert(s) raised over {} samples", alerts, stream.len());

    Ok(())
}
