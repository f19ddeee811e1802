//! Example: Overlay today's density against yesterday and assess anomalies
//!
//! Run with:
//! ```bash
//! cargo run --example overlay_demo
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use crowdpulse_ts::anomaly::{assess_anomaly, AnomalySeverity};
use crowdpulse_ts::insight::{
    comparison_summary, stage_alert_timeline, CongestionLevel, TrendSample, DEFAULT_ALERT_LIMIT,
};
use crowdpulse_ts::series::{
    align_comparison, build_chart_view, resample, ComparisonOffset, Observation, Period,
};

/// Synthetic lunch-rush signal: calm morning, spike around 12:30.
fn density_at(minute_of_window: i64, scale: f64) -> f64 {
    let base = 0.25 + 0.05 * ((minute_of_window as f64) / 17.0).sin();
    let rush = if (25..70).contains(&minute_of_window) {
        0.4 * (1.0 - ((minute_of_window - 47) as f64 / 22.0).powi(2)).max(0.0)
    } else {
        0.0
    };
    ((base + rush) * scale).clamp(0.0, 1.0)
}

fn sampled_day(end: DateTime<Utc>, scale: f64) -> Vec<Observation> {
    // One sample every 90 seconds, with a sensor outage mid-window.
    (0..80)
        .filter(|i| !(30..36).contains(i))
        .map(|i| {
            let ts = end - Duration::seconds(90 * (80 - i));
            let minute = (ts - (end - Duration::hours(2))).num_minutes();
            Observation::new(ts, density_at(minute, scale))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Density Overlay Demo ===\n");

    let end = Utc.with_ymd_and_hms(2026, 3, 14, 13, 0, 0).unwrap();
    let period = Period::parse("2h")?;
    let window = period.window_ending_at(end)?;

    let today = sampled_day(end, 1.0);
    let yesterday_raw = sampled_day(end - Duration::hours(24), 0.8);

    println!(
        "Window {} .. {} at {} buckets ({})",
        window.start().format("%H:%M"),
        window.end().format("%H:%M"),
        window.bucket_count(),
        period
    );
    println!("Samples: {} today, {} yesterday\n", today.len(), yesterday_raw.len());

    // Overlay both periods on one grid.
    let offset = ComparisonOffset::Yesterday;
    let primary = resample(&today, &window);
    let comparison = align_comparison(&yesterday_raw, &window, offset.duration());
    let view = build_chart_view(&window, &primary, Some(&comparison), None)?;

    println!("{:<8} {:>8} {:>11}", "Time", "Today", "Yesterday");
    for (i, label) in view.labels.iter().enumerate().step_by(3) {
        let cell = |v: &Option<f64>| match v {
            Some(v) => format!("{:.2}", v),
            None => "--".to_string(),
        };
        let comparison_cell = view
            .comparison
            .as_ref()
            .map(|c| cell(&c[i]))
            .unwrap_or_default();
        println!("{:<8} {:>8} {:>11}", label, cell(&view.primary[i]), comparison_cell);
    }

    // Assess the latest reading against the morning's history.
    let history: Vec<f64> = today.iter().take(25).map(|o| o.density).collect();
    let latest = today.last().map(|o| o.density).unwrap_or_default();
    let assessment = assess_anomaly(latest, &history);

    println!("\n=== Anomaly Assessment ===\n");
    println!("current={:.2} mean={:.2} z={:+.2}", assessment.current, assessment.mean, assessment.z_score);
    println!(
        "severity: {:?} (level: {})",
        assessment.severity,
        CongestionLevel::resolve(Some(latest)).label()
    );
    if assessment.severity == AnomalySeverity::Normal {
        println!("within the usual range for this window");
    }

    // Compare against the same clock time on previous days.
    let mut all = today.clone();
    all.extend(&yesterday_raw);
    let summary = comparison_summary(&all, end);
    println!("\n=== Comparison Summary ===\n");
    match (summary.current_density, summary.yesterday_density, summary.yesterday_change) {
        (Some(now), Some(then), Some(change)) => {
            println!("now {:.2} vs yesterday {:.2} ({:+.2} pts)", now, then, change)
        }
        _ => println!("not enough overlap for a comparison"),
    }

    // Recent stage alerts from the trailing samples.
    let samples_desc: Vec<TrendSample> = today
        .iter()
        .rev()
        .take(10)
        .map(|o| TrendSample {
            timestamp: o.timestamp,
            density: o.density,
            velocity: Some(0.0004),
            acceleration: None,
        })
        .collect();
    let alerts = stage_alert_timeline(&samples_desc, DEFAULT_ALERT_LIMIT);

    println!("\n=== Stage Alerts ===\n");
    if alerts.is_empty() {
        println!("no stage alerts in the trailing window");
    }
    for alert in &alerts {
        println!(
            "[{}] {} {} - {}",
            alert.code,
            alert.timestamp.format("%H:%M"),
            alert.title,
            alert.message
        );
    }

    Ok(())
}
