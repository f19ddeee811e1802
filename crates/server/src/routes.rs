//! API route handlers

use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use anomaly::{assess_anomaly, AnomalyAssessment, AnomalyAssessor, ZScoreAssessor};
use data::{coerce_observations, DensityPoint};
use insight::{comparison_summary, weekly_heatmap, ComparisonSummary, HeatmapRow};
use series::{
    align_comparison, build_chart_view, bucket_labels, insert_gaps, resample, Bucket, ChartView,
    ComparisonOffset, DisplayBand, GapConfig, Observation, Period, TimeWindow,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type Rejection = (StatusCode, Json<ErrorResponse>);

fn unprocessable(message: impl Into<String>) -> Rejection {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse { error: message.into() }),
    )
}

fn parse_window(period: &str, end: DateTime<Utc>) -> Result<(Period, TimeWindow), Rejection> {
    let period = Period::parse(period).map_err(|e| unprocessable(e.to_string()))?;
    let window = period
        .window_ending_at(end)
        .map_err(|e| unprocessable(e.to_string()))?;
    Ok((period, window))
}

// ============================================================================
// Series
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ResampleRequest {
    pub points: Vec<DensityPoint>,
    /// Period keyword: "2h", "24h" or "7d".
    pub period: String,
    /// Window end (defaults shift to the newest point when omitted).
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct ResampleResponse {
    pub labels: Vec<String>,
    pub buckets: Vec<Option<Bucket>>,
}

fn window_end(end: Option<DateTime<Utc>>, observations: &[Observation]) -> Result<DateTime<Utc>, Rejection> {
    end.or_else(|| observations.iter().map(|o| o.timestamp).max())
        .ok_or_else(|| unprocessable("empty request: provide an explicit end or at least one point"))
}

pub async fn resample_series(
    Json(req): Json<ResampleRequest>,
) -> Result<Json<ResampleResponse>, Rejection> {
    let observations = coerce_observations(&req.points);
    let end = window_end(req.end, &observations)?;
    let (_, window) = parse_window(&req.period, end)?;

    Ok(Json(ResampleResponse {
        labels: bucket_labels(&window),
        buckets: resample(&observations, &window),
    }))
}

#[derive(Debug, Deserialize)]
pub struct OverlayRequest {
    pub points: Vec<DensityPoint>,
    pub comparison_points: Vec<DensityPoint>,
    /// Period keyword: "2h", "24h" or "7d".
    pub period: String,
    /// Offset keyword: "yesterday" or "last-week".
    pub offset: String,
    pub end: Option<DateTime<Utc>>,
    /// Optional rolling history for the normal band.
    pub band_history: Option<Vec<f64>>,
}

pub async fn overlay_series(
    Json(req): Json<OverlayRequest>,
) -> Result<Json<ChartView>, Rejection> {
    let observations = coerce_observations(&req.points);
    let comparison = coerce_observations(&req.comparison_points);

    let end = window_end(req.end, &observations)?;
    let (_, window) = parse_window(&req.period, end)?;
    let offset = ComparisonOffset::parse(&req.offset).map_err(|e| unprocessable(e.to_string()))?;

    let primary = resample(&observations, &window);
    let aligned = align_comparison(&comparison, &window, offset.duration());

    let band = req.band_history.as_deref().and_then(|history| {
        let latest = observations.last()?.density;
        let assessment = assess_anomaly(latest, history);
        let (lower, upper) = assessment.normal_band();
        Some(DisplayBand { lower, upper })
    });

    let view = build_chart_view(&window, &primary, Some(&aligned), band)
        .map_err(|e| unprocessable(e.to_string()))?;
    Ok(Json(view))
}

#[derive(Debug, Deserialize)]
pub struct GapsRequest {
    pub points: Vec<DensityPoint>,
    pub gap_threshold_seconds: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct GapsResponse {
    pub values: Vec<Option<f64>>,
}

pub async fn gaps_series(Json(req): Json<GapsRequest>) -> Json<GapsResponse> {
    let observations = coerce_observations(&req.points);
    let threshold = req
        .gap_threshold_seconds
        .unwrap_or(GapConfig::default().threshold_seconds);

    Json(GapsResponse {
        values: insert_gaps(&observations, threshold),
    })
}

// ============================================================================
// Anomaly
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub current: f64,
    pub history: Vec<f64>,
    /// Minimum history length; omit to accept any.
    pub min_history: Option<usize>,
}

pub async fn assess(Json(req): Json<AssessRequest>) -> Result<Json<AnomalyAssessment>, Rejection> {
    let assessment = match req.min_history {
        Some(min) => ZScoreAssessor::new(min)
            .assess(req.current, &req.history)
            .map_err(|e| unprocessable(e.to_string()))?,
        None => assess_anomaly(req.current, &req.history),
    };
    Ok(Json(assessment))
}

// ============================================================================
// Insight
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct HeatmapRequest {
    pub points: Vec<DensityPoint>,
}

pub async fn heatmap(Json(req): Json<HeatmapRequest>) -> Json<Vec<HeatmapRow>> {
    let observations = coerce_observations(&req.points);
    Json(weekly_heatmap(&observations))
}

#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    pub points: Vec<DensityPoint>,
    pub now: DateTime<Utc>,
}

pub async fn comparison(Json(req): Json<ComparisonRequest>) -> Json<ComparisonSummary> {
    let observations = coerce_observations(&req.points);
    Json(comparison_summary(&observations, req.now))
}
