//! Prometheus metrics for screening runs and the HTTP surface

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub screenings_total: IntCounter,
    pub stocks_scored_total: IntCounter,
    pub scoring_failures_total: IntCounter,
    pub analyses_total: IntCounter,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let screenings_total =
            IntCounter::new("screenings_total", "Screening runs completed")?;
        let stocks_scored_total =
            IntCounter::new("stocks_scored_total", "Stocks scored across all screening runs")?;
        let scoring_failures_total = IntCounter::new(
            "scoring_failures_total",
            "Stocks whose scoring failed and were assigned a zero score",
        )?;
        let analyses_total = IntCounter::new("analyses_total", "Single-stock analyses produced")?;
        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests handled")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;

        registry.register(Box::new(screenings_total.clone()))?;
        registry.register(Box::new(stocks_scored_total.clone()))?;
        registry.register(Box::new(scoring_failures_total.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;

        Ok(Self {
            registry,
            screenings_total,
            stocks_scored_total,
            scoring_failures_total,
            analyses_total,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
