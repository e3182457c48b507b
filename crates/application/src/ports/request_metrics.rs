/// HTTP-level counters and the text exposition read by the scraper.
pub trait RequestMetricsPort: Send + Sync {
    fn record_http_request(&self, method: &str, path: &str, status: u16);

    /// Current counters and gauges in the Prometheus text format.
    fn render(&self) -> String;
}
