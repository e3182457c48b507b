use super::exposition::{write_counter, write_gauge, write_labeled_counter};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use zone_finder_application::ports::{LookupEvent, LookupMetricsPort, RequestMetricsPort};

/// Point-in-time copy of the lookup counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupCounters {
    pub dns_lookups: u64,
    pub dns_lookups_success: u64,
    pub dns_lookups_failure: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_evictions: u64,
    pub zone_lookups_success: u64,
    pub zone_lookups_failure: u64,
    pub cache_size: u64,
}

type RequestKey = (String, String, u16);

/// Process-wide counters, written by the lookup path and the HTTP layer.
#[derive(Default)]
pub struct ServiceMetrics {
    dns_lookups: AtomicU64,
    dns_lookups_success: AtomicU64,
    dns_lookups_failure: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    cache_evictions: AtomicU64,
    zone_lookups_success: AtomicU64,
    zone_lookups_failure: AtomicU64,
    cache_size: AtomicU64,
    http_requests: DashMap<RequestKey, AtomicU64, FxBuildHasher>,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> LookupCounters {
        LookupCounters {
            dns_lookups: self.dns_lookups.load(Ordering::Relaxed),
            dns_lookups_success: self.dns_lookups_success.load(Ordering::Relaxed),
            dns_lookups_failure: self.dns_lookups_failure.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            cache_evictions: self.cache_evictions.load(Ordering::Relaxed),
            zone_lookups_success: self.zone_lookups_success.load(Ordering::Relaxed),
            zone_lookups_failure: self.zone_lookups_failure.load(Ordering::Relaxed),
            cache_size: self.cache_size.load(Ordering::Relaxed),
        }
    }

    pub fn http_requests(&self, method: &str, path: &str, status: u16) -> u64 {
        self.http_requests
            .get(&(method.to_string(), path.to_string(), status))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn counter(&self, event: LookupEvent) -> &AtomicU64 {
        match event {
            LookupEvent::CacheHit => &self.cache_hits,
            LookupEvent::CacheMiss => &self.cache_misses,
            LookupEvent::CacheEviction => &self.cache_evictions,
            LookupEvent::ResolutionAttempted => &self.dns_lookups,
            LookupEvent::ResolutionSuccess => &self.dns_lookups_success,
            LookupEvent::ResolutionFailure => &self.dns_lookups_failure,
            LookupEvent::ZoneMatchSuccess => &self.zone_lookups_success,
            LookupEvent::ZoneMatchFailure => &self.zone_lookups_failure,
        }
    }
}

impl LookupMetricsPort for ServiceMetrics {
    #[inline]
    fn record(&self, event: LookupEvent) {
        self.counter(event).fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn set_cache_size(&self, size: usize) {
        self.cache_size.store(size as u64, Ordering::Relaxed);
    }
}

impl RequestMetricsPort for ServiceMetrics {
    fn record_http_request(&self, method: &str, path: &str, status: u16) {
        let key = (method.to_string(), path.to_string(), status);
        if let Some(counter) = self.http_requests.get(&key) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }
        self.http_requests
            .entry(key)
            .or_default()
            .fetch_add(1, Ordering::Relaxed);
    }

    fn render(&self) -> String {
        let s = self.snapshot();
        let mut out = String::with_capacity(2048);

        let mut requests: Vec<(RequestKey, u64)> = self
            .http_requests
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().load(Ordering::Relaxed)))
            .collect();
        requests.sort();

        write_labeled_counter(
            &mut out,
            "http_requests_total",
            "Total number of HTTP requests",
            requests.iter().map(|((method, path, status), value)| {
                (
                    vec![
                        ("method", method.clone()),
                        ("path", path.clone()),
                        ("status", status.to_string()),
                    ],
                    *value,
                )
            }),
        );
        write_counter(&mut out, "dns_lookups_total", "Total number of DNS lookups performed", s.dns_lookups);
        write_counter(&mut out, "dns_lookups_success_total", "Total number of successful DNS lookups", s.dns_lookups_success);
        write_counter(&mut out, "dns_lookups_failure_total", "Total number of failed DNS lookups", s.dns_lookups_failure);
        write_counter(&mut out, "dns_cache_hits_total", "Total number of DNS cache hits", s.cache_hits);
        write_counter(&mut out, "dns_cache_misses_total", "Total number of DNS cache misses", s.cache_misses);
        write_counter(&mut out, "dns_cache_evictions_total", "Total number of DNS cache evictions", s.cache_evictions);
        write_counter(&mut out, "zone_lookups_success_total", "Total number of successful zone lookups", s.zone_lookups_success);
        write_counter(&mut out, "zone_lookups_failure_total", "Total number of failed zone lookups", s.zone_lookups_failure);
        write_gauge(&mut out, "dns_cache_size", "Current number of entries in DNS cache", s.cache_size);

        out
    }
}
