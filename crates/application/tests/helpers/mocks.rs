use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;
use zone_finder_application::ports::{
    CacheSnapshot, DnsResolver, LookupEvent, LookupMetricsPort, ResolutionCachePort,
};
use zone_finder_domain::DomainError;

pub struct MockDnsResolver {
    responses: RwLock<HashMap<String, Result<IpAddr, DomainError>>>,
    delay: RwLock<Option<Duration>>,
    calls: AtomicUsize,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            delay: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, hostname: &str, ip: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(hostname.to_string(), Ok(ip.parse().unwrap()));
    }

    pub fn set_response_error(&self, hostname: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(hostname.to_string(), Err(error));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, hostname: &str, _timeout: Duration) -> Result<IpAddr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .read()
            .unwrap()
            .get(hostname)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NoSuchName(hostname.to_string())))
    }
}

pub struct MockResolutionCache {
    entries: Mutex<HashMap<String, (IpAddr, Duration)>>,
    puts: AtomicUsize,
    max_entries: usize,
}

impl MockResolutionCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            puts: AtomicUsize::new(0),
            max_entries: 1000,
        }
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn ttl_of(&self, hostname: &str) -> Option<Duration> {
        self.entries.lock().unwrap().get(hostname).map(|(_, ttl)| *ttl)
    }
}

impl Default for MockResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionCachePort for MockResolutionCache {
    fn get(&self, hostname: &str) -> Option<IpAddr> {
        self.entries.lock().unwrap().get(hostname).map(|(ip, _)| *ip)
    }

    fn put(&self, hostname: &str, address: IpAddr, ttl: Duration) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(hostname.to_string(), (address, ttl));
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn snapshot(&self) -> CacheSnapshot {
        let entries = self.entries.lock().unwrap();
        let mut sample_keys: Vec<String> = entries.keys().cloned().collect();
        sample_keys.sort();
        CacheSnapshot {
            total_entries: entries.len(),
            sample_keys,
            max_entries: self.max_entries,
            ttl_secs: 300,
        }
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

#[derive(Default)]
pub struct RecordingMetrics {
    events: Mutex<Vec<LookupEvent>>,
    cache_size: Mutex<Option<usize>>,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, event: LookupEvent) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| **e == event)
            .count()
    }

    pub fn total(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn cache_size(&self) -> Option<usize> {
        *self.cache_size.lock().unwrap()
    }
}

impl LookupMetricsPort for RecordingMetrics {
    fn record(&self, event: LookupEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn set_cache_size(&self, size: usize) {
        *self.cache_size.lock().unwrap() = Some(size);
    }
}
