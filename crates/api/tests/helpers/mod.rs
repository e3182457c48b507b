#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;
use zone_finder_api::{create_api_routes, with_path_normalization, AppState};
use zone_finder_application::ports::DnsResolver;
use zone_finder_application::use_cases::{
    GetCacheStatsUseCase, LookupZoneByAddressUseCase, LookupZoneByHostnameUseCase,
    ResetCacheUseCase,
};
use zone_finder_domain::zone::SubnetRecord;
use zone_finder_domain::{DomainError, ZoneMatcher};
use zone_finder_infrastructure::dns::{ResolutionCache, ResolutionCacheConfig};
use zone_finder_infrastructure::metrics::ServiceMetrics;

#[derive(Default)]
pub struct StaticResolver {
    answers: RwLock<HashMap<String, Result<IpAddr, DomainError>>>,
    calls: AtomicUsize,
}

impl StaticResolver {
    pub fn answer(&self, hostname: &str, ip: &str) {
        self.answers
            .write()
            .unwrap()
            .insert(hostname.to_string(), Ok(ip.parse().unwrap()));
    }

    pub fn fail(&self, hostname: &str, error: DomainError) {
        self.answers
            .write()
            .unwrap()
            .insert(hostname.to_string(), Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for StaticResolver {
    async fn resolve(&self, hostname: &str, _timeout: Duration) -> Result<IpAddr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .read()
            .unwrap()
            .get(hostname)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NoSuchName(hostname.to_string())))
    }
}

pub struct TestApp {
    pub router: NormalizePath<Router>,
    pub resolver: Arc<StaticResolver>,
    pub cache: Arc<ResolutionCache>,
    pub metrics: Arc<ServiceMetrics>,
}

pub fn create_test_app() -> TestApp {
    let resolver = Arc::new(StaticResolver::default());
    let metrics = Arc::new(ServiceMetrics::new());
    let cache = Arc::new(
        ResolutionCache::new(ResolutionCacheConfig {
            max_entries: 1000,
            default_ttl: Duration::from_secs(300),
            stats_sample_size: 100,
        })
        .with_metrics(metrics.clone()),
    );
    let matcher = Arc::new(
        ZoneMatcher::new(&[
            SubnetRecord::new("192.168.0.0/19", "eu-central-1b", "euc1-az3"),
            SubnetRecord::new("192.168.32.0/19", "eu-central-1a", "euc1-az2"),
            SubnetRecord::new("192.168.64.0/19", "eu-central-1c", "euc1-az1"),
        ])
        .unwrap(),
    );

    let state = AppState {
        lookup_by_hostname: Arc::new(LookupZoneByHostnameUseCase::new(
            resolver.clone(),
            cache.clone(),
            matcher.clone(),
            metrics.clone(),
            Duration::from_secs(300),
            Duration::from_secs(2),
        )),
        lookup_by_address: Arc::new(LookupZoneByAddressUseCase::new(
            matcher,
            metrics.clone(),
        )),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache.clone())),
        reset_cache: Arc::new(ResetCacheUseCase::new(cache.clone())),
        request_metrics: metrics.clone(),
    };

    TestApp {
        router: with_path_normalization(create_api_routes(state)),
        resolver,
        cache,
        metrics,
    }
}

pub async fn send(router: &NormalizePath<Router>, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(router: &NormalizePath<Router>, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(router, "GET", uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
