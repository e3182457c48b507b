use super::LookupServices;
use std::sync::Arc;
use zone_finder_api::AppState;
use zone_finder_application::use_cases::{
    GetCacheStatsUseCase, LookupZoneByAddressUseCase, LookupZoneByHostnameUseCase,
    ResetCacheUseCase,
};
use zone_finder_domain::Config;

pub struct UseCases {
    pub lookup_by_hostname: Arc<LookupZoneByHostnameUseCase>,
    pub lookup_by_address: Arc<LookupZoneByAddressUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub reset_cache: Arc<ResetCacheUseCase>,
}

impl UseCases {
    pub fn new(services: &LookupServices, config: &Config) -> Self {
        Self {
            lookup_by_hostname: Arc::new(LookupZoneByHostnameUseCase::new(
                services.resolver.clone(),
                services.cache.clone(),
                services.matcher.clone(),
                services.metrics.clone(),
                config.cache.ttl(),
                config.resolver.timeout(),
            )),
            lookup_by_address: Arc::new(LookupZoneByAddressUseCase::new(
                services.matcher.clone(),
                services.metrics.clone(),
            )),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(services.cache.clone())),
            reset_cache: Arc::new(ResetCacheUseCase::new(services.cache.clone())),
        }
    }

    pub fn into_app_state(self, services: &LookupServices) -> AppState {
        AppState {
            lookup_by_hostname: self.lookup_by_hostname,
            lookup_by_address: self.lookup_by_address,
            get_cache_stats: self.get_cache_stats,
            reset_cache: self.reset_cache,
            request_metrics: services.metrics.clone(),
        }
    }
}
