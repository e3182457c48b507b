use std::sync::Arc;
use zone_finder_application::ports::RequestMetricsPort;
use zone_finder_application::use_cases::{
    GetCacheStatsUseCase, LookupZoneByAddressUseCase, LookupZoneByHostnameUseCase,
    ResetCacheUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub lookup_by_hostname: Arc<LookupZoneByHostnameUseCase>,
    pub lookup_by_address: Arc<LookupZoneByAddressUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub reset_cache: Arc<ResetCacheUseCase>,
    pub request_metrics: Arc<dyn RequestMetricsPort>,
}
