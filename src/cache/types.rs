pub const NEARBITE_CACHE_HEADER: &str = "X-Nearbite-Cache";
pub const NEARBITE_STATUS_HEADER: &str = "X-Nearbite-Status";
pub const NEARBITE_STATUS_HEALTHY: &str = "healthy";
pub const NEARBITE_STATUS_READY: &str = "ready";
pub const NEARBITE_STATUS_UNAVAILABLE: &str = "unavailable";

/// What the proximity path did with the cache for one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    /// Served verbatim from the cache.
    Hit,
    /// Computed from the store and written back.
    Miss,
    /// Cache unavailable; computed from the store without touching the cache.
    Bypass,
}

impl CacheStatus {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Bypass => "BYPASS",
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheStatus::Hit)
    }
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}
