//! Debugging feature flags.

pub struct LogFlags {
    /// Every request handed to the spawner.
    pub log_fetches: bool,

    /// Results applied to (or discarded by) the query caches.
    pub log_cache: bool,

    /// Route pushes, back/forward and page mounts.
    pub log_navigation: bool,

    /// Ticker refresh timer firing.
    pub log_refresh: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: true,
    log_cache: false,
    log_navigation: true,
    log_refresh: false,
};
