//! Shared constants for mfr-recon.

/// Fixed number of rows per listing page.
pub const PAGE_SIZE: u32 = 20;

/// PostgreSQL connection pool: default maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: default acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: default idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Port the HTTP server binds when none is configured.
pub const DEFAULT_PORT: u16 = 3000;
