/// Beacon system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Action name reported with every tracker event.
pub const ACTION_NAME: &str = "Beacon Runner OS";

/// Event type reported with every tracker event.
pub const EVENT_TYPE: &str = "runner-os";

/// Sentinel reported in place of a hash when the source URL is absent.
pub const NOT_AVAILABLE: &str = "n/a";

/// Environment variable holding the pipeline (job) URL.
pub const JOB_URL_ENV: &str = "JOB_URL";

/// Environment variable holding the URL of the specific build.
pub const BUILD_URL_ENV: &str = "BUILD_URL";

/// Repository URL injected by the embedding build, if any.
pub const BUILD_REPOSITORY_URL: Option<&str> = option_env!("BEACON_REPOSITORY_URL");

/// Site identifier injected by the embedding build, if any.
pub const BUILD_SITE_ID: Option<&str> = option_env!("BEACON_SITE_ID");
