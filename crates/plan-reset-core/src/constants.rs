//! Application constants and configuration defaults
//!
//! Centralized location for endpoint locations and header values

/// Backend instance configuration
pub mod backend {
    /// Project URL of the backend instance the reset targets
    pub const DEFAULT_PROJECT_URL: &str = "https://f8224a53-b155-4576-b4ef-bf2eb4b7f6bf.supabase.co";

    /// Path prefix of the PostgREST API under the project URL
    pub const REST_PATH: &str = "rest/v1";

    /// Resource collection holding one row per user plan
    pub const PLANS_TABLE: &str = "user_active_plans";

    /// Column the reset filters on and rewrites
    pub const STATUS_COLUMN: &str = "status";
}

/// Environment variable names
pub mod env {
    /// API key, sent both as `apikey` and as the bearer token
    pub const API_KEY: &str = "SUPABASE_KEY";

    /// Optional project URL override
    pub const PROJECT_URL: &str = "SUPABASE_URL";
}

/// HTTP client configuration
pub mod http {
    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("plan-reset/", env!("CARGO_PKG_VERSION"));

    /// Ask PostgREST to omit the mutated rows from the response
    pub const PREFER_MINIMAL: &str = "return=minimal";
}
