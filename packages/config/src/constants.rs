// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Keyscope

// Analytics Service
pub const KEYSCOPE_API_URL: &str = "KEYSCOPE_API_URL";
pub const KEYSCOPE_HTTP_TIMEOUT_SECS: &str = "KEYSCOPE_HTTP_TIMEOUT_SECS";
pub const KEYSCOPE_HTTP_CONNECT_TIMEOUT_SECS: &str = "KEYSCOPE_HTTP_CONNECT_TIMEOUT_SECS";

// Local Storage
pub const KEYSCOPE_DATA_DIR: &str = "KEYSCOPE_DATA_DIR";

// Discovery Defaults
pub const KEYSCOPE_GOLD_SEED: &str = "KEYSCOPE_GOLD_SEED";
pub const KEYSCOPE_SHOPPING_CATEGORY: &str = "KEYSCOPE_SHOPPING_CATEGORY";

// System Environment Variables
pub const HOME: &str = "HOME";
