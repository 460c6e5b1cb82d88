//! Build-time application configuration.
//!
//! A wasm bundle has no runtime environment to read, so the API key is
//! baked in at compile time via `DOG_API_KEY`.

/// The Dog API breed list endpoint.
pub const BREEDS_URL: &str = "https://api.thedogapi.com/v1/breeds";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Breed list endpoint.
    pub breeds_url: String,
    /// API key sent as `x-api-key`. `None` when the build omitted it;
    /// the request then goes out without the header and the API's answer
    /// flows through the normal success/error path.
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Configuration from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self {
            breeds_url: BREEDS_URL.to_string(),
            api_key: option_env!("DOG_API_KEY").map(str::to_string),
        }
    }
}
