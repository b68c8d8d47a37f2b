pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Client-side API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Where the client sends the user after the server rejects the session.
    pub login_path: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login_path: "/login".to_string(),
        }
    }

    /// Reads `BOOKSHELF_API_URL` at compile time so the wasm bundle carries it.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("BOOKSHELF_API_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_API_URL),
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Settings for the static host server.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub bind_addr: String,
    pub static_dir: std::path::PathBuf,
}

#[cfg(feature = "ssr")]
impl HostConfig {
    /// `BIND_ADDR` (default `0.0.0.0:3000`) and `STATIC_DIR` (default `./dist`).
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "./dist".to_string());

        Self {
            bind_addr,
            static_dir: static_dir.into(),
        }
    }
}
