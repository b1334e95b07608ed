use std::any::Any;

use manage_states::State;

/// Where the manage console talks to.
///
/// The base URL comes from `MANAGE_API_BASE_URL` when set, so a local
/// backend (or a mock server in tests) can be swapped in without a rebuild.
#[derive(Debug, Clone)]
pub struct ManageConfig {
    pub api_base_url: String,
}

pub const DEFAULT_API_BASE_URL: &str = "https://console.lqxclqxc.com";

impl ManageConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Root of the versioned management API.
    pub fn api_url(&self) -> String {
        format!("{}/manage/api/v1", self.api_base_url)
    }
}

impl Default for ManageConfig {
    fn default() -> Self {
        Self {
            api_base_url: std::env::var("MANAGE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned()),
        }
    }
}

impl State for ManageConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_version_prefix() {
        let config = ManageConfig::new("http://127.0.0.1:8080");
        assert_eq!(config.api_url(), "http://127.0.0.1:8080/manage/api/v1");
    }
}
