#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Builds the API base from the Codespace the backend is served out of,
    /// falling back to a local dev server when none is configured.
    pub fn new() -> Self {
        let api_base_url = match option_env!("CODESPACE_NAME") {
            Some(name) => format!("https://{}-8000.app.github.dev", name),
            None => "http://localhost:8000".to_string(),
        };
        Self { api_base_url }
    }

    /// `<base>/api/<resource>/`
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/api/{}/", self.api_base_url, resource)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_layout() {
        let config = Config {
            api_base_url: "https://abc-8000.app.github.dev".to_string(),
        };
        assert_eq!(
            config.endpoint("activities"),
            "https://abc-8000.app.github.dev/api/activities/"
        );
    }

    #[test]
    fn default_base_is_well_formed() {
        let config = Config::default();
        assert!(config.api_base_url.starts_with("http"));
        assert!(!config.api_base_url.ends_with('/'));
    }
}
