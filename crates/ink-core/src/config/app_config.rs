/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the gallery server (may be empty)
    pub server_url: String,

    /// Query key for the upload background flag: `dark` or `pad` (unchecked)
    pub background_param: String,

    /// Display width used when fetching fitted images (0 = not set)
    pub display_width: u32,

    /// Display height used when fetching fitted images (0 = not set)
    pub display_height: u32,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation or default
    /// value logic. Missing keys map to empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            server_url: toml_value
                .get("server")
                .and_then(|s| s.get("url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            background_param: toml_value
                .get("upload")
                .and_then(|u| u.get("background_param"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            display_width: toml_value
                .get("display")
                .and_then(|d| d.get("width"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u32,
            display_height: toml_value
                .get("display")
                .and_then(|d| d.get("height"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u32,
        })
    }
}
