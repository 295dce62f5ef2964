use serde::Deserialize;

fn default_extensions() -> Vec<String> {
    vec!["py".to_string(), "pyi".to_string()]
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// File suffixes recognized during directory scans. Single-file
    /// invocations bypass this filter entirely.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            extensions: default_extensions(),
        }
    }
}

impl Config {
    pub fn from_toml_str(toml_str: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn from_file(file_path: &str) -> Result<Config, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(file_path)?;
        let config = Self::from_toml_str(&content)?;
        Ok(config)
    }
}
