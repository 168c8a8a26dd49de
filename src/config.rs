use crate::perspective::Options;

pub const API_KEY_ENV: &str = "PERSPECTIVE_API_KEY";

#[derive(serde::Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default)]
    pub options: Options,
}

impl std::str::FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Config {
    pub fn load(path: &std::path::Path) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path).map_err(|e| anyhow::format_err!("reading {}: {}", path.display(), e))?;
        Ok(raw.parse()?)
    }
}
