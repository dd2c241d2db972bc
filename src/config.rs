use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Record file replacing the built-in floor records
    #[serde(default)]
    pub(crate) data: Option<PathBuf>,
}

/// What happened to a config file candidate while loading
#[derive(Debug)]
pub(crate) enum ConfigNote {
    Loaded(PathBuf),
    Invalid { path: PathBuf, message: String },
}

impl ConfigNote {
    /// Logging is set up after the config is read, so notes are replayed
    pub(crate) fn log(&self) {
        match self {
            ConfigNote::Loaded(path) => {
                tracing::debug!(path = %path.display(), "Loaded config");
            }
            ConfigNote::Invalid { path, message } => {
                tracing::warn!(path = %path.display(), "Failed to parse config: {message}");
            }
        }
    }
}

impl Config {
    /// First config file that parses, or defaults
    pub(crate) fn load() -> (Self, Vec<ConfigNote>) {
        let mut notes = Vec::new();

        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        notes.push(ConfigNote::Loaded(path));
                        return (config, notes);
                    }
                    Err(e) => notes.push(ConfigNote::Invalid {
                        path,
                        message: e.to_string(),
                    }),
                }
            }
        }

        (Self::default(), notes)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/floorwatch/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("floorwatch").join("config.toml"));
        }

        // 2. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("floorwatch").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.floorwatch.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".floorwatch.toml"));
        }

        paths
    }
}
