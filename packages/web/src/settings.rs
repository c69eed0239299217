use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub title: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: "Surface summary".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Export {
    pub filename: String,
}

impl Default for Export {
    fn default() -> Self {
        Self {
            filename: "surfaces.csv".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Log {
    /// Parsed level, `INFO` when the configured name is unknown.
    pub fn tracing_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub page: Page,
    pub export: Export,
    pub log: Log,
}

impl Settings {
    pub(crate) fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("page.title", "Surface summary")?
            .set_default("export.filename", "surfaces.csv")?
            .set_default("log.level", "info")?
            .add_source(
                File::with_name("surfacesheet.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("PAGE_TITLE", "Floor plan");
        set_var("LOG_LEVEL", "debug");
        let settings = Settings::new().unwrap_or_default();
        println!("Settings = {:?}", settings);
        assert_eq!(settings.page.title, "Floor plan");
        assert_eq!(settings.export.filename, "surfaces.csv");
        assert_eq!(settings.log.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let log = Log {
            level: "chatty".into(),
        };
        assert_eq!(log.tracing_level(), tracing::Level::INFO);
        assert_eq!(Settings::default().log.tracing_level(), tracing::Level::INFO);
    }
}
