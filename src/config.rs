use crate::{cli, util};
use anyhow::Context;
use serde::Deserialize;
use std::path;

pub struct Settings {
    pub mainloop_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<path::PathBuf>,
    pub seed: Option<path::PathBuf>,
}

// Content of the config file, every field is optional
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct File {
    mainloop_timeout_ms: Option<u64>,
    log_level: Option<String>,
    seed: Option<path::PathBuf>,
}

impl Settings {
    pub fn load(cli_options: &cli::Options) -> util::Result<Settings> {
        let file = match &cli_options.config {
            Some(fp) => read_file(fp)?,
            None => match default_config_path() {
                Some(fp) if fp.exists() => read_file(&fp)?,
                _ => File::default(),
            },
        };
        Ok(Settings::merge(file, cli_options))
    }

    fn merge(file: File, cli_options: &cli::Options) -> Settings {
        Settings {
            mainloop_timeout_ms: file.mainloop_timeout_ms.unwrap_or(100),
            log_level: cli_options
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_owned()),
            log_dir: dirs::cache_dir().map(|d| d.join("arbor")),
            seed: cli_options.seed.clone().or(file.seed),
        }
    }
}

fn default_config_path() -> Option<path::PathBuf> {
    dirs::config_dir().map(|d| d.join("arbor").join("config.toml"))
}

fn read_file(fp: &path::Path) -> util::Result<File> {
    let content = std::fs::read_to_string(fp)
        .with_context(|| format!("Could not read config file '{}'", fp.display()))?;
    let file = toml::from_str(&content)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(File::default(), &cli::Options::default());
        assert_eq!(settings.mainloop_timeout_ms, 100);
        assert_eq!(settings.log_level, "info");
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_cli_overrides_file() -> util::Result<()> {
        let file: File = toml::from_str(
            "mainloop_timeout_ms = 50\nlog_level = \"warn\"\nseed = \"file.toml\"\n",
        )?;
        let cli_options = cli::Options {
            log_level: Some("debug".into()),
            ..Default::default()
        };
        let settings = Settings::merge(file, &cli_options);
        assert_eq!(settings.mainloop_timeout_ms, 50);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.seed, Some(path::PathBuf::from("file.toml")));
        Ok(())
    }

    #[test]
    fn test_unknown_field() {
        assert!(toml::from_str::<File>("colour = \"red\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let cli_options = cli::Options {
            config: Some("/does/not/exist/config.toml".into()),
            ..Default::default()
        };
        assert!(Settings::load(&cli_options).is_err());
    }
}
