//! Config file loading

use std::path::Path;

use anyhow::Context;
use game_core::Config;

/// Read a TOML config; missing fields keep their defaults
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Rgb;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("paddle_speed = 8.0\nbackground = [10, 20, 30]\n");
        let config = load_config(file.path()).expect("valid config");

        assert_eq!(config.paddle_speed, 8.0);
        assert_eq!(config.background, Rgb(10, 20, 30));
        assert_eq!(config.screen_width, Config::new().screen_width);
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        assert_eq!(load_config(file.path()).expect("valid config"), Config::new());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("ball_size = 0.0\n");
        let err = load_config(file.path()).expect_err("zero ball size");
        assert!(err.to_string().contains("ball_size"), "{err}");
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let file = write_config("paddle_speed = \"fast\"\n");
        let err = load_config(file.path()).expect_err("wrong type");
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_config(&dir.path().join("absent.toml")).expect_err("no file");
        assert!(err.to_string().contains("Failed to read config"));
    }
}
