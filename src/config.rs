use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub playlist: PlaylistConfig,

    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Seconds jumped by the arrow keys and transport seek buttons
    #[serde(default = "default_seek_step")]
    pub seek_step_secs: f64,

    /// Volume change per arrow-key press
    #[serde(default = "default_volume_step")]
    pub volume_step: f64,

    #[serde(default = "default_volume")]
    pub initial_volume: f64,

    /// Start playing the next source automatically when one ends
    #[serde(default = "default_true")]
    pub autoplay_next: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistConfig {
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default = "default_bus_capacity")]
    pub bus_capacity: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            debug!("Loading config from {:?}", config_path);
            let config = Self::load_from(&config_path)?;
            info!("Config loaded successfully");
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents).context("Failed to write config file")?;

        debug!("Config saved to {:?}", path);
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to get config directory")?;
        Ok(config_dir.join("matinee").join("config.toml"))
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: default_seek_step(),
            volume_step: default_volume_step(),
            initial_volume: default_volume(),
            autoplay_next: default_true(),
        }
    }
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            bus_capacity: default_bus_capacity(),
        }
    }
}

// Default value functions
fn default_seek_step() -> f64 {
    10.0
}
fn default_volume_step() -> f64 {
    0.1
}
fn default_volume() -> f64 {
    1.0
}
fn default_true() -> bool {
    true
}
fn default_bus_capacity() -> usize {
    64
}
fn default_sources() -> Vec<String> {
    vec![
        "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4".to_string(),
        "https://storage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4".to_string(),
        "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.playback.seek_step_secs, 10.0);
        assert_eq!(config.playback.volume_step, 0.1);
        assert!(config.playback.autoplay_next);
        assert_eq!(config.playlist.sources.len(), 3);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.playback.seek_step_secs = 5.0;
        config.playlist.sources = vec!["local.mp4".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.playback.seek_step_secs, 5.0);
        assert_eq!(loaded.playlist.sources, vec!["local.mp4".to_string()]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[playback]\nseek_step_secs = 30.0\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.playback.seek_step_secs, 30.0);
        assert_eq!(loaded.playback.volume_step, 0.1);
        assert_eq!(loaded.playlist.sources.len(), 3);
    }
}
