use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::domain::card::{Card, CardDeck};
use crate::domain::review::Review;
use crate::model::carousel::InitialSelection;
use crate::presentation::config::keybindings::KeyBindings;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

const DEFAULT_CELL_WIDTH: u16 = 8;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "Card::defaults")]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub initial: InitialSelection,
    /// Width of one terminal cell in pixels
    #[serde(default = "default_cell_width")]
    pub cell_width: u16,
}

fn default_cell_width() -> u16 {
    DEFAULT_CELL_WIDTH
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            cards: Card::defaults(),
            initial: InitialSelection::default(),
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl CarouselConfig {
    /// Falls back to the built-in deck if `cards` is empty.
    pub fn deck(&self) -> CardDeck {
        CardDeck::new(self.cards.clone()).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct HomeConfig {
    #[serde(default = "Review::defaults")]
    pub reviews: Vec<Review>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            reviews: Review::defaults(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub home: HomeConfig,
}

impl Config {
    /// Loads the embedded defaults layered with any user configuration file.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Only the embedded defaults, without touching the filesystem.
    pub fn from_defaults() -> Result<Self, ConfigError> {
        let cfg: Self = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.cards.is_empty() {
            return Err(ConfigError::Message(String::from(
                "carousel.cards must contain at least one card",
            )));
        }
        if self.carousel.cell_width == 0 {
            return Err(ConfigError::Message(String::from(
                "carousel.cell_width must be greater than zero",
            )));
        }
        Ok(())
    }
}
