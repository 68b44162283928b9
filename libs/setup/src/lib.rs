use std::{fs, path::PathBuf};

use analysis::Lexicon;
use directories::ProjectDirs;
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

pub mod install;

pub use install::install;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct General {
    pub port: u16,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Fetch {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Analysis {
    pub top_words: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub general: General,
    pub fetch: Fetch,
    pub analysis: Analysis,
}

impl Default for General {
    fn default() -> Self {
        General { port: 6868 }
    }
}

impl Default for Fetch {
    fn default() -> Self {
        Fetch {
            timeout_seconds: 10,
            user_agent: format!("pagelens/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Analysis {
    fn default() -> Self {
        Analysis { top_words: 10 }
    }
}

pub fn get_config_location() -> (PathBuf, PathBuf) {
    let project_dir = ProjectDirs::from("", "", "pagelens").unwrap();
    let config_dir = project_dir.config_dir();
    let mut config_path = PathBuf::from(config_dir);
    config_path.push("config.toml");
    (config_dir.to_owned(), config_path)
}

pub fn get_data_dir_location() -> PathBuf {
    let project_dir = ProjectDirs::from("", "", "pagelens").unwrap();
    project_dir.data_dir().to_owned()
}

/// Reads the config file, writing one with defaults first if none exists.
pub fn read_config() -> Config {
    let (dir, file) = get_config_location();
    if !file.exists() {
        fs::create_dir_all(dir).unwrap();
        fs::write(&file, toml::to_string(&Config::default()).unwrap()).unwrap();
    }
    let config: Config = toml::from_str(&fs::read_to_string(file).unwrap()).unwrap();
    config
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("could not read lexicon file: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse lexicon file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The word sets the categorizer runs against. An operator-supplied
/// `lexicon.toml` next to the config file overrides categories wholesale;
/// categories it leaves out keep the built-in words. Entries are lowercased
/// on the way in since matching is defined on lowercase tokens only.
pub fn load_lexicon() -> Result<Lexicon, LexiconError> {
    let (dir, _) = get_config_location();
    let lexicon_path = dir.join("lexicon.toml");
    if !lexicon_path.exists() {
        return Ok(Lexicon::default());
    }
    let lexicon: Lexicon = toml::from_str(&fs::read_to_string(lexicon_path)?)?;
    Ok(lexicon.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_survives_a_toml_round_trip() {
        let serialized = toml::to_string(&Config::default()).unwrap();
        let config: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.general.port, 6868);
        assert_eq!(config.fetch.timeout_seconds, 10);
        assert_eq!(config.analysis.top_words, 10);
    }

    #[test]
    fn missing_config_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nport = 9999\n").unwrap();
        assert_eq!(config.general.port, 9999);
        assert_eq!(config.analysis.top_words, 10);
    }

    #[test]
    fn partial_lexicon_override_keeps_other_categories() {
        let lexicon: Lexicon = toml::from_str("positive = [\"Stellar\"]").unwrap();
        let lexicon = lexicon.normalized();
        assert!(lexicon.positive.contains("stellar"));
        assert!(!lexicon.positive.contains("good"));
        assert!(lexicon.negative.contains("bad"));
        assert!(lexicon.sexual.contains("erotic"));
    }

    #[test]
    fn default_lexicon_serializes_to_toml() {
        let serialized = toml::to_string(&Lexicon::default()).unwrap();
        let parsed: Lexicon = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, Lexicon::default());
    }
}
