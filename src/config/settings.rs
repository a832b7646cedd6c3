//! Configuration settings for the terminal Game of Life

use crate::game_of_life::Rule;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub rule: Rule,
    /// Probability that a cell starts alive
    pub density: f64,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Stop after this many rendered generations; `None` runs until interrupted
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub frame_delay_ms: u64,
    /// Lines and columns reserved around the grid
    pub margin: u16,
    pub fallback_lines: u16,
    pub fallback_columns: u16,
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Blank lines written after each frame
    pub padding_lines: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: Rule::default(),
            density: 0.5,
            seed: None,
            max_generations: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 500,
            margin: 2,
            fallback_lines: 20,
            fallback_columns: 80,
            alive_glyph: '█',
            dead_glyph: ' ',
            padding_lines: 2,
        }
    }
}

impl DisplayConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn fallback_size(&self) -> (u16, u16) {
        (self.fallback_lines, self.fallback_columns)
    }
}

impl Settings {
    /// Load settings from a YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML or JSON file, chosen by extension
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?
        } else {
            serde_yaml::to_string(self).context("Failed to serialize settings")?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let density = self.simulation.density;
        if !(0.0..=1.0).contains(&density) {
            anyhow::bail!("Density must be between 0 and 1, got {}", density);
        }

        if self.display.fallback_lines == 0 || self.display.fallback_columns == 0 {
            anyhow::bail!("Fallback display size must be positive");
        }

        if self.simulation.max_generations == Some(0) {
            anyhow::bail!("Generation limit must be positive when set");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(density) = cli_overrides.density {
            self.simulation.density = density;
        }
        if let Some(ref rule) = cli_overrides.rule {
            self.simulation.rule = rule.clone();
        }
        if let Some(delay) = cli_overrides.frame_delay_ms {
            self.display.frame_delay_ms = delay;
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub max_generations: Option<u64>,
    pub density: Option<f64>,
    pub rule: Option<Rule>,
    pub frame_delay_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_classic_simulator() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.rule.to_string(), "B3/S23");
        assert_eq!(settings.simulation.density, 0.5);
        assert_eq!(settings.display.frame_delay(), Duration::from_millis(500));
        assert_eq!(settings.display.margin, 2);
        assert_eq!(settings.display.fallback_size(), (20, 80));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_and_json_files() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.simulation.seed = Some(42);
        settings.simulation.rule = "B36/S23".parse().unwrap();

        for name in ["life.yaml", "life.json"] {
            let path = dir.path().join("nested").join(name);
            settings.to_file(&path).unwrap();
            let loaded = Settings::from_file(&path).unwrap();
            assert_eq!(loaded, settings);
        }
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.yaml");
        std::fs::write(&path, "simulation:\n  seed: 7\n").unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.seed, Some(7));
        assert_eq!(loaded.simulation.rule, Rule::conway());
        assert_eq!(loaded.display, DisplayConfig::default());
    }

    #[test]
    fn test_edge_behavior_is_not_a_setting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wrap.yaml");
        std::fs::write(&path, "simulation:\n  boundary_condition: wrap\n").unwrap();

        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.simulation.density = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.display.fallback_columns = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.max_generations = Some(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            seed: Some(9),
            max_generations: Some(3),
            frame_delay_ms: Some(0),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.simulation.seed, Some(9));
        assert_eq!(settings.simulation.max_generations, Some(3));
        assert_eq!(settings.display.frame_delay_ms, 0);
        assert_eq!(settings.simulation.density, 0.5);
    }
}
