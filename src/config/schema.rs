use serde::{Deserialize, Serialize};

use crate::land::{resolve_soil, LandConditions};

/// Display language for banner labels, table headers, and notices.
/// Crop names and soil descriptors stay in their source form (Arabic with an
/// English gloss) in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Arabic, as in the original tool.
    #[default]
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    /// Pick dark or light from the terminal background.
    #[default]
    Auto,
}

/// Main configuration.
///
/// Everything is optional; an empty or missing file means built-in defaults.
///
/// Example YAML:
/// ```yaml
/// lang: en
/// theme: dark
/// defaults:
///   soil: sandy loam
///   ph: 7.5
///   rainfall: 100
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub lang: Option<Lang>,

    #[serde(default)]
    pub theme: Option<ThemePreference>,

    /// Initial form values; anything unset falls back to the built-in
    /// defaults (soil "طينية", pH 7.0, rainfall 150, temperature 28,
    /// salinity 2.0).
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Soil type, by Arabic name or English alias (e.g. "sandy loam").
    #[serde(default)]
    pub soil: Option<String>,

    #[serde(default)]
    pub ph: Option<f64>,

    /// mm/year
    #[serde(default)]
    pub rainfall: Option<u32>,

    /// °C
    #[serde(default)]
    pub temperature: Option<u32>,

    /// dS/m
    #[serde(default)]
    pub salinity: Option<f64>,
}

impl Config {
    pub fn lang(&self) -> Lang {
        self.lang.unwrap_or_default()
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.unwrap_or_default()
    }

    /// The conditions the form starts from: configured defaults over the
    /// built-in ones. A configured soil is resolved against the enumerated
    /// set so the selector starts on a known entry.
    pub fn initial_conditions(&self) -> LandConditions {
        let mut conditions = LandConditions::default();
        if let Some(defaults) = &self.defaults {
            if let Some(soil) = defaults.soil.as_deref().and_then(resolve_soil) {
                conditions.soil = soil.name.to_string();
            }
            if let Some(ph) = defaults.ph {
                conditions.ph = ph;
            }
            if let Some(rainfall) = defaults.rainfall {
                conditions.rainfall = rainfall;
            }
            if let Some(temperature) = defaults.temperature {
                conditions.temperature = temperature;
            }
            if let Some(salinity) = defaults.salinity {
                conditions.salinity = salinity;
            }
        }
        conditions
    }
}

/// Validate a loaded config, collecting every problem before the program
/// gives up. Checks the configured defaults against the slider bounds and
/// the soil name against the enumerated set.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(defaults) = &config.defaults {
        if let Some(soil) = defaults.soil.as_deref() {
            if resolve_soil(soil).is_none() {
                errors.push(format!(
                    "defaults.soil: unknown soil type '{}' (see `mazra catalog` for valid names)",
                    soil
                ));
            }
        }
    }

    if let Err(bounds_errors) = crate::land::validate_conditions(&config.initial_conditions()) {
        for error in bounds_errors {
            errors.push(format!("defaults.{}", error));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
