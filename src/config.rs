//! Site configuration
//!
//! Ships with sensible defaults. A page can override any field through an
//! inline `<script id="site-config" type="application/json">` element.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::contact::RelayConfig;

/// Id of the inline JSON element read by [`SiteConfig::load`]
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("reveal_threshold must be within (0, 1] (got {0})")]
    RevealThreshold(f64),
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Number of points in the background field for this preset
    pub fn particle_count(&self) -> usize {
        match self {
            QualityPreset::Low => 1000,
            QualityPreset::Medium => 2500,
            QualityPreset::High => PARTICLE_COUNT,
        }
    }
}

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path the app is mounted under
    pub base_path: String,
    /// Contact relay identifiers
    pub relay: RelayConfig,

    // === Navigation ===
    /// Header switches to compact style past this offset (px)
    pub scroll_threshold: f64,
    /// Sections activate this far before reaching the top (px)
    pub pretrigger_offset: f64,
    /// Added to a section's top when a nav link scrolls to it (px)
    pub nav_link_offset: f64,

    // === Reveal ===
    /// Fraction of a target that must be visible before it reveals
    pub reveal_threshold: f64,

    // === Background ===
    /// Particle field quality
    pub quality: QualityPreset,
    /// Render the particle field at all
    pub particles: bool,
    /// Force reduced motion regardless of the OS preference
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: BASE_PATH.to_string(),
            relay: RelayConfig::default(),

            scroll_threshold: NAV_SCROLLED_THRESHOLD,
            pretrigger_offset: SECTION_PRETRIGGER_OFFSET,
            nav_link_offset: NAV_LINK_OFFSET,

            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,

            quality: QualityPreset::High,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scroll_threshold", self.scroll_threshold),
            ("pretrigger_offset", self.pretrigger_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if !self.nav_link_offset.is_finite() {
            return Err(ConfigError::OutOfRange {
                field: "nav_link_offset",
                value: self.nav_link_offset,
            });
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(ConfigError::RevealThreshold(self.reveal_threshold));
        }
        Ok(())
    }

    /// Effective point count for the background field
    pub fn particle_count(&self, prefers_reduced_motion: bool) -> usize {
        if !self.particles || self.reduced_motion || prefers_reduced_motion {
            0
        } else {
            self.quality.particle_count()
        }
    }

    /// Whether reveal transitions should be skipped
    pub fn effective_reduced_motion(&self, prefers_reduced_motion: bool) -> bool {
        self.reduced_motion || prefers_reduced_motion
    }

    /// Prefix a site-relative asset path with the base path
    pub fn asset_url(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Load the config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded site config from #{}", CONFIG_ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Ignoring invalid site config: {}", e),
            }
        }

        log::info!("Using default site config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.pretrigger_offset, 100.0);
        assert_eq!(config.base_path, "/portfolio");
        assert_eq!(config.particle_count(false), 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{ "quality": "low", "scroll_threshold": 80 }"#)
            .expect("valid config");
        assert_eq!(config.quality, QualityPreset::Low);
        assert_eq!(config.scroll_threshold, 80.0);
        // Untouched fields keep their defaults
        assert_eq!(config.pretrigger_offset, SECTION_PRETRIGGER_OFFSET);
        assert_eq!(config.particle_count(false), 1000);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "reveal_threshold": 0 }"#),
            Err(ConfigError::RevealThreshold(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "pretrigger_offset": -5 }"#),
            Err(ConfigError::OutOfRange { field: "pretrigger_offset", .. })
        ));
        assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_reduced_motion_disables_particles() {
        let config = SiteConfig::default();
        assert_eq!(config.particle_count(true), 0);

        let mut forced = SiteConfig::default();
        forced.reduced_motion = true;
        assert_eq!(forced.particle_count(false), 0);
        assert!(forced.effective_reduced_motion(false));
    }

    #[test]
    fn test_quality_preset_parsing() {
        assert_eq!(QualityPreset::from_str("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn test_asset_url() {
        let config = SiteConfig::default();
        assert_eq!(config.asset_url("/resume.pdf"), "/portfolio/resume.pdf");
        assert_eq!(config.asset_url("profile.jpg"), "/portfolio/profile.jpg");
    }
}
