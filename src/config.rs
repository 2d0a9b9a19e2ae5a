use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::contrast as k;

/// Tunable constants of the navbar contrast classifier.
///
/// Every field has a default, so a TOML/JSON override only lists what it
/// changes. Call [`ContrastConfig::validate`] after deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    pub dark_brand_brightness: f64,
    pub video_brightness: f64,
    pub white_brightness: f64,
    pub unresolved_brightness: f64,
    pub missing_probe_brightness: f64,
    pub panel_opacity: f64,
    pub panel_brightness: f64,
    pub blur_glow: f64,
    pub glow_attenuation: f64,
    pub dark_point_threshold: f64,
    pub dark_share_percent: f64,
    pub average_floor: f64,
    pub dark_brand_classes: Vec<String>,
    pub video_classes: Vec<String>,
    /// Compared case-insensitively against element tag names
    pub video_tags: Vec<String>,
    pub white_classes: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            dark_brand_brightness: k::DARK_BRAND_BRIGHTNESS,
            video_brightness: k::VIDEO_BRIGHTNESS,
            white_brightness: k::WHITE_BRIGHTNESS,
            unresolved_brightness: k::UNRESOLVED_BRIGHTNESS,
            missing_probe_brightness: k::MISSING_PROBE_BRIGHTNESS,
            panel_opacity: k::PANEL_OPACITY,
            panel_brightness: k::PANEL_BRIGHTNESS,
            blur_glow: k::BLUR_GLOW,
            glow_attenuation: k::GLOW_ATTENUATION,
            dark_point_threshold: k::DARK_POINT_THRESHOLD,
            dark_share_percent: k::DARK_SHARE_PERCENT,
            average_floor: k::AVERAGE_FLOOR,
            dark_brand_classes: owned(k::DARK_BRAND_CLASSES),
            video_classes: owned(k::VIDEO_CLASSES),
            video_tags: owned(k::VIDEO_TAGS),
            white_classes: owned(k::WHITE_CLASSES),
        }
    }
}

/// Validate that a value is within a given range (inclusive). Unordered
/// values (NaN) are out of every range.
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val.partial_cmp(&min).is_none() || val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

impl ContrastConfig {
    /// Parse a TOML override document (missing keys keep their defaults).
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: ContrastConfig = toml::from_str(s).context("invalid contrast TOML")?;
        cfg.validate()
    }

    /// Parse a JSON override object (missing keys keep their defaults).
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: ContrastConfig = serde_json::from_str(s).context("invalid contrast JSON")?;
        cfg.validate()
    }

    pub fn load_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Range-check every numeric field.
    pub fn validate(self) -> Result<Self> {
        for (name, v) in [
            ("dark_brand_brightness", self.dark_brand_brightness),
            ("video_brightness", self.video_brightness),
            ("white_brightness", self.white_brightness),
            ("unresolved_brightness", self.unresolved_brightness),
            ("missing_probe_brightness", self.missing_probe_brightness),
            ("panel_brightness", self.panel_brightness),
            ("dark_point_threshold", self.dark_point_threshold),
            ("average_floor", self.average_floor),
        ] {
            validate_in_range(v, 0.0, 255.0, name)?;
        }
        for (name, v) in [
            ("panel_opacity", self.panel_opacity),
            ("blur_glow", self.blur_glow),
            ("glow_attenuation", self.glow_attenuation),
        ] {
            validate_in_range(v, 0.0, 1.0, name)?;
        }
        validate_in_range(self.dark_share_percent, 0.0, 100.0, "dark_share_percent")?;
        Ok(self)
    }
}

/// Navbar contrast tuning tool
///
/// Replays a recorded navbar scene through the contrast classifier.
/// Configuration priority: CLI args > Environment variables > Defaults
#[derive(Parser, Debug)]
#[command(name = "nav-contrast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay a navbar scene through the contrast classifier", long_about = None)]
pub struct CliArgs {
    /// Scene JSON file (navbar targets and the surfaces beneath them)
    #[arg(long, env = "NAV_CONTRAST_SCENE")]
    pub scene: Option<PathBuf>,

    /// TOML file overriding classifier constants
    #[arg(long, env = "NAV_CONTRAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the decision as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene: PathBuf,
    pub contrast: ContrastConfig,
    pub json: bool,
}

/// Load configuration from CLI args and environment variables
/// Priority: CLI args > Environment variables > Defaults
pub fn load() -> Result<Config> {
    let args = CliArgs::parse();

    let scene = args
        .scene
        .or_else(|| env::var("NAV_CONTRAST_SCENE").ok().map(PathBuf::from))
        .ok_or_else(|| anyhow!("a scene file is required (--scene or NAV_CONTRAST_SCENE)"))?;

    let contrast = match args
        .config
        .or_else(|| env::var("NAV_CONTRAST_CONFIG").ok().map(PathBuf::from))
    {
        Some(path) => ContrastConfig::load_toml_file(&path)?,
        None => ContrastConfig::default(),
    };

    Ok(Config {
        scene,
        contrast,
        json: args.json,
    })
}

impl Config {
    pub fn print_summary(&self) {
        let c = &self.contrast;
        eprintln!("nav-contrast configuration:");
        eprintln!("  Scene: {}", self.scene.display());
        eprintln!(
            "  Panel: opacity {} brightness {} glow {} x {}",
            c.panel_opacity, c.panel_brightness, c.blur_glow, c.glow_attenuation
        );
        eprintln!(
            "  Thresholds: point < {} | dark share >= {}% | average < {}",
            c.dark_point_threshold, c.dark_share_percent, c.average_floor
        );
    }
}
