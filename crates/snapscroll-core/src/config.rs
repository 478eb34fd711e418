use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub paging: SnapConfig,
    #[serde(default)]
    pub tween: TweenSettings,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Paging configuration for a snap scroll surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Initial page (0-based). Clamped to `max_page`.
    #[serde(default)]
    pub page: usize,
    /// Highest page index (0-based)
    #[serde(default = "default_max_page")]
    pub max_page: usize,
    /// Width of one page in world units
    #[serde(default = "default_page_size")]
    pub page_size: f64,
    /// Minimum single-frame drag delta that counts as a flick
    #[serde(default = "default_scrollable_distance")]
    pub scrollable_distance: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            page: 0,
            max_page: default_max_page(),
            page_size: default_page_size(),
            scrollable_distance: default_scrollable_distance(),
        }
    }
}

impl SnapConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !self.page_size.is_finite() || self.page_size <= 0.0 {
            return Err(crate::Error::Config(format!(
                "paging.page_size must be positive, got {}",
                self.page_size
            )));
        }
        if !self.scrollable_distance.is_finite() || self.scrollable_distance < 0.0 {
            return Err(crate::Error::Config(format!(
                "paging.scrollable_distance must be non-negative, got {}",
                self.scrollable_distance
            )));
        }
        Ok(())
    }
}

/// Easing curve selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingCurve {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    #[default]
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
}

impl EasingCurve {
    /// Every curve in declaration order; the position is the curve's numeric tag
    pub const ALL: [EasingCurve; 22] = [
        EasingCurve::Linear,
        EasingCurve::InQuad,
        EasingCurve::OutQuad,
        EasingCurve::InOutQuad,
        EasingCurve::InCubic,
        EasingCurve::OutCubic,
        EasingCurve::InOutCubic,
        EasingCurve::InQuart,
        EasingCurve::OutQuart,
        EasingCurve::InOutQuart,
        EasingCurve::InQuint,
        EasingCurve::OutQuint,
        EasingCurve::InOutQuint,
        EasingCurve::InSine,
        EasingCurve::OutSine,
        EasingCurve::InOutSine,
        EasingCurve::InExpo,
        EasingCurve::OutExpo,
        EasingCurve::InOutExpo,
        EasingCurve::InCirc,
        EasingCurve::OutCirc,
        EasingCurve::InOutCirc,
    ];

    /// Look up a curve by numeric tag
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Numeric tag of this curve
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next curve in declaration order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            EasingCurve::Linear => "linear",
            EasingCurve::InQuad => "in_quad",
            EasingCurve::OutQuad => "out_quad",
            EasingCurve::InOutQuad => "in_out_quad",
            EasingCurve::InCubic => "in_cubic",
            EasingCurve::OutCubic => "out_cubic",
            EasingCurve::InOutCubic => "in_out_cubic",
            EasingCurve::InQuart => "in_quart",
            EasingCurve::OutQuart => "out_quart",
            EasingCurve::InOutQuart => "in_out_quart",
            EasingCurve::InQuint => "in_quint",
            EasingCurve::OutQuint => "out_quint",
            EasingCurve::InOutQuint => "in_out_quint",
            EasingCurve::InSine => "in_sine",
            EasingCurve::OutSine => "out_sine",
            EasingCurve::InOutSine => "in_out_sine",
            EasingCurve::InExpo => "in_expo",
            EasingCurve::OutExpo => "out_expo",
            EasingCurve::InOutExpo => "in_out_expo",
            EasingCurve::InCirc => "in_circ",
            EasingCurve::OutCirc => "out_circ",
            EasingCurve::InOutCirc => "in_out_circ",
        }
    }
}

impl fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingCurve {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.name() == wanted)
            .ok_or_else(|| crate::Error::Config(format!("unknown easing curve '{}'", s)))
    }
}

/// What a tween does when it reaches its end value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Stop at the end value
    #[default]
    None,
    /// Jump back to the start value and run again
    Loop,
    /// Swap start and end, then restart
    PingPong,
}

/// Tween timing and shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TweenSettings {
    /// Animation length in seconds
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Wait before each run starts animating, in seconds
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub curve: EasingCurve,
    #[serde(default, rename = "loop")]
    pub loop_mode: LoopMode,
}

impl Default for TweenSettings {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            delay: 0.0,
            curve: EasingCurve::default(),
            loop_mode: LoopMode::default(),
        }
    }
}

impl TweenSettings {
    /// Reject settings the per-frame path does not guard against
    pub fn validate(&self) -> crate::Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(crate::Error::Config(format!(
                "tween.duration must be positive, got {}",
                self.duration
            )));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(crate::Error::Config(format!(
                "tween.delay must be non-negative, got {}",
                self.delay
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frames per second for the interactive host
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Titles shown on page cards; missing titles fall back to "Page N"
    #[serde(default)]
    pub page_titles: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_fps: default_animation_fps(),
            page_titles: Vec::new(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snapscroll")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_page() -> usize {
    4
}

fn default_page_size() -> f64 {
    300.0
}

fn default_scrollable_distance() -> f64 {
    2.0
}

fn default_duration() -> f64 {
    0.5
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: AppConfig =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        config.paging.page = config.paging.page.min(config.paging.max_page);
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<PathBuf> {
        let config_path = Self::config_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.paging.validate()?;
        self.tween.validate()
    }

    /// Get the configuration file path
    /// Always uses ~/.config/snapscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snapscroll")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used by the interactive host
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("snapscroll.log")
    }

    /// Title for a page card
    pub fn page_title(&self, page: usize) -> String {
        self.ui
            .page_titles
            .get(page)
            .cloned()
            .unwrap_or_else(|| format!("Page {}", page + 1))
    }
}
