use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "break_overlay.json";

/// Ambient options of the overlay. The break length is fixed and not part of
/// the settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Pause playing media players while the break is shown and resume them
    /// afterwards. Requires `playerctl`.
    #[serde(default)]
    pub pause_media: bool,
    /// Fade the overlay in when it opens.
    #[serde(default = "default_true")]
    pub fade_in: bool,
    /// Let the Escape key end the break early.
    #[serde(default = "default_true")]
    pub dismiss_on_escape: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            pause_media: false,
            fade_in: true,
            dismiss_on_escape: true,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn log_path(&self) -> Option<std::path::PathBuf> {
        self.log_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(std::path::PathBuf::from)
    }
}
