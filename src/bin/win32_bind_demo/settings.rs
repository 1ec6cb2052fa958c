/*
 * Persistent settings for the demo window: title, size, font and colors.
 * They live as JSON in the per-user local configuration directory; a missing
 * file means "use the defaults", and the defaults are written back so the
 * user has a file to edit.
 */
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use win32_bind::ColorRef;

pub const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Json(serde_json::Error),
    NoConfigDirectory,
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Json(err)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {e}"),
            SettingsError::Json(e) => write!(f, "Settings JSON error: {e}"),
            SettingsError::NoConfigDirectory => {
                write!(f, "Could not determine the local configuration directory")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
            SettingsError::NoConfigDirectory => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub window_title: String,
    pub width: i32,
    pub height: i32,
    pub font_face: String,
    /// Character height in logical units; negative selects by glyph height.
    pub font_height: i32,
    pub font_weight: i32,
    pub text_color: ColorRef,
    pub background_color: ColorRef,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            window_title: "win32_bind demo".to_string(),
            width: 640,
            height: 400,
            font_face: "Segoe UI".to_string(),
            font_height: -24,
            font_weight: win32_bind::gdi32::FW_NORMAL,
            text_color: ColorRef::rgb(0x20, 0x20, 0x20),
            background_color: ColorRef::rgb(0xf4, 0xf4, 0xf4),
        }
    }
}

impl DemoSettings {
    /*
     * Reads settings from `path`. Returns `Ok(None)` when the file does not
     * exist; fields missing from the file take their default values.
     */
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        log::trace!("DemoSettings: Loading from {path:?}");
        if !path.exists() {
            log::debug!("DemoSettings: {path:?} does not exist");
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        let settings: DemoSettings = serde_json::from_str(&contents)?;
        log::debug!("DemoSettings: Loaded {settings:?}");
        Ok(Some(settings))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!("DemoSettings: Saved to {path:?}");
        Ok(())
    }

    /// Loads `path`, or writes and returns the defaults when it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        match DemoSettings::load_from(path)? {
            Some(settings) => Ok(settings),
            None => {
                let settings = DemoSettings::default();
                settings.save_to(path)?;
                Ok(settings)
            }
        }
    }
}

/*
 * The application's local (non-roaming) configuration directory, created on
 * demand. Without an organization qualifier it lands directly under e.g.
 * AppData/Local on Windows.
 */
pub fn config_local_dir(app_name: &str) -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", app_name).ok_or(SettingsError::NoConfigDirectory)?;
    let dir = dirs.config_local_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        log::debug!("DemoSettings: Created config directory {dir:?}");
    }
    Ok(dir.to_path_buf())
}
