use crate::geometry::alias::Point;
use crate::scene::camera::{Camera, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_ZOOM};
use log::info;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SETTINGS_PATH: &str = "assets/settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("io problem while reading settings {path:?}: {what:?}")]
    Io { path: PathBuf, what: String },
    #[error("malformed settings {path:?}: {what:?}")]
    Format { path: PathBuf, what: String },
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub textures: TextureSettings,
    pub light_orbit: OrbitSettings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings { title: "Still Life".to_string(), width: 1100, height: 800 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub speed: f32,
    pub sensitivity: f32,
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings { position: [0.0, 0.0, 3.0], speed: DEFAULT_SPEED, sensitivity: DEFAULT_SENSITIVITY, zoom: DEFAULT_ZOOM }
    }
}

impl CameraSettings {
    #[must_use]
    pub fn make_camera(&self) -> Camera {
        let [x, y, z] = self.position;
        Camera::new(Point::new(x, y, z))
            .with_speed(self.speed.max(0.0))
            .with_sensitivity(self.sensitivity.max(0.0))
            .with_zoom(self.zoom)
    }
}

/// Image paths. Relative ones are taken against the resource root, see [`Settings::with_resource_root`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    pub table: PathBuf,
    pub label: PathBuf,
    pub hat: PathBuf,
}

impl Default for TextureSettings {
    fn default() -> Self {
        TextureSettings {
            table: PathBuf::from("assets/textures/wood.png"),
            label: PathBuf::from("assets/textures/label.png"),
            hat: PathBuf::from("assets/textures/hat.png"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub radius: f32,
    pub degrees_per_second: f32,
}

impl TextureSettings {
    #[must_use]
    fn with_resource_root(self, root: &Path) -> Self {
        TextureSettings {
            table: resolve_resource_path(root, self.table),
            label: resolve_resource_path(root, self.label),
            hat: resolve_resource_path(root, self.hat),
        }
    }
}

/// Relative paths are joined onto `root`, absolute ones are kept as is.
#[must_use]
pub fn resolve_resource_path(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

impl Default for OrbitSettings {
    fn default() -> Self {
        OrbitSettings { radius: 3.0, degrees_per_second: 30.0 }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io { path: path.to_path_buf(), what: e.to_string() })?;
        Self::parse(&content).map_err(|e| SettingsError::Format { path: path.to_path_buf(), what: e.to_string() })
    }

    /// Like [`Settings::load`], but an absent file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Settings, SettingsError> {
        match std::fs::metadata(path) {
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("settings file {path:?} not found, using defaults");
                Ok(Settings::default())
            }
            _ => Self::load(path),
        }
    }

    pub fn parse(json: &str) -> Result<Settings, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Anchors every relative file reference at `root`; usually the directory
    /// holding the executable, next to which the build copies `assets/`.
    #[must_use]
    pub fn with_resource_root(self, root: &Path) -> Self {
        Settings { textures: self.textures.with_resource_root(root), ..self }
    }
}
