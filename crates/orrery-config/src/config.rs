//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "orrery";
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Rendering settings.
    pub render: RenderConfig,
    /// Orbital parameters of the sun, earth and moon.
    pub scene: SceneConfig,
    /// Decorative starfield generation.
    pub starfield: StarfieldConfig,
    /// Orbit camera settings.
    pub camera: CameraConfig,
    /// Animation toggle settings.
    pub animation: AnimationConfig,
    /// Point light and material settings for the planet shader.
    pub lighting: LightingConfig,
    /// Mesh sources for each drawable model.
    pub models: ModelsConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
    /// Window title.
    pub title: String,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Background clear color (linear RGB).
    pub clear_color: [f32; 3],
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Directory to load `sun.wgsl` / `planet.wgsl` from. Embedded shaders are
    /// used when unset.
    pub shader_dir: Option<PathBuf>,
}

/// Orbital parameters for the three named bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Fixed world position of the sun.
    pub sun_position: [f32; 3],
    /// Uniform scale applied to the sun model.
    pub sun_scale: f32,
    /// Distance between the earth and the sun.
    pub earth_orbit_radius: f32,
    /// Uniform scale applied to the earth model.
    pub earth_scale: f32,
    /// Earth self-rotation axis (normalized on use).
    pub earth_spin_axis: [f32; 3],
    /// Earth self-rotation rate in degrees per simulated second.
    pub earth_spin_deg_per_sec: f32,
    /// Distance between the moon and the earth.
    pub moon_orbit_radius: f32,
    /// Uniform scale applied to the moon model.
    pub moon_scale: f32,
}

/// Starfield generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars.
    pub count: u32,
    /// Half-width of the sampling cube centered on the sun.
    pub half_extent: f32,
    /// Minimum distance from the sun and from the earth's initial position.
    pub exclusion_radius: f32,
    /// Uniform scale applied to each star model.
    pub star_scale: f32,
    /// RNG seed. The same seed always yields the same starfield.
    pub seed: u64,
    /// Rejection sampling attempts per star before falling back.
    pub max_attempts: u32,
}

/// Orbit camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting camera position.
    pub position: [f32; 3],
    /// Point the camera orbits around and looks at.
    pub target: [f32; 3],
    /// Distance kept from the target while orbiting.
    pub orbit_radius: f32,
    /// Degrees rotated per frame while an orbit key is held.
    pub rotate_angle_deg: f32,
    /// Vertical field of view in degrees.
    pub zoom_deg: f32,
}

/// Animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Whether the orbits move at startup.
    pub start_enabled: bool,
    /// Minimum seconds between two accepted animation toggles.
    pub toggle_cooldown: f32,
}

/// Point light (located at the sun) and material parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Ambient light color.
    pub ambient: [f32; 3],
    /// Diffuse light color.
    pub diffuse: [f32; 3],
    /// Specular light color.
    pub specular: [f32; 3],
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// Factor applied to the light-to-surface distance before attenuation.
    /// Planet distances are ten times the attenuation terms' native units.
    pub distance_scale: f32,
    /// Specular exponent of the planet material.
    pub shininess: f32,
}

/// Where the mesh for a model comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ModelSource {
    /// Procedurally generated icosphere.
    Icosphere {
        /// Subdivision passes applied to the base icosahedron.
        subdivisions: u32,
        /// Radius of the generated sphere in model units.
        radius: f32,
        /// Linear RGBA vertex color.
        color: [f32; 4],
    },
    /// RON-serialized mesh file.
    File(PathBuf),
}

/// Mesh sources for each drawable model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelsConfig {
    pub sun: ModelSource,
    pub earth: ModelSource,
    pub moon: ModelSource,
    pub star: ModelSource,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a JSON log file in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 720,
            vsync: true,
            title: "Solar System".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.1, 0.1, 0.1],
            near: 0.1,
            far: 1000.0,
            shader_dir: None,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sun_position: [0.0, -1.0, 0.0],
            sun_scale: 2.0,
            earth_orbit_radius: 100.0,
            earth_scale: 0.1,
            earth_spin_axis: [0.1, 1.0, 0.0],
            earth_spin_deg_per_sec: 1.5 * -50.0,
            moon_orbit_radius: 20.0,
            moon_scale: 0.1,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 800,
            half_extent: 50.0,
            exclusion_radius: 10.0,
            star_scale: 0.09,
            seed: 1,
            max_attempts: 10_000,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 30.0],
            target: [0.0, 0.0, 0.0],
            orbit_radius: 30.0,
            rotate_angle_deg: 1.0,
            zoom_deg: 45.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            start_enabled: true,
            toggle_cooldown: 0.2,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: [0.25, 0.25, 0.25],
            diffuse: [1.8, 1.8, 1.8],
            specular: [1.0, 1.0, 1.0],
            constant: 1.0,
            linear: 0.045,
            quadratic: 0.0075,
            distance_scale: 0.1,
            shininess: 32.0,
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            sun: ModelSource::Icosphere {
                subdivisions: 4,
                radius: 2.5,
                color: [1.0, 0.85, 0.35, 1.0],
            },
            earth: ModelSource::Icosphere {
                subdivisions: 4,
                radius: 20.0,
                color: [0.2, 0.45, 0.9, 1.0],
            },
            moon: ModelSource::Icosphere {
                subdivisions: 3,
                radius: 8.0,
                color: [0.7, 0.7, 0.68, 1.0],
            },
            star: ModelSource::Icosphere {
                subdivisions: 1,
                radius: 2.0,
                color: [0.95, 0.95, 1.0, 1.0],
            },
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

// --- Directories ---

impl Config {
    /// Platform configuration directory (`<config_dir>/orrery`).
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Directory for log files, next to the config file.
    pub fn log_dir(config_dir: &Path) -> PathBuf {
        config_dir.join("logs")
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there first
    /// when the file does not exist.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            return Ok(config);
        }

        let config = read_config(&config_path)?;
        log::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Write `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_err)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }
}

// --- Validation ---

/// Most subdivision passes a procedural model may request.
const MAX_ICOSPHERE_SUBDIVISIONS: u32 = 7;

impl Config {
    /// Reject values the scene cannot be built from: non-finite numbers,
    /// non-positive sizes and an empty view frustum. Run after CLI overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        check(w.width > 0 && w.height > 0, "window", "size must be non-zero")?;

        let r = &self.render;
        finite("render.clear_color", &r.clear_color)?;
        positive("render.near", r.near)?;
        check(
            r.far.is_finite() && r.far > r.near,
            "render.far",
            "must be finite and beyond render.near",
        )?;

        let sc = &self.scene;
        finite("scene.sun_position", &sc.sun_position)?;
        positive("scene.sun_scale", sc.sun_scale)?;
        non_negative("scene.earth_orbit_radius", sc.earth_orbit_radius)?;
        positive("scene.earth_scale", sc.earth_scale)?;
        finite("scene.earth_spin_axis", &sc.earth_spin_axis)?;
        check(
            sc.earth_spin_axis.iter().any(|&c| c != 0.0),
            "scene.earth_spin_axis",
            "must not be the zero vector",
        )?;
        finite("scene.earth_spin_deg_per_sec", &[sc.earth_spin_deg_per_sec])?;
        non_negative("scene.moon_orbit_radius", sc.moon_orbit_radius)?;
        positive("scene.moon_scale", sc.moon_scale)?;

        let st = &self.starfield;
        non_negative("starfield.half_extent", st.half_extent)?;
        non_negative("starfield.exclusion_radius", st.exclusion_radius)?;
        positive("starfield.star_scale", st.star_scale)?;

        let c = &self.camera;
        finite("camera.position", &c.position)?;
        finite("camera.target", &c.target)?;
        positive("camera.orbit_radius", c.orbit_radius)?;
        finite("camera.rotate_angle_deg", &[c.rotate_angle_deg])?;
        check(
            c.zoom_deg > 0.0 && c.zoom_deg < 180.0,
            "camera.zoom_deg",
            "must be between 0 and 180 degrees",
        )?;

        non_negative("animation.toggle_cooldown", self.animation.toggle_cooldown)?;

        let l = &self.lighting;
        finite("lighting.ambient", &l.ambient)?;
        finite("lighting.diffuse", &l.diffuse)?;
        finite("lighting.specular", &l.specular)?;
        non_negative("lighting.constant", l.constant)?;
        non_negative("lighting.linear", l.linear)?;
        non_negative("lighting.quadratic", l.quadratic)?;
        check(
            l.constant + l.linear + l.quadratic > 0.0,
            "lighting",
            "attenuation terms must not all be zero",
        )?;
        non_negative("lighting.distance_scale", l.distance_scale)?;
        non_negative("lighting.shininess", l.shininess)?;

        let m = &self.models;
        for (field, source) in [
            ("models.sun", &m.sun),
            ("models.earth", &m.earth),
            ("models.moon", &m.moon),
            ("models.star", &m.star),
        ] {
            if let ModelSource::Icosphere {
                subdivisions,
                radius,
                color,
            } = source
            {
                check(
                    *subdivisions <= MAX_ICOSPHERE_SUBDIVISIONS,
                    field,
                    "too many icosphere subdivisions",
                )?;
                positive(field, *radius)?;
                finite(field, color)?;
            }
        }
        Ok(())
    }
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}

fn finite(field: &'static str, values: &[f32]) -> Result<(), ConfigError> {
    check(values.iter().all(|v| v.is_finite()), field, "must be finite")
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check(value.is_finite() && value > 0.0, field, "must be finite and positive")
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check(value.is_finite() && value >= 0.0, field, "must be finite and non-negative")
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
