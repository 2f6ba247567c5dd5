/*
 * Configuration Module
 *
 * Fixed application settings: window sizing, camera projection, orbit
 * constants, the pixel density cap and the starting gradient colors.
 * The random seed may be supplied through the GALAXY_SEED environment
 * variable to make generation reproducible, and the starting colors through
 * GALAXY_INSIDE_COLOR / GALAXY_OUTSIDE_COLOR as hex strings.
 */

use nannou::prelude::*;

use crate::error::{GalaxyError, GalaxyResult};
use crate::params::{parse_hex_color, GalaxyParams};

pub const SEED_VAR: &str = "GALAXY_SEED";
pub const INSIDE_COLOR_VAR: &str = "GALAXY_INSIDE_COLOR";
pub const OUTSIDE_COLOR_VAR: &str = "GALAXY_OUTSIDE_COLOR";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // Fraction of the primary monitor covered by the window
    pub window_fraction: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub initial_camera_position: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    // Closest the orbit controls may dolly toward the target
    pub min_distance: f32,
    pub max_pixel_density: f32,
    pub seed: Option<u64>,
    pub inside_color: String,
    pub outside_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_fraction: 0.8,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            initial_camera_position: vec3(3.0, 3.0, 3.0),
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 0.5,
            max_pixel_density: 2.0,
            seed: None,
            inside_color: "#ff6030".to_string(),
            outside_color: "#1b3984".to_string(),
        }
    }
}

impl AppConfig {
    // Defaults overridden by whichever variables are set
    pub fn from_env() -> GalaxyResult<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(SEED_VAR) {
            config.seed = Some(parse_seed(&value)?);
        }
        if let Ok(value) = std::env::var(INSIDE_COLOR_VAR) {
            config.inside_color = value;
        }
        if let Ok(value) = std::env::var(OUTSIDE_COLOR_VAR) {
            config.outside_color = value;
        }

        // Reject bad colors here rather than at first generation
        config.initial_params()?;
        Ok(config)
    }

    // Parameters the first galaxy is generated from
    pub fn initial_params(&self) -> GalaxyResult<GalaxyParams> {
        Ok(GalaxyParams {
            inside_color: parse_hex_color(&self.inside_color)?,
            outside_color: parse_hex_color(&self.outside_color)?,
            ..GalaxyParams::default()
        })
    }
}

fn parse_seed(value: &str) -> GalaxyResult<u64> {
    value.trim().parse().map_err(|_| GalaxyError::InvalidConfig {
        name: SEED_VAR,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_decimal() {
        assert_eq!(parse_seed(" 42 "), Ok(42));
    }

    #[test]
    fn default_colors_give_default_params() {
        let params = AppConfig::default().initial_params().unwrap();
        assert_eq!(params, GalaxyParams::default());
    }

    #[test]
    fn custom_colors_reach_initial_params() {
        let config = AppConfig { inside_color: "#fff".into(), ..AppConfig::default() };
        let params = config.initial_params().unwrap();
        assert_eq!(params.inside_color, nannou::color::Rgb::new(1.0, 1.0, 1.0));
        assert_eq!(params.outside_color, GalaxyParams::default().outside_color);
    }

    #[test]
    fn bad_color_is_reported() {
        let config = AppConfig { outside_color: "blue".into(), ..AppConfig::default() };
        assert_eq!(
            config.initial_params(),
            Err(GalaxyError::InvalidColor("blue".into()))
        );
    }

    #[test]
    fn bad_seed_is_reported() {
        assert_eq!(
            parse_seed("forty-two"),
            Err(GalaxyError::InvalidConfig { name: SEED_VAR, value: "forty-two".into() })
        );
    }
}
