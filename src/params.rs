/*
 * Galaxy Parameters Module
 *
 * This module defines the GalaxyParams struct that contains all the
 * adjustable parameters describing one galaxy's shape and appearance.
 * These parameters can be modified through the UI. It also provides the
 * domain ranges and slider steps, hex color parsing, and a commit tracker
 * used to decide when an edit is finished and the galaxy must be rebuilt.
 */

use std::ops::RangeInclusive;

use nannou::color::Rgb;

use crate::error::{GalaxyError, GalaxyResult};

// Parameters for one galaxy that can be adjusted via UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyParams {
    pub count: usize,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: Rgb,
    pub outside_color: Rgb,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: Rgb::new(1.0, 96.0 / 255.0, 48.0 / 255.0),    // #ff6030
            outside_color: Rgb::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0), // #1b3984
        }
    }
}

// Slider bounds for one numeric parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamControl {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamControl {
    fn check(&self, value: f64) -> GalaxyResult<()> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(())
        } else {
            Err(GalaxyError::OutOfDomain {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

pub const COUNT: ParamControl = ParamControl { name: "count", min: 100.0, max: 1_000_000.0, step: 100.0 };
pub const SIZE: ParamControl = ParamControl { name: "size", min: 0.001, max: 0.1, step: 0.001 };
pub const RADIUS: ParamControl = ParamControl { name: "radius", min: 0.01, max: 20.0, step: 0.01 };
pub const BRANCHES: ParamControl = ParamControl { name: "branches", min: 2.0, max: 20.0, step: 1.0 };
pub const SPIN: ParamControl = ParamControl { name: "spin", min: -5.0, max: 5.0, step: 0.001 };
pub const RANDOMNESS: ParamControl = ParamControl { name: "randomness", min: 0.0, max: 2.0, step: 0.001 };
pub const RANDOMNESS_POWER: ParamControl =
    ParamControl { name: "randomnessPower", min: 1.0, max: 10.0, step: 0.001 };

impl GalaxyParams {
    // Numeric fields paired with their controls, in panel order
    fn numeric_values(&self) -> [(ParamControl, f64); 7] {
        [
            (COUNT, self.count as f64),
            (SIZE, self.size as f64),
            (RADIUS, self.radius as f64),
            (BRANCHES, self.branches as f64),
            (SPIN, self.spin as f64),
            (RANDOMNESS, self.randomness as f64),
            (RANDOMNESS_POWER, self.randomness_power as f64),
        ]
    }

    // Returns the first field lying outside its domain, if any
    // Colors are checked per channel against [0, 1]
    pub fn validate(&self) -> GalaxyResult<()> {
        for (control, value) in self.numeric_values() {
            control.check(value)?;
        }

        let channel = ParamControl { name: "color", min: 0.0, max: 1.0, step: 0.0 };
        for color in [self.inside_color, self.outside_color] {
            for c in [color.red, color.green, color.blue] {
                channel.check(c as f64)?;
            }
        }
        Ok(())
    }

    // Copy of these parameters with every numeric field clamped to its domain
    pub fn clamped(&self) -> Self {
        let clamp_color = |c: Rgb| {
            Rgb::new(
                c.red.clamp(0.0, 1.0),
                c.green.clamp(0.0, 1.0),
                c.blue.clamp(0.0, 1.0),
            )
        };

        Self {
            count: COUNT.clamp(self.count as f64) as usize,
            size: SIZE.clamp(self.size as f64) as f32,
            radius: RADIUS.clamp(self.radius as f64) as f32,
            branches: BRANCHES.clamp(self.branches as f64) as u32,
            spin: SPIN.clamp(self.spin as f64) as f32,
            randomness: RANDOMNESS.clamp(self.randomness as f64) as f32,
            randomness_power: RANDOMNESS_POWER.clamp(self.randomness_power as f64) as f32,
            inside_color: clamp_color(self.inside_color),
            outside_color: clamp_color(self.outside_color),
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_count_range() -> RangeInclusive<usize> {
        COUNT.min as usize..=COUNT.max as usize
    }

    pub fn get_branches_range() -> RangeInclusive<u32> {
        BRANCHES.min as u32..=BRANCHES.max as u32
    }

    pub fn get_f32_range(control: &ParamControl) -> RangeInclusive<f32> {
        control.min as f32..=control.max as f32
    }
}

// Parses `#rrggbb` (or the `#rgb` shorthand) into a color with channels in [0, 1]
pub fn parse_hex_color(hex: &str) -> GalaxyResult<Rgb> {
    let invalid = || GalaxyError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| invalid())
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

// Remembers the last committed parameter set so the UI can tell
// an in-progress edit apart from a finished one
#[derive(Debug, Default)]
pub struct CommitTracker {
    previous_values: Option<GalaxyParams>,
}

impl CommitTracker {
    // Record the given values as the committed state
    pub fn take_snapshot(&mut self, params: &GalaxyParams) {
        self.previous_values = Some(*params);
    }

    // Check whether the edited values differ from the last commit
    pub fn detect_changes(&self, params: &GalaxyParams) -> bool {
        match &self.previous_values {
            Some(prev) => prev != params,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_inside_their_domains() {
        assert_eq!(GalaxyParams::default().validate(), Ok(()));
    }

    #[test]
    fn default_colors_match_hex_literals() {
        let params = GalaxyParams::default();
        assert_eq!(parse_hex_color("#ff6030").unwrap(), params.inside_color);
        assert_eq!(parse_hex_color("#1b3984").unwrap(), params.outside_color);
    }

    #[test]
    fn hex_shorthand_expands() {
        let color = parse_hex_color("#fff").unwrap();
        assert_eq!(color, Rgb::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["", "#12", "#12345g", "#1234567", "#ééé", "#+f+f+f", "#+ff"] {
            assert!(matches!(parse_hex_color(bad), Err(GalaxyError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn validate_reports_first_offending_field() {
        let params = GalaxyParams { branches: 1, spin: 9.0, ..Default::default() };
        match params.validate() {
            Err(GalaxyError::OutOfDomain { field, .. }) => assert_eq!(field, "branches"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_finite_values_are_out_of_domain() {
        let params = GalaxyParams { radius: f32::NAN, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn clamped_pulls_values_into_domain() {
        let params = GalaxyParams {
            count: 5,
            size: 1.0,
            radius: -3.0,
            branches: 40,
            spin: f32::NAN,
            randomness: 2.5,
            randomness_power: 0.0,
            inside_color: Rgb::new(2.0, -1.0, 0.5),
            ..Default::default()
        };
        let clamped = params.clamped();

        assert_eq!(clamped.count, 100);
        assert_eq!(clamped.size, 0.1);
        assert_eq!(clamped.radius, 0.01);
        assert_eq!(clamped.branches, 20);
        assert_eq!(clamped.spin, -5.0);
        assert_eq!(clamped.randomness, 2.0);
        assert_eq!(clamped.randomness_power, 1.0);
        assert_eq!(clamped.inside_color, Rgb::new(1.0, 0.0, 0.5));
        assert_eq!(clamped.validate(), Ok(()));
    }

    #[test]
    fn slider_ranges_match_editing_boundary() {
        assert_eq!(GalaxyParams::get_count_range(), 100..=1_000_000);
        assert_eq!(GalaxyParams::get_branches_range(), 2..=20);
        assert_eq!(GalaxyParams::get_f32_range(&SPIN), -5.0..=5.0);
        assert_eq!(COUNT.step, 100.0);
        assert_eq!(RANDOMNESS_POWER.step, 0.001);
    }

    #[test]
    fn commit_tracker_sees_uncommitted_edits() {
        let mut tracker = CommitTracker::default();
        let mut params = GalaxyParams::default();
        assert!(tracker.detect_changes(&params));

        tracker.take_snapshot(&params);
        assert!(!tracker.detect_changes(&params));

        params.spin = -1.5;
        assert!(tracker.detect_changes(&params));

        tracker.take_snapshot(&params);
        assert!(!tracker.detect_changes(&params));
    }
}
