//! Behavior parameters, read-only for the duration of a run.

use crate::{FlockError, FlockResult};

/// Interaction radii, blind angles, weights and dynamics constants shared by
/// every agent.
///
/// Blind angles are in degrees; the perceived field is `360 - angle` wide.
/// Defaults reproduce the reference configuration: a small cohesion zone
/// inside a wider alignment zone inside a wide separation zone, equal
/// weights, cruise speed 2.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockParams {
    pub cohesion_radius:   f64,
    pub alignment_radius:  f64,
    pub separation_radius: f64,

    pub cohesion_angle:   f64,
    pub alignment_angle:  f64,
    pub separation_angle: f64,

    pub cohesion_weight:   f64,
    pub alignment_weight:  f64,
    pub separation_weight: f64,

    /// Speed the relaxation term pulls every agent toward.
    pub cruise_speed: f64,

    /// Relaxation time constant `τ`.  Must be strictly positive.
    pub relaxation_time: f64,

    /// Standard deviation of the per-axis Gaussian noise added every tick.
    pub noise_std_dev: f64,

    /// Wall distance below which the border-avoidance force kicks in
    /// (bounded worlds only).
    pub border_distance: f64,

    /// Magnitude of the border-avoidance force.  Zero switches wall handling
    /// off entirely, step reflection included.
    pub border_strength: f64,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            cohesion_radius:   2.0,
            alignment_radius:  5.0,
            separation_radius: 15.0,

            cohesion_angle:   60.0,
            alignment_angle:  60.0,
            separation_angle: 90.0,

            cohesion_weight:   1.0 / 3.0,
            alignment_weight:  1.0 / 3.0,
            separation_weight: 1.0 / 3.0,

            cruise_speed:    2.0,
            relaxation_time: 1.0,
            noise_std_dev:   0.0,
            border_distance: 1.0,
            border_strength: 1.0,
        }
    }
}

impl FlockParams {
    /// Reject values that would make the force computation meaningless.
    ///
    /// Blind angles may be any finite number (they are reduced modulo 360).
    pub fn validate(&self) -> FlockResult<()> {
        let non_negative = [
            ("cohesion_radius", self.cohesion_radius),
            ("alignment_radius", self.alignment_radius),
            ("separation_radius", self.separation_radius),
            ("cohesion_weight", self.cohesion_weight),
            ("alignment_weight", self.alignment_weight),
            ("separation_weight", self.separation_weight),
            ("cruise_speed", self.cruise_speed),
            ("noise_std_dev", self.noise_std_dev),
            ("border_distance", self.border_distance),
            ("border_strength", self.border_strength),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FlockError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("cohesion_angle", self.cohesion_angle),
            ("alignment_angle", self.alignment_angle),
            ("separation_angle", self.separation_angle),
        ] {
            if !value.is_finite() {
                return Err(FlockError::Config(format!("{name} must be finite, got {value}")));
            }
        }

        if !(self.relaxation_time.is_finite() && self.relaxation_time > 0.0) {
            return Err(FlockError::Config(format!(
                "relaxation_time must be finite and positive, got {}",
                self.relaxation_time
            )));
        }
        Ok(())
    }
}
