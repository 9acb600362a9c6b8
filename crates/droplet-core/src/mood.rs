use crate::constants::{EXCITED_TINT, HAPPY_TINT, SAD_TINT};
use crate::error::DropletError;
use glam::{BVec3, Vec3};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Excited,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Sad, Mood::Excited];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
        }
    }

    pub fn preset(self) -> MoodPreset {
        match self {
            Mood::Happy => MoodPreset {
                scale: ScaleTarget::Uniform(1.2),
                leg_sec: 0.5,
                repeats: 3,
                noise_scale_factor: 2.0,
                noise_speed_factor: 2.0,
                tint: Vec3::from(HAPPY_TINT),
            },
            Mood::Sad => MoodPreset {
                scale: ScaleTarget::Vertical(0.8),
                leg_sec: 1.0,
                repeats: 1,
                noise_scale_factor: 0.5,
                noise_speed_factor: 0.5,
                tint: Vec3::from(SAD_TINT),
            },
            Mood::Excited => MoodPreset {
                scale: ScaleTarget::Uniform(1.3),
                leg_sec: 0.3,
                repeats: 5,
                noise_scale_factor: 3.0,
                noise_speed_factor: 3.0,
                tint: Vec3::from(EXCITED_TINT),
            },
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = DropletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(kind))
            .ok_or_else(|| DropletError::InvalidMoodKind(s.to_string()))
    }
}

/// Scale goal of a mood, as a multiple of the baseline scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleTarget {
    Uniform(f32),
    /// Only the vertical axis pulses; x and z ease back to the baseline.
    Vertical(f32),
}

impl ScaleTarget {
    pub fn resolve(self, base_scale: f32) -> Vec3 {
        match self {
            ScaleTarget::Uniform(f) => Vec3::splat(base_scale * f),
            ScaleTarget::Vertical(f) => Vec3::new(base_scale, base_scale * f, base_scale),
        }
    }

    /// Axes driven by the pulse.
    pub fn axes(self) -> BVec3 {
        match self {
            ScaleTarget::Uniform(_) => BVec3::TRUE,
            ScaleTarget::Vertical(_) => BVec3::new(false, true, false),
        }
    }
}

/// Everything one mood changes. Noise factors multiply the baseline noise
/// parameters; the scale pulse runs `repeats + 1` legs of `leg_sec` each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodPreset {
    pub scale: ScaleTarget,
    pub leg_sec: f32,
    pub repeats: u32,
    pub noise_scale_factor: f64,
    pub noise_speed_factor: f64,
    pub tint: Vec3,
}

impl MoodPreset {
    /// Length of the scale pulse in seconds.
    pub fn pulse_sec(&self) -> f32 {
        self.leg_sec * (self.repeats as f32 + 1.0)
    }
}
