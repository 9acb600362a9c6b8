//! Tunables and mutable display state shared with the front ends.
//!
//! These types avoid platform-specific APIs and are used on both native and
//! web targets. The web frontend reads them to set the host's mesh transform
//! and material each frame.

use crate::constants::*;
use crate::mood::Mood;
use crate::tween::{Ease, Repeat, Tween};
use glam::{BVec3, Vec3};

/// Idle vertical oscillation that runs regardless of mood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BobParams {
    pub amplitude: f32,
    pub half_period_sec: f32,
    pub ease: Ease,
}

impl Default for BobParams {
    fn default() -> Self {
        Self {
            amplitude: BOB_AMPLITUDE,
            half_period_sec: BOB_HALF_PERIOD_SEC,
            ease: Ease::SineInOut,
        }
    }
}

/// Deformation and animation tunables. `Default` reproduces the shipped look.
#[derive(Clone, Debug, PartialEq)]
pub struct DeformerParams {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub displacement_gain: f32,
    pub base_scale: f32,
    pub base_tint: Vec3,
    pub base_noise_scale: f64,
    pub base_noise_speed: f64,
    pub tint_tween_sec: f32,
    pub reset_tween_sec: f32,
    pub bob: BobParams,
}

impl Default for DeformerParams {
    fn default() -> Self {
        Self {
            radius: SPHERE_RADIUS,
            width_segments: SPHERE_WIDTH_SEGMENTS,
            height_segments: SPHERE_HEIGHT_SEGMENTS,
            displacement_gain: DISPLACEMENT_GAIN,
            base_scale: BASE_SCALE,
            base_tint: base_tint(),
            base_noise_scale: BASE_NOISE_SCALE,
            base_noise_speed: BASE_NOISE_SPEED,
            tint_tween_sec: TINT_TWEEN_SEC,
            reset_tween_sec: RESET_TWEEN_SEC,
            bob: BobParams::default(),
        }
    }
}

/// Host-side material, light and camera settings. The core never reads
/// these; they travel with the avatar so every host renders it alike.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    pub opacity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub transmission: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub directional_position: Vec3,
    pub camera_z: f32,
    pub camera_fovy_deg: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            opacity: MATERIAL_OPACITY,
            metalness: MATERIAL_METALNESS,
            roughness: MATERIAL_ROUGHNESS,
            transmission: MATERIAL_TRANSMISSION,
            clearcoat: MATERIAL_CLEARCOAT,
            clearcoat_roughness: MATERIAL_CLEARCOAT_ROUGHNESS,
            ambient_intensity: AMBIENT_INTENSITY,
            directional_intensity: DIRECTIONAL_INTENSITY,
            directional_position: Vec3::from(DIRECTIONAL_POSITION),
            camera_z: CAMERA_Z,
            camera_fovy_deg: CAMERA_FOVY_DEG,
        }
    }
}

/// Current transform, tint and noise parameters plus the tweens moving them.
#[derive(Clone, Debug)]
pub struct DisplayState {
    pub noise_scale: f64,
    pub noise_speed: f64,
    pub tint: Vec3,
    pub scale: Vec3,
    /// Bob offset added to the host's mesh position.
    pub offset: Vec3,
    pub(crate) mood: Option<Mood>,
    pub(crate) generation: u64,
    pub(crate) bob: Tween<f32>,
    pub(crate) scale_tween: Option<Tween<Vec3>>,
    pub(crate) scale_axes: BVec3,
    /// Eases the axes a pulse leaves alone back to the baseline.
    pub(crate) scale_settle: Option<Tween<Vec3>>,
    pub(crate) tint_tween: Option<Tween<Vec3>>,
}

impl DisplayState {
    pub fn new(params: &DeformerParams) -> Self {
        let bob = Tween::new(0.0, params.bob.amplitude, params.bob.half_period_sec)
            .repeat(Repeat::Forever)
            .yoyo(true)
            .ease(params.bob.ease);
        Self {
            noise_scale: params.base_noise_scale,
            noise_speed: params.base_noise_speed,
            tint: params.base_tint,
            scale: Vec3::splat(params.base_scale),
            offset: Vec3::ZERO,
            mood: None,
            generation: 0,
            bob,
            scale_tween: None,
            scale_axes: BVec3::TRUE,
            scale_settle: None,
            tint_tween: None,
        }
    }

    /// Mood whose pulse is still playing.
    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Number of moods applied so far; tags the latest pulse.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// No scale or tint tween is in flight.
    pub fn is_settled(&self) -> bool {
        self.scale_tween.is_none() && self.scale_settle.is_none() && self.tint_tween.is_none()
    }
}
