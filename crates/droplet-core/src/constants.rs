use glam::Vec3;

// Shared tuning constants for the water drop avatar. Front ends read the
// same values through `DeformerParams::default()` and `Appearance::default()`.

// Rest shape
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 64; // longitude subdivisions
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 64; // latitude subdivisions

// Surface vibration
pub const DISPLACEMENT_GAIN: f32 = 0.1; // noise sample -> radial offset
pub const BASE_NOISE_SCALE: f64 = 0.1; // spatial frequency
pub const BASE_NOISE_SPEED: f64 = 0.002; // temporal frequency, per millisecond

// Idle state of the avatar transform/material
pub const BASE_SCALE: f32 = 0.5; // uniform scale at rest
pub const BASE_TINT_HEX: u32 = 0x6495ED; // cornflower blue

// Tween timing (seconds)
pub const TINT_TWEEN_SEC: f32 = 0.5;
pub const RESET_TWEEN_SEC: f32 = 0.5;

// Idle bob
pub const BOB_AMPLITUDE: f32 = 0.05; // world units above rest
pub const BOB_HALF_PERIOD_SEC: f32 = 0.5; // one leg of the yoyo

// Mood tints
pub const HAPPY_TINT: [f32; 3] = [0.0, 1.0, 0.0]; // green
pub const SAD_TINT: [f32; 3] = [0.0, 0.0, 1.0]; // blue
pub const EXCITED_TINT: [f32; 3] = [1.0, 0.5, 0.0]; // orange

// Host presentation defaults
pub const MATERIAL_OPACITY: f32 = 0.9;
pub const MATERIAL_METALNESS: f32 = 0.1;
pub const MATERIAL_ROUGHNESS: f32 = 0.1;
pub const MATERIAL_TRANSMISSION: f32 = 0.5;
pub const MATERIAL_CLEARCOAT: f32 = 1.0;
pub const MATERIAL_CLEARCOAT_ROUGHNESS: f32 = 0.0;
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [0.0, 10.0, 5.0];
pub const CAMERA_Z: f32 = 3.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;

/// Convert a packed `0xRRGGBB` color into normalized RGB.
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
pub fn base_tint() -> Vec3 {
    rgb_from_hex(BASE_TINT_HEX)
}
