//! Per-frame surface vibration and mood animation of the avatar.
//!
//! Every frame the live mesh is rebuilt from the rest sphere: each vertex is
//! pushed along its radial direction by a noise sample taken at its scaled
//! rest position plus a time phase, then normals are recomputed. Building from
//! the rest shape keeps displacement bounded no matter how many frames run.

use crate::error::DropletError;
use crate::mesh::{compute_vertex_normals, BaseMesh, LiveMesh, Vertex};
use crate::mood::Mood;
use crate::noise::NoiseField;
use crate::state::{DeformerParams, DisplayState};
use crate::tween::{Completion, Repeat, Tween, TweenStatus};
use glam::{BVec3, Vec3};

pub struct SurfaceDeformer {
    params: DeformerParams,
    noise: NoiseField,
    base: BaseMesh,
    live: LiveMesh,
    state: DisplayState,
    last_ms: Option<f64>,
    phase: f64,
}

impl SurfaceDeformer {
    pub fn new(params: DeformerParams, noise: NoiseField) -> Self {
        let base = BaseMesh::sphere(params.radius, params.width_segments, params.height_segments);
        let live = LiveMesh::from_base(&base);
        let state = DisplayState::new(&params);
        log::debug!(
            "[deformer] sphere vertices={} triangles={}",
            base.vertex_count(),
            base.triangle_count()
        );
        Self {
            params,
            noise,
            base,
            live,
            state,
            last_ms: None,
            phase: 0.0,
        }
    }

    /// Default tunables with a deterministic noise table.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(DeformerParams::default(), NoiseField::from_seed(seed))
    }

    /// Step animation to the host's monotonic clock (milliseconds) and
    /// rebuild the live mesh. The first call only establishes the clock.
    pub fn advance(&mut self, now_ms: f64) {
        let dt_ms = match self.last_ms {
            None => 0.0,
            Some(last) if now_ms < last => {
                log::warn!("[deformer] clock went backwards ({now_ms:.3} < {last:.3})");
                0.0
            }
            Some(last) => now_ms - last,
        };
        self.last_ms = Some(self.last_ms.map_or(now_ms, |last| last.max(now_ms)));

        self.phase += dt_ms * self.state.noise_speed;
        self.step_tweens((dt_ms / 1000.0) as f32);
        self.displace();
    }

    /// Start a mood pulse, overriding whatever scale/tint animation is running.
    pub fn apply_mood(&mut self, mood: Mood) {
        let preset = mood.preset();
        let params = &self.params;
        let st = &mut self.state;

        st.generation += 1;
        st.mood = Some(mood);

        let target = preset.scale.resolve(params.base_scale);
        st.scale_axes = preset.scale.axes();
        st.scale_settle = (!st.scale_axes.all()).then(|| {
            Tween::new(st.scale, Vec3::splat(params.base_scale), params.reset_tween_sec)
        });
        st.scale_tween = Some(
            Tween::new(st.scale, target, preset.leg_sec)
                .repeat(Repeat::Count(preset.repeats))
                .yoyo(true)
                .on_complete(Completion::MoodFinished {
                    generation: st.generation,
                }),
        );
        st.tint_tween = Some(Tween::new(st.tint, preset.tint, params.tint_tween_sec));

        // Takes effect on the next advance, independent of the pulse.
        st.noise_scale = params.base_noise_scale * preset.noise_scale_factor;
        st.noise_speed = params.base_noise_speed * preset.noise_speed_factor;

        log::debug!(
            "[mood] {mood} generation={} pulse={:.2}s noise_scale={:.3} noise_speed={:.4}",
            st.generation,
            preset.pulse_sec(),
            st.noise_scale,
            st.noise_speed
        );
    }

    /// Parse and apply a mood by name.
    pub fn apply_mood_named(&mut self, kind: &str) -> Result<Mood, DropletError> {
        let mood: Mood = kind.parse()?;
        self.apply_mood(mood);
        Ok(mood)
    }

    fn step_tweens(&mut self, dt: f32) {
        let st = &mut self.state;

        st.bob.advance(dt);
        st.offset = Vec3::new(0.0, st.bob.value(), 0.0);

        step_channel(&mut st.tint_tween, &mut st.tint, dt);
        step_channel(&mut st.scale_settle, &mut st.scale, dt);
        let mut pulse = st.scale;
        let completion = step_channel(&mut st.scale_tween, &mut pulse, dt);
        st.scale = Vec3::select(st.scale_axes, pulse, st.scale);
        if let Some(Completion::MoodFinished { generation }) = completion {
            self.finish_mood(generation);
        }
    }

    fn finish_mood(&mut self, generation: u64) {
        let params = &self.params;
        let st = &mut self.state;
        if generation != st.generation {
            log::debug!(
                "[mood] ignoring stale completion generation={generation} current={}",
                st.generation
            );
            return;
        }
        log::debug!("[mood] generation={generation} finished, resetting to baseline");

        st.mood = None;
        st.noise_scale = params.base_noise_scale;
        st.noise_speed = params.base_noise_speed;
        st.scale_axes = BVec3::TRUE;
        st.scale_settle = None;
        st.scale_tween = Some(Tween::new(
            st.scale,
            Vec3::splat(params.base_scale),
            params.reset_tween_sec,
        ));
        st.tint_tween = Some(Tween::new(st.tint, params.base_tint, params.reset_tween_sec));
    }

    fn displace(&mut self) {
        let s = self.state.noise_scale;
        let t = self.phase;
        let gain = self.params.displacement_gain;

        for (out, rest) in self.live.positions.iter_mut().zip(self.base.positions()) {
            let n = self.noise.sample(
                rest.x as f64 * s + t,
                rest.y as f64 * s + t,
                rest.z as f64 * s + t,
            ) as f32;
            *out = rest.normalize_or_zero() * (rest.length() + n * gain);
        }

        // All positions must be final before any normal is summed.
        compute_vertex_normals(&self.live.positions, self.base.indices(), &mut self.live.normals);
    }

    pub fn params(&self) -> &DeformerParams {
        &self.params
    }

    pub fn base_mesh(&self) -> &BaseMesh {
        &self.base
    }

    pub fn mesh(&self) -> &LiveMesh {
        &self.live
    }

    pub fn indices(&self) -> &[u32] {
        self.base.indices()
    }

    pub fn write_vertices(&self, out: &mut Vec<Vertex>) {
        self.live.write_vertices(out);
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn noise_scale(&self) -> f64 {
        self.state.noise_scale
    }

    pub fn set_noise_scale(&mut self, noise_scale: f64) {
        self.state.noise_scale = noise_scale;
    }

    pub fn noise_speed(&self) -> f64 {
        self.state.noise_speed
    }

    pub fn set_noise_speed(&mut self, noise_speed: f64) {
        self.state.noise_speed = noise_speed;
    }

    /// Accumulated time offset fed to the noise field.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn tint(&self) -> Vec3 {
        self.state.tint
    }

    pub fn scale(&self) -> Vec3 {
        self.state.scale
    }

    pub fn offset(&self) -> Vec3 {
        self.state.offset
    }

    pub fn active_mood(&self) -> Option<Mood> {
        self.state.mood()
    }

    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }
}

// Advance one animated property; drops the tween once it has finished.
fn step_channel(slot: &mut Option<Tween<Vec3>>, value: &mut Vec3, dt: f32) -> Option<Completion> {
    let tween = slot.as_mut()?;
    let status = tween.advance(dt);
    *value = tween.value();
    if tween.is_finished() {
        *slot = None;
    }
    match status {
        TweenStatus::Completed(completion) => completion,
        TweenStatus::Running | TweenStatus::Idle => None,
    }
}
