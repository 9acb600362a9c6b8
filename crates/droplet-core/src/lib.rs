pub mod constants;
pub mod deformer;
pub mod error;
pub mod mesh;
pub mod mood;
pub mod noise;
pub mod state;
pub mod tween;

pub use constants::*;
pub use deformer::SurfaceDeformer;
pub use error::DropletError;
pub use mesh::{compute_vertex_normals, BaseMesh, LiveMesh, Vertex};
pub use mood::{Mood, MoodPreset, ScaleTarget};
pub use noise::NoiseField;
pub use state::{Appearance, BobParams, DeformerParams, DisplayState};
pub use tween::{Completion, Ease, Lerp, Repeat, Tween, TweenStatus};
