//! Command-line argument parsing.

use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use droplet_core::Mood;

/// Mood cue fired by the story at 4.2 s when no cues are given.
pub const DEFAULT_CUE: &str = "excited@4.2";

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "droplet-native")]
#[command(about = "Steps the water drop avatar on a simulated clock and logs its state", long_about = None)]
pub struct Args {
    /// Simulated duration
    #[arg(long, value_name = "SECONDS", default_value = "8")]
    pub seconds: f32,

    /// Simulated frame rate
    #[arg(long, value_name = "HZ", default_value = "60")]
    pub fps: u32,

    /// Noise permutation seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Mood cue as KIND@SECONDS, e.g. happy@1.5; may be repeated
    #[arg(long = "cue", value_name = "KIND@SECONDS", default_value = DEFAULT_CUE)]
    pub cues: Vec<Cue>,

    /// Log a state line every N frames
    #[arg(long, value_name = "FRAMES", default_value = "30")]
    pub report_every: u32,
}

/// A mood request scheduled at a point on the simulated clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub mood: Mood,
    pub at_sec: f32,
}

impl FromStr for Cue {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, at) = s
            .split_once('@')
            .with_context(|| format!("cue {s:?} is not KIND@SECONDS"))?;
        let mood: Mood = kind.parse()?;
        let at_sec: f32 = at
            .trim()
            .parse()
            .with_context(|| format!("cue {s:?} has a bad time"))?;
        anyhow::ensure!(
            at_sec.is_finite() && at_sec >= 0.0,
            "cue {s:?} must fire at a non-negative time"
        );
        Ok(Self { mood, at_sec })
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.mood, self.at_sec)
    }
}

impl Args {
    /// Cues ordered by firing time.
    pub fn sorted_cues(&self) -> Vec<Cue> {
        let mut cues = self.cues.clone();
        cues.sort_by(|a, b| a.at_sec.total_cmp(&b.at_sec));
        cues
    }

    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }

    pub fn frame_count(&self) -> u64 {
        (self.seconds.max(0.0) as f64 * self.fps.max(1) as f64).ceil() as u64
    }
}
