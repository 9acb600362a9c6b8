use clap::Parser;
use droplet_core::{DeformerParams, NoiseField, SurfaceDeformer};

mod cli;

use cli::{Args, Cue};

fn radius_range(deformer: &SurfaceDeformer) -> (f32, f32) {
    deformer
        .mesh()
        .positions()
        .iter()
        .map(|p| p.length())
        .fold((f32::MAX, f32::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)))
}

fn report(frame: u64, now_ms: f64, deformer: &SurfaceDeformer) {
    let (r_min, r_max) = radius_range(deformer);
    let s = deformer.scale();
    let t = deformer.tint();
    log::info!(
        "frame {frame:>5} t={:>6.2}s mood={:<7} scale=({:.3},{:.3},{:.3}) tint=({:.2},{:.2},{:.2}) \
         bob={:+.3} noise={:.3}/{:.4} radius=[{r_min:.3},{r_max:.3}]",
        now_ms / 1000.0,
        deformer.active_mood().map_or("-", |m| m.as_str()),
        s.x,
        s.y,
        s.z,
        t.x,
        t.y,
        t.z,
        deformer.offset().y,
        deformer.noise_scale(),
        deformer.noise_speed(),
    );
}

fn run(args: &Args) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be positive");
    let noise = match args.seed {
        Some(seed) => NoiseField::from_seed(seed),
        None => NoiseField::from_entropy(),
    };
    let mut deformer = SurfaceDeformer::new(DeformerParams::default(), noise);
    log::info!(
        "water drop: {} vertices, {} triangles",
        deformer.base_mesh().vertex_count(),
        deformer.base_mesh().triangle_count()
    );

    let cues = args.sorted_cues();
    let mut pending: &[Cue] = &cues;
    let frame_ms = args.frame_ms();
    let report_every = args.report_every.max(1) as u64;

    for frame in 0..=args.frame_count() {
        let now_ms = frame as f64 * frame_ms;
        while let Some((cue, rest)) = pending.split_first() {
            if (cue.at_sec as f64) * 1000.0 > now_ms {
                break;
            }
            log::info!("cue {cue}");
            deformer.apply_mood(cue.mood);
            pending = rest;
        }
        deformer.advance(now_ms);
        if frame % report_every == 0 {
            report(frame, now_ms, &deformer);
        }
    }

    for cue in pending {
        log::warn!("cue {cue} never fired (run ends at {}s)", args.seconds);
    }
    log::info!(
        "finished: mood={} settled={}",
        deformer.active_mood().map_or("-", |m| m.as_str()),
        deformer.is_settled()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    run(&args)
}
