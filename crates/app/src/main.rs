//! Demo driver for the renderkit diagnostics layer.
//!
//! Simulates a few frames of a render loop without touching a real
//! graphics API: every "native call" is a canned result code routed
//! through the result-code checker, and all instrumentation flows through
//! the logging facility so the run can be replayed from the log file.
//!
//! ```text
//! renderkit-app [--log-file=PATH] [--frames=N] [--stages=geometry,lighting,post]
//! ```
//!
//! Option values may be double-quoted; asymmetric quoting is rejected.

use anyhow::Result;
use bitflags::bitflags;
use glam::Vec3;
use tracing::info;

use renderkit_core::{
    ensure_success, has_flag, log_on_failure, log_set_file_path, log_warning, math, strings,
    ScopedTimer, Timer,
};

bitflags! {
    /// Render stages enabled for a simulated frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct FrameStages: u32 {
        const GEOMETRY = 1 << 0;
        const LIGHTING = 1 << 1;
        const POST = 1 << 2;
    }
}

/// Command-line options accepted by the demo.
#[derive(Debug)]
struct Options {
    log_file: Option<String>,
    frames: u32,
    stages: FrameStages,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log_file: None,
            frames: 3,
            stages: FrameStages::all(),
        }
    }
}

fn parse_options() -> Options {
    let mut options = Options::default();

    for arg in std::env::args().skip(1) {
        let Some((key, value)) = arg.split_once('=') else {
            log_warning(format!("ignoring malformed argument '{arg}'"));
            continue;
        };

        let mut value = value.to_owned();
        if !strings::remove_quotes(&mut value) {
            log_warning(format!("asymmetric quoting in '{arg}', ignoring"));
            continue;
        }

        match key {
            "--log-file" => options.log_file = Some(value),
            "--frames" => match value.parse() {
                Ok(frames) => options.frames = frames,
                Err(_) => log_warning(format!("invalid frame count '{value}'")),
            },
            "--stages" => options.stages = parse_stages(&value),
            _ if strings::starts_with(key, "--") => {
                log_warning(format!("unknown option '{key}'"));
            }
            _ => log_warning(format!("ignoring positional argument '{arg}'")),
        }
    }

    options
}

fn parse_stages(value: &str) -> FrameStages {
    let mut stages = FrameStages::empty();
    for name in strings::split(value, ',') {
        match name {
            "geometry" => stages |= FrameStages::GEOMETRY,
            "lighting" => stages |= FrameStages::LIGHTING,
            "post" => stages |= FrameStages::POST,
            _ => log_warning(format!("unknown stage '{name}'")),
        }
    }
    stages
}

fn run(options: &Options) -> Result<()> {
    let _total = ScopedTimer::new("demo run");
    let mut frame_timer = Timer::new();

    // Uniform buffers are padded to the native 256-byte alignment.
    let ubo_size = math::round_to_power_of_two(std::mem::size_of::<[f32; 35]>(), 256);
    ensure_success(0, "uniform buffer allocation")?;
    info!("uniform buffer of {} bytes allocated", ubo_size);

    for frame in 0..options.frames {
        let _frame_timing = ScopedTimer::new(format!("frame {frame}"));
        let delta = frame_timer.tick();

        // Camera basis from a fixed look direction.
        let forward = math::normalize(Vec3::new(0.2, -0.4, -1.0));
        let right = math::normalize(math::cross(forward, Vec3::Y));
        let up = math::cross(right, forward);
        debug_assert!(math::dot(right, up).abs() < 1e-5);

        for stage in [FrameStages::GEOMETRY, FrameStages::LIGHTING, FrameStages::POST] {
            if !has_flag(options.stages, stage) {
                continue;
            }

            // The lighting pass "fails" once to exercise the
            // degrade-and-continue tier; the frame carries on without it.
            let code = if stage == FrameStages::LIGHTING && frame == 1 {
                -3
            } else {
                0
            };
            if !log_on_failure(code, format!("stage {stage:?} submission")) {
                continue;
            }
        }

        info!(
            "frame {} done (delta {:?}, camera up {:?})",
            frame, delta, up
        );
    }

    // A shutdown failure would unwind out of the demo through `?`.
    ensure_success(0, "device shutdown")?;
    Ok(())
}

fn main() -> Result<()> {
    renderkit_core::init_logging();

    let options = parse_options();
    if let Some(path) = &options.log_file {
        log_set_file_path(Some(path));
        info!("mirroring log records to {}", path);
    }

    run(&options)
}
