use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use vplgi::{
    expect,
    lights::Orientation,
    math::Point3,
    scene::Scene,
    settings::SpawnerSettings,
    spawner::{LightSource, VplSpawner},
    vplgi_debug, vplgi_info, MemoryLightSink, RecordingDebugDraw,
};

#[derive(Parser)]
#[command(name = "vplgi")]
#[command(about = "Places virtual point lights around a light hanging in a demo room", long_about = None)]
struct Cli {
    /// YAML file with spawner settings, defaults are used if not given
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3)]
    frames: u32,
    /// Seed for reproducible jitter
    #[arg(long)]
    seed: Option<u64>,
    /// Height of the light above the floor
    #[arg(long, default_value_t = 300.0)]
    height: f32,
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    level: LogLevel,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(fern::log_file("vplgi.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(why) = setup_logger(cli.level.into()) {
        panic!("{}", why);
    };

    let settings = match &cli.settings {
        Some(path) => expect!(SpawnerSettings::load(path), "Loading settings failed"),
        None => SpawnerSettings::default(),
    };

    let scene = Scene::room();
    let source = LightSource::new(
        Point3::new(0.0, 0.0, cli.height),
        Orientation::new(-90.0, 0.0, 0.0),
    );

    let mut spawner = match cli.seed {
        Some(seed) => VplSpawner::with_seed(settings, seed),
        None => VplSpawner::new(settings),
    };
    let mut sink = MemoryLightSink::new();
    let mut debug = RecordingDebugDraw::new();

    spawner.begin_play(&source, &mut sink);
    vplgi_info!(
        "Scene '{}' with {} shapes, VPL strength {:.4}",
        scene.name,
        scene.shape_count(),
        spawner.light_strength()
    );

    for frame in 0..cli.frames {
        // Debug geometry only lives for a frame
        debug.clear();
        let stats = spawner.tick(&source, &scene, &mut sink, &mut debug);
        vplgi_info!(
            "Frame {}: {}/{} rays hit, {} lights live",
            frame,
            stats.placed,
            stats.samples,
            sink.live_count()
        );
        if spawner.settings().debug_draw {
            vplgi_debug!(
                "Frame {}: {} debug spheres, {} debug lines",
                frame,
                debug.sphere_count(),
                debug.line_count()
            );
        }
    }

    for &light in spawner.vpls() {
        if let Some(state) = sink.get(light) {
            vplgi_info!(
                "VPL {:?} at ({:.1}, {:.1}, {:.1}) color ({:.3}, {:.3}, {:.3}) intensity {:.4} {}",
                light,
                state.position.x,
                state.position.y,
                state.position.z,
                state.color.r,
                state.color.g,
                state.color.b,
                state.intensity,
                state.units
            );
        }
    }

    spawner.end_play(&mut sink);
    vplgi_info!(
        "Done. {} lights spawned, {} destroyed, {} left",
        sink.spawned_total(),
        sink.destroyed_total(),
        sink.live_count()
    );
}
