use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use framecore_camera::Camera;
use framecore_collision::Collider;
use framecore_engine::{Engine, EngineConfig};
use framecore_entity::{Child, CopyDescriptor, MaterialHandle, MeshHandle};
use framecore_input::InputSnapshot;
use framecore_render::DebugTextRenderer;
use glam::Vec3;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "framecore-cli", about = "CLI tool for framecore operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML engine configuration (defaults are used when absent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the resolved engine configuration
    Info,
    /// Run frames headless and print the last one
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Override the configured dimension count (2 or 3)
        #[arg(short, long)]
        dimensions: Option<u8>,
        /// Keys held every frame, comma separated (e.g. "w,space")
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
        /// Horizontal mouse travel per frame in pixels
        #[arg(long, default_value = "0")]
        mouse_dx: f64,
        /// Vertical mouse travel per frame in pixels
        #[arg(long, default_value = "0")]
        mouse_dy: f64,
        /// Falling entities to spawn above a floor
        #[arg(short, long, default_value = "3")]
        entities: usize,
        /// Copies of the floor tile, laid out along -Z
        #[arg(long, default_value = "100")]
        copies: usize,
        /// Frames per second used for the time step
        #[arg(long, default_value = "60")]
        rate: f64,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(p) => EngineConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// A floor tile with copies, plus a column of falling boxes above it.
fn populate(engine: &mut Engine, entities: usize, copies: usize) {
    let mut floor = Child::new(Vec3::new(0.0, -2.0, 0.0))
        .with_collider(Collider::Box {
            half_extents: [5.0, 0.5, 5.0],
        })
        .with_group("floor");
    floor.attach_mesh(MeshHandle(0), 36);
    floor.attach_material(MaterialHandle(0));
    for i in 0..copies {
        let material = MaterialHandle((i % 2) as u64);
        floor.add_copy(CopyDescriptor::new(0.0, -2.0, -(i as f32) * 10.0, material));
    }
    floor.enable_copying();
    engine.spawn(floor);

    for i in 0..entities {
        let mut body = Child::new(Vec3::new(i as f32 * 1.5, 2.0 + i as f32, -5.0))
            .with_gravity(0.001)
            .with_collider(Collider::default())
            .with_group("bodies");
        body.attach_mesh(MeshHandle(1), 36);
        body.attach_material(MaterialHandle(2));
        engine.spawn(body);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("framecore-cli v{}", env!("CARGO_PKG_VERSION"));
            print!("{}", serde_yaml::to_string(&config)?);
        }
        Commands::Simulate {
            frames,
            dimensions,
            keys,
            mouse_dx,
            mouse_dy,
            entities,
            copies,
            rate,
        } => {
            if let Some(d) = dimensions {
                config.dimensions = d;
            }
            anyhow::ensure!(rate > 0.0, "rate must be positive, got {rate}");
            let delta_time = 1.0 / rate;

            let mut engine = Engine::new(config)?;
            populate(&mut engine, entities, copies);
            let events = engine.registry_mut().drain_events();
            tracing::debug!(events = events.len(), "scene populated");
            println!(
                "Simulating {frames} frames in {}D with {} entities",
                engine.camera().dimensions(),
                engine.registry().len()
            );

            let mut input = keys
                .iter()
                .fold(InputSnapshot::new(), |input, key| input.with_key(key.trim()));
            let mut contacts = 0;
            for _ in 0..frames {
                input = input.advance(input.mouse_x + mouse_dx, input.mouse_y + mouse_dy);
                engine.frame(&input, delta_time);
                contacts += engine.collisions().len();
            }

            let p = engine.camera().position();
            println!("Camera: pos=({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
            println!("Contacts over run: {contacts}");
            if let Some(out) = engine.present(&mut DebugTextRenderer::new()) {
                print!("{out}");
            }
        }
    }

    Ok(())
}
