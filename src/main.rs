//! Circle Push entry point
//!
//! Native builds run a headless session: populate, replay a key script for a
//! number of ticks and report where every circle ended up. Drawing is left to
//! whatever host embeds the library.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use circle_push::SimConfig;
    use circle_push::script::KeyScript;
    use circle_push::sim::{SimulationLoop, overlaps};

    #[derive(Parser, Debug)]
    #[command(name = "circle-push", about = "Run a headless circle-push session")]
    struct Args {
        /// JSON config file (any subset of fields)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Population seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
        /// Window width (overrides the config)
        #[arg(long)]
        width: Option<f32>,
        /// Window height (overrides the config)
        #[arg(long)]
        height: Option<f32>,
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 600)]
        ticks: u64,
        /// Key script, e.g. "w@0..30,d@10..40"
        #[arg(long, default_value = "")]
        keys: String,
        /// Print the final circles as JSON
        #[arg(long)]
        json: bool,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let mut config = match &args.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimConfig::default(),
        };
        if let Some(seed) = args.seed {
            config.seed = seed;
        }
        if let Some(width) = args.width {
            config.width = width;
        }
        if let Some(height) = args.height {
            config.height = height;
        }
        let script: KeyScript = args.keys.parse().context("parsing --keys")?;

        let mut sim = SimulationLoop::new(&config).context("starting session")?;
        sim.start();
        for tick in 0..args.ticks {
            script.apply(tick, &mut sim);
            sim.step();
        }

        let state = sim.state();
        let contacts = state
            .registry
            .iter_ambient()
            .filter(|b| overlaps(state.registry.controlled(), b))
            .count();
        log::info!(
            "ran {} ticks, controlled body at {:?}, {} ambient contacts",
            sim.tick_count(),
            state.registry.controlled().pos,
            contacts
        );

        let circles = sim.snapshot();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&circles)?);
        } else {
            for circle in &circles {
                let tag = if circle.is_controlled() { "*" } else { " " };
                println!(
                    "{tag} ({:8.2}, {:8.2}) r={:.0}",
                    circle.center[0], circle.center[1], circle.radius
                );
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Circle Push (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts on the web embed the library directly
}
