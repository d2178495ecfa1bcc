use anyhow::{Context, Result};
use aura_lib::model::config::AppConfig;
use aura_lib::model::metrics::init_logging;
use aura_lib::model::world::World;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless AURA ecosystem runner", long_about = None)]
struct Args {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Overrides the seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a one-line summary every N ticks (0 disables)
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            AppConfig::from_toml(&content)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => AppConfig::default(),
    };
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = load_config(&args)?;
    if args.print_config {
        println!("{}", toml::to_string_pretty(&config).context("serializing config")?);
        return Ok(());
    }

    let mut world = World::new(config).context("building world")?;
    let never = AtomicBool::new(false);

    let mut done = 0;
    while done < args.ticks {
        let chunk = match args.report_every {
            0 => args.ticks - done,
            n => n.min(args.ticks - done),
        };
        done += world.run(chunk, &never);

        let stats = world.last_stats();
        if args.report_every > 0 {
            println!(
                "tick {:>6} | {:<6} {:<7} | herb {:>4} pred {:>4} omni {:>4} | flora {:>5} | H {:.3}",
                stats.tick,
                stats.season.name(),
                stats.time_of_day.name(),
                stats.counts.herbivores,
                stats.counts.predators,
                stats.counts.omnivores,
                stats.counts.flora_total(),
                stats.biodiversity,
            );
        }
        if stats.counts.fauna_total() == 0 {
            println!("All fauna extinct at tick {}", stats.tick);
            break;
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(world.last_stats()).context("serializing stats")?
    );
    Ok(())
}
