use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fleet_sheets::{
    clamp_captains, generate_fleet, init_logging, sheet::SheetSet, Board, Layout, PlacementPolicy,
    SizeVariant, DEFAULT_CAPTAINS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Printable sheets, one page per captain plus the answer key.
    Text,
    /// Board data as a JSON array.
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Generate printable battleship fleet sheets", long_about = None)]
struct Cli {
    /// Board size tier: small (6x7), medium (8x9) or large (10x11).
    #[arg(long, default_value = "large")]
    size: SizeVariant,
    #[arg(long, default_value_t = DEFAULT_CAPTAINS, help = "Number of captains (clamped to 2..=25)")]
    captains: usize,
    #[arg(long, help = "Fix RNG seed for reproducible sheets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "JSON layout file with rows, cols and ships; overrides --size")]
    layout: Option<PathBuf>,
    #[arg(long, help = "Fail instead of dropping ships that cannot be placed")]
    strict: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn load_layout(path: &PathBuf) -> anyhow::Result<Layout> {
    let file = File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open layout {}: {}", path.display(), e))?;
    let layout: Layout = serde_json::from_reader(BufReader::new(file))?;
    layout.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(layout)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (layout, format_label) = match &cli.layout {
        Some(path) => (load_layout(path)?, "Custom"),
        None => (cli.size.layout(), cli.size.label()),
    };
    let captains = clamp_captains(cli.captains);
    if captains != cli.captains {
        log::info!("captain count {} clamped to {}", cli.captains, captains);
    }

    let mut rng = if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {} (sheets will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let policy = if cli.strict {
        PlacementPolicy::Strict
    } else {
        PlacementPolicy::Lenient
    };
    let generations =
        generate_fleet(captains, &layout, policy, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let incomplete = generations.iter().filter(|g| !g.is_complete()).count();
    if incomplete > 0 {
        log::warn!("{} board(s) are missing ships", incomplete);
    }
    let boards: Vec<Board> = generations.into_iter().map(|g| g.board).collect();

    match cli.format {
        OutputFormat::Text => print!(
            "{}",
            SheetSet {
                boards: &boards,
                layout: &layout,
                format_label,
            }
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&boards)?),
    }
    Ok(())
}
