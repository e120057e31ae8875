use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use medium::recipe::{DEFAULT_VOLUME, PRESET_VOLUMES};
use medium::unit::UnitMode;
use medium::{FormattedResult, Workbench};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about = "NS culture medium batch calculator", long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Batch {
    /// Batch volume in liters; text without a leading number counts as 0
    #[arg(short, long, conflicts_with = "preset")]
    volume: Option<String>,
    /// Use the n-th preset volume (see `presets`)
    #[arg(short, long)]
    preset: Option<usize>,
    /// Display unit: auto, g, mg or kg
    #[arg(short, long, default_value = "auto")]
    unit: UnitMode,
}

impl Batch {
    fn workbench(&self) -> anyhow::Result<Workbench> {
        let mut bench = Workbench::new();
        match (&self.volume, self.preset) {
            (Some(text), _) => bench.set_volume_text(text),
            (None, Some(n)) => {
                let Some(liters) = n.checked_sub(1).and_then(|i| PRESET_VOLUMES.get(i)) else {
                    bail!("preset must be between 1 and {}", PRESET_VOLUMES.len());
                };
                bench.set_volume(*liters);
            }
            (None, None) => bench.set_volume(DEFAULT_VOLUME),
        }
        bench.set_unit_mode(self.unit);
        Ok(bench)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Amounts to weigh out for a batch
    Calc {
        #[command(flatten)]
        batch: Batch,
        #[arg(short, long)]
        json: bool,
    },
    /// Numbered, dated purchase list for a batch
    PurchaseList {
        #[command(flatten)]
        batch: Batch,
    },
    /// Amounts with checked entries marked
    Checklist {
        #[command(flatten)]
        batch: Batch,
        /// Ingredient id to mark as weighed out (repeatable)
        #[arg(short, long = "check")]
        checks: Vec<String>,
    },
    /// The recipe, per liter
    Recipe {
        #[arg(short, long)]
        json: bool,
    },
    /// Quick-select batch volumes
    Presets,
}

fn print_results(results: &[FormattedResult<'_>]) {
    for (index, result) in results.iter().enumerate() {
        println!("{:>2}. {}", index + 1, result);
    }
}

/// `RUST_LOG` when set, otherwise warnings from the library.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

const DEFAULT_LOG_FILTER: &str = "medium=warn";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Calc { batch, json } => {
            let bench = batch.workbench()?;
            let results = bench.results();
            if *json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&results).context("serializing results")?
                );
            } else {
                println!("{}L, unit mode {}", bench.volume(), bench.unit_mode());
                print_results(&results);
            }
        }
        Commands::PurchaseList { batch } => {
            let bench = batch.workbench()?;
            println!("{}", bench.purchase_list_today());
        }
        Commands::Checklist { batch, checks } => {
            let mut bench = batch.workbench()?;
            for id in checks {
                bench.toggle(id)?;
            }
            debug!(checked = bench.checked_count(), "applied checks");

            let use_color = atty::is(atty::Stream::Stdout);
            for result in bench.results() {
                let checked = bench.is_checked(result.id());
                let line = format!("[{}] {}", if checked { "x" } else { " " }, result);
                if checked && use_color {
                    println!("\x1b[2;9m{line}\x1b[0m");
                } else {
                    println!("{line}");
                }
            }
            println!("{}", bench.progress());
        }
        Commands::Recipe { json } => {
            let bench = Workbench::new();
            if *json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(bench.recipe()).context("serializing recipe")?
                );
            } else {
                for ingredient in bench.recipe() {
                    println!("{:<26} {}", ingredient.id, ingredient);
                }
            }
        }
        Commands::Presets => {
            for (n, liters) in PRESET_VOLUMES.iter().enumerate() {
                println!("{}. {}L", n + 1, liters);
            }
        }
    }
    Ok(())
}
