//! distcalc CLI

mod interactive;
mod present;
mod store;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dc_core::EvaluationResult;
use dc_viz::NormalGrid;
use dc_viz_render::config::{VizConfig, resolve_config};

use present::{BinomialInput, NormalInput, Presenter};
use store::{ArtifactStore, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(name = "distcalc")]
#[command(about = "Normal and Binomial probability calculator")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Directory rendered images are written into (created if missing)
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// YAML file overriding the render theme
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in theme: classic, minimal, print
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Image format. Defaults to the config's `output.format`.
    #[arg(long, global = true, value_parser = ["png", "svg"])]
    format: Option<String>,

    /// Evaluate without rendering or saving an image
    #[arg(long, global = true)]
    no_save: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// P(a <= X <= b) for X ~ N(mean, stddev)
    Normal {
        /// Mean (μ)
        #[arg(long, allow_hyphen_values = true)]
        mean: String,

        /// Standard deviation (σ), must be > 0
        #[arg(long, allow_hyphen_values = true)]
        stddev: String,

        /// Lower limit (a)
        #[arg(long, allow_hyphen_values = true)]
        lower: String,

        /// Upper limit (b), must be >= lower
        #[arg(long, allow_hyphen_values = true)]
        upper: String,

        /// Half-width of the plotted window, in standard deviations
        #[arg(long, default_value = "4.0")]
        window_sigmas: f64,

        /// Points per plotted series
        #[arg(long, default_value = "1000")]
        points: usize,

        /// Print the full result as pretty JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// P(X = x) for X ~ Binomial(trials, p)
    Binomial {
        /// Number of trials (n)
        #[arg(long, allow_hyphen_values = true)]
        trials: String,

        /// Probability of success (p), in [0, 1]
        #[arg(long, allow_hyphen_values = true)]
        p: String,

        /// Number of successes (x), in [0, n]
        #[arg(long, allow_hyphen_values = true)]
        x: String,

        /// Print the full result as pretty JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Prompt for parameters on stdin until 'q' or end of input
    Interactive {
        /// Half-width of the plotted Normal window, in standard deviations
        #[arg(long, default_value = "4.0")]
        window_sigmas: f64,

        /// Points per plotted Normal series
        #[arg(long, default_value = "1000")]
        points: usize,
    },

    /// Re-render a result previously printed with `--json`
    Render {
        /// Result JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output image (format from extension). Defaults to the output directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective render config as JSON
    Config,

    /// Print version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<dc_core::Error>() {
            Some(e) if e.is_validation() => {
                eprintln!("Input error: {e}");
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings {
        output_dir: cli.output_dir,
        config: cli.config,
        theme: cli.theme,
        format: cli.format,
        no_save: cli.no_save,
    };

    match cli.command {
        Commands::Version => {
            println!("distcalc {}", dc_core::VERSION);
            Ok(())
        }
        Commands::Config => {
            let config = load_config(settings.config.as_deref(), settings.theme.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Normal { mean, stddev, lower, upper, window_sigmas, points, json } => {
            let presenter = build_presenter(&settings)?;
            let grid = normal_grid(window_sigmas, points)?;
            let input = NormalInput { mean, stddev, lower, upper };
            let result = present::evaluate_normal(&input, &grid)?;
            report(&presenter, result, json)
        }
        Commands::Binomial { trials, p, x, json } => {
            let presenter = build_presenter(&settings)?;
            let input = BinomialInput { trials, success_prob: p, target_count: x };
            let result = present::evaluate_binomial(&input)?;
            report(&presenter, result, json)
        }
        Commands::Interactive { window_sigmas, points } => {
            let presenter = build_presenter(&settings)?;
            let grid = normal_grid(window_sigmas, points)?;
            let stdin = std::io::stdin();
            interactive::run(stdin.lock(), std::io::stdout(), &presenter, &grid)
        }
        Commands::Render { input, output } => cmd_render(&settings, &input, output.as_deref()),
    }
}

/// Global flags that shape rendering and saving.
struct Settings {
    output_dir: PathBuf,
    config: Option<PathBuf>,
    theme: Option<String>,
    format: Option<String>,
    no_save: bool,
}

fn load_config(path: Option<&Path>, theme: Option<&str>) -> Result<VizConfig> {
    let yaml = match path {
        Some(p) => Some(
            std::fs::read_to_string(p)
                .with_context(|| format!("failed to read config {}", p.display()))?,
        ),
        None => None,
    };
    Ok(resolve_config(theme, yaml.as_deref())?)
}

fn build_presenter(settings: &Settings) -> Result<Presenter> {
    let config = load_config(settings.config.as_deref(), settings.theme.as_deref())?;
    let format = settings.format.clone().unwrap_or_else(|| config.output.format.clone());
    let store = if settings.no_save {
        None
    } else {
        Some(ArtifactStore::init(&settings.output_dir)?)
    };
    Ok(Presenter::new(config, format, store))
}

fn normal_grid(window_sigmas: f64, points: usize) -> Result<NormalGrid> {
    let grid = NormalGrid { half_width_sigmas: window_sigmas, points };
    grid.validate()?;
    Ok(grid)
}

fn report(presenter: &Presenter, result: EvaluationResult, json: bool) -> Result<()> {
    let shown = presenter.present(result)?;
    if json {
        println!("{}", shown.result.to_json_pretty()?);
        if let Some(path) = &shown.saved {
            eprintln!("Image saved to: {}", path.display());
        }
    } else {
        println!("{}", shown.summary());
    }
    Ok(())
}

fn cmd_render(settings: &Settings, input: &Path, output: Option<&Path>) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let result = EvaluationResult::from_json(&text)?;

    match output {
        Some(path) => {
            let config = load_config(settings.config.as_deref(), settings.theme.as_deref())?;
            dc_viz_render::render_to_file(&result, path, &config)?;
            tracing::info!(path = %path.display(), "image written");
            println!("Image saved to: {}", path.display());
            Ok(())
        }
        None if settings.no_save => anyhow::bail!("render with --no-save needs --output"),
        None => report(&build_presenter(settings)?, result, false),
    }
}
