//! JackKnife CLI: score JSON datasets from a file or stdin.
//!
//! Commands:
//! - `jackknife`: iterative JackKnife outlier removal
//! - `grubbs`: iterated Grubbs test at a significance level
//! - `no-outlier`: single-pass Z-scores over the whole dataset
//!
//! Settings resolve from `jackknife.toml` in `--root`, then `JACKKNIFE_*`
//! environment variables, then flags.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jackknife_analysis::{DataInput, Grubbs, JackKnife, NoOutlier, RunOutput, RunResult};
use jackknife_core::config::{CliOverrides, JackknifeSettings};
use jackknife_core::errors::JackknifeErrorCode;
use jackknife_core::RunError;
use serde_json::Value;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "jackknife",
    version,
    about = "Iterative JackKnife outlier scoring for numeric datasets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Iteratively remove outliers against a t-based bound.
    Jackknife {
        /// Confidence level in (0, 1).
        #[arg(long)]
        percentile: Option<f64>,

        /// Degrees-of-freedom offset (df = n - dof1).
        #[arg(long)]
        dof1: Option<f64>,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Iterated Grubbs test.
    Grubbs {
        /// Significance level in (0, 1).
        #[arg(long)]
        alpha: Option<f64>,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Z-scores against the full dataset, nothing removed.
    NoOutlier {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// JSON input file. Reads stdin when omitted.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Directory searched for jackknife.toml.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Emit a mapping keyed by identity instead of a list.
    #[arg(long, default_value_t = false)]
    map: bool,

    /// Input rows are [identity, value] pairs; list rows carry the identity.
    #[arg(long, default_value_t = false)]
    id_field: bool,

    /// Print the full run report (steps, flags, final statistics).
    #[arg(long, default_value_t = false)]
    report: bool,

    /// Pretty-print JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

impl CommonArgs {
    /// Flags left unset defer to the lower settings layers.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            use_list_output: self.map.then_some(false),
            use_id_field: self.id_field.then_some(true),
            ..CliOverrides::default()
        }
    }
}

/// A configured engine for one invocation.
enum Engine {
    JackKnife(JackKnife),
    Grubbs(Grubbs),
    NoOutlier(NoOutlier),
}

impl Engine {
    fn use_id_field(&self) -> bool {
        match self {
            Self::JackKnife(e) => e.shape().use_id_field,
            Self::Grubbs(e) => e.shape().use_id_field,
            Self::NoOutlier(e) => e.shape().use_id_field,
        }
    }

    fn run(&self, data: &Value) -> Result<RunOutput, RunError> {
        match self {
            Self::JackKnife(e) => e.run(data),
            Self::Grubbs(e) => e.run(data),
            Self::NoOutlier(e) => e.run(data),
        }
    }

    fn report(&self, data: &Value) -> Result<RunResult, RunError> {
        let dataset = DataInput::from_json(data, self.use_id_field())?.into_dataset()?;
        Ok(match self {
            Self::JackKnife(e) => e.score(&dataset),
            Self::Grubbs(e) => e.score(&dataset),
            Self::NoOutlier(e) => e.score(&dataset),
        })
    }
}

fn main() -> Result<()> {
    jackknife_core::tracing::init_tracing();
    let cli = Cli::parse();
    execute(cli.command)
}

fn execute(command: Commands) -> Result<()> {
    let (engine_for, overrides, common) = match command {
        Commands::Jackknife {
            percentile,
            dof1,
            common,
        } => {
            let overrides = CliOverrides {
                percentile,
                dof1,
                ..common.overrides()
            };
            (EngineKind::JackKnife, overrides, common)
        }
        Commands::Grubbs { alpha, common } => {
            let overrides = CliOverrides {
                alpha,
                ..common.overrides()
            };
            (EngineKind::Grubbs, overrides, common)
        }
        Commands::NoOutlier { common } => (EngineKind::NoOutlier, common.overrides(), common),
    };

    let settings = JackknifeSettings::load(&common.root, Some(&overrides))
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    let engine = build_engine(engine_for, &settings)?;

    let data = read_input(common.input.as_ref())?;
    let rendered = if common.report {
        let result = engine
            .report(&data)
            .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
        debug!(outliers = result.outlier_count(), "report ready");
        to_json(&result, common.pretty)?
    } else {
        let output = engine
            .run(&data)
            .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
        to_json(&output, common.pretty)?
    };
    println!("{rendered}");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineKind {
    JackKnife,
    Grubbs,
    NoOutlier,
}

fn build_engine(kind: EngineKind, settings: &JackknifeSettings) -> Result<Engine> {
    let engine = match kind {
        EngineKind::JackKnife => Engine::JackKnife(
            JackKnife::from_settings(settings).map_err(|e| anyhow::anyhow!(e.coded_string()))?,
        ),
        EngineKind::Grubbs => Engine::Grubbs(
            Grubbs::from_settings(settings).map_err(|e| anyhow::anyhow!(e.coded_string()))?,
        ),
        EngineKind::NoOutlier => Engine::NoOutlier(NoOutlier::from_settings(settings)),
    };
    Ok(engine)
}

fn read_input(path: Option<&PathBuf>) -> Result<Value> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read input file {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("input is not valid JSON")
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
