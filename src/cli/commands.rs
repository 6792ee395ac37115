use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};

use crate::error::PredictError;
use crate::history::{HistoryStore, export_filename};
use crate::models::{InputRecord, InputRecordBuilder, preset};
use crate::pipeline::{self, BatchLimits};
use crate::predictor::{ConstantPredictor, PredictorAdapter};
use crate::utils::environment;

#[derive(Parser)]
#[command(name = "agriyield-predictor")]
#[command(version = "0.1.0")]
#[command(about = "Predict crop yield from soil and environmental parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single record and show the session summary
    Predict(PredictArgs),
    /// Score every row of a CSV file and write the augmented table
    Batch(BatchArgs),
    /// List the built-in sample presets
    Presets,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Start from a named preset (see the `presets` command)
    #[arg(long)]
    pub preset: Option<String>,

    /// Nitrogen (kg/ha)
    #[arg(long)]
    pub n: Option<f64>,

    /// Phosphorus (kg/ha)
    #[arg(long)]
    pub p: Option<f64>,

    /// Potassium (kg/ha)
    #[arg(long)]
    pub k: Option<f64>,

    /// Average temperature (°C)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Relative humidity (%), 0-100
    #[arg(long)]
    pub humidity: Option<f64>,

    /// Soil pH, 0-14
    #[arg(long)]
    pub ph: Option<f64>,

    /// Annual rainfall (mm)
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// Crop name, e.g. Wheat
    #[arg(long)]
    pub crop: Option<String>,

    /// Growing season, e.g. Kharif
    #[arg(long)]
    pub season: Option<String>,

    /// Soil type, e.g. Loamy
    #[arg(long = "soil-type")]
    pub soil_type: Option<String>,

    /// Path to the model artifact (default: $AGRIYIELD_MODEL or final_best_model.json)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Use the built-in demo baseline instead of a model artifact
    #[arg(long)]
    pub demo: bool,

    /// Write the session history CSV into this directory after predicting
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file to score
    #[arg(long)]
    pub input: PathBuf,

    /// Where to write the augmented CSV
    #[arg(long, default_value = "batch_predictions.csv")]
    pub output: PathBuf,

    /// Path to the model artifact (default: $AGRIYIELD_MODEL or final_best_model.json)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Use the built-in demo baseline instead of a model artifact
    #[arg(long)]
    pub demo: bool,

    /// Maximum accepted row count (default: $AGRIYIELD_MAX_BATCH_ROWS or 10000)
    #[arg(long = "max-rows")]
    pub max_rows: Option<usize>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Predict(args)) => run_predict(args),
        Some(Commands::Batch(args)) => run_batch(args),
        Some(Commands::Presets) => {
            run_presets();
            Ok(())
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn adapter_for(model: &Option<PathBuf>, demo: bool) -> PredictorAdapter {
    if demo {
        PredictorAdapter::from_predictor(ConstantPredictor::default())
    } else {
        let path = model.clone().unwrap_or_else(environment::model_path);
        PredictorAdapter::from_artifact(path)
    }
}

fn model_hint() {
    eprintln!(
        "Hint: place the model artifact next to the binary, pass --model, or set {}",
        environment::MODEL_PATH_ENV
    );
}

fn build_record(args: &PredictArgs) -> Result<InputRecord> {
    let mut builder = match &args.preset {
        Some(name) => {
            let record = preset::lookup(name)
                .with_context(|| format!("unknown preset: {name} (see the `presets` command)"))?;
            InputRecordBuilder::from_record(&record)
        }
        None => InputRecord::builder(),
    };

    if let Some(value) = args.n {
        builder = builder.n(value);
    }
    if let Some(value) = args.p {
        builder = builder.p(value);
    }
    if let Some(value) = args.k {
        builder = builder.k(value);
    }
    if let Some(value) = args.temperature {
        builder = builder.temperature(value);
    }
    if let Some(value) = args.humidity {
        builder = builder.humidity(value);
    }
    if let Some(value) = args.ph {
        builder = builder.ph(value);
    }
    if let Some(value) = args.rainfall {
        builder = builder.rainfall(value);
    }
    if let Some(value) = &args.crop {
        builder = builder.crop(value);
    }
    if let Some(value) = &args.season {
        builder = builder.season(value);
    }
    if let Some(value) = &args.soil_type {
        builder = builder.soil_type(value);
    }

    builder.build().map_err(anyhow::Error::from)
}

fn run_predict(args: &PredictArgs) -> Result<()> {
    let record = build_record(args)?;
    let adapter = adapter_for(&args.model, args.demo);
    let mut store = HistoryStore::new();

    let prediction = match pipeline::predict_single(record, &adapter, &mut store) {
        Ok(prediction) => prediction,
        Err(e @ PredictError::ModelUnavailable { .. }) => {
            model_hint();
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Predicted Yield: {:.3} t/ha", prediction.predicted_yield);

    let summary = store.summary();
    println!();
    println!("Session Predictions: {}", summary.count);
    if let (Some(mean), Some(max)) = (summary.mean_yield, summary.max_yield) {
        println!("Average Yield: {mean:.2} t/ha");
        println!("Max Yield: {max:.2} t/ha");
    }

    if let Some(dir) = &args.export {
        let path = dir.join(export_filename(Utc::now()));
        fs::write(&path, store.export_csv())
            .with_context(|| format!("Failed to write history export: {}", path.display()))?;
        println!("History exported to {}", path.display());
    }

    Ok(())
}

fn run_batch(args: &BatchArgs) -> Result<()> {
    let adapter = adapter_for(&args.model, args.demo);
    let limits = match args.max_rows {
        Some(max_rows) => BatchLimits::new(max_rows),
        None => BatchLimits::default(),
    };

    let outcome = match pipeline::predict_batch(&args.input, &adapter, &limits) {
        Ok(outcome) => outcome,
        Err(e @ PredictError::ModelUnavailable { .. }) => {
            model_hint();
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    fs::write(&args.output, outcome.to_csv())
        .with_context(|| format!("Failed to write predictions: {}", args.output.display()))?;
    println!("Scored {} rows -> {}", outcome.len(), args.output.display());

    Ok(())
}

fn run_presets() {
    for (name, record) in preset::all() {
        println!(
            "{name}: {} / {} / {} (N {}, P {}, K {}, temperature {}, humidity {}, ph {}, rainfall {})",
            record.crop,
            record.season,
            record.soil_type,
            record.n,
            record.p,
            record.k,
            record.temperature,
            record.humidity,
            record.ph,
            record.rainfall
        );
    }
}
