//! Command implementations for the symptomatic CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SymptomaticConfig;
use crate::dataset::{Dataset, TrainingExample, disease_key};
use crate::error::{Result, SymptomaticError};
use crate::ml::evaluation::{evaluate, holdout_split};
use crate::ml::model::SymptomModel;
use crate::prediction::{PredictionResponse, PredictionService};

/// Execute a CLI command.
pub fn execute_command(args: SymptomaticArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Predict(predict_args) => predict(predict_args, &config, &args),
        Command::Batch(batch_args) => batch(batch_args, &config, &args),
        Command::Precautions(precaution_args) => precautions(precaution_args, &config, &args),
        Command::Symptoms => list_symptoms(&config, &args),
        Command::Diseases => list_diseases(&config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
        Command::Evaluate(evaluate_args) => run_evaluation(evaluate_args, &config, &args),
    }
}

/// Read the configuration file, if any, and apply path overrides.
pub fn load_config(args: &SymptomaticArgs) -> Result<SymptomaticConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SymptomaticConfig::from_file(path)?
        }
        None => SymptomaticConfig::default(),
    };
    if let Some(path) = &args.symptoms_file {
        config.dataset.symptom_file = path.clone();
    }
    if let Some(path) = &args.precautions_file {
        config.dataset.precaution_file = path.clone();
    }
    config.validate()?;
    Ok(config)
}

fn service(config: &SymptomaticConfig) -> Result<PredictionService> {
    let start = Instant::now();
    let model = SymptomModel::initialize(config)?;
    info!("Model ready in {}ms", start.elapsed().as_millis());
    Ok(PredictionService::new(model, config.prediction.clone()))
}

/// Predict diseases for one query.
fn predict(args: &PredictArgs, config: &SymptomaticConfig, cli_args: &SymptomaticArgs) -> Result<()> {
    let service = service(config)?;
    let query = args.query();
    let response = service.respond(&query, args.top_k.unwrap_or(0))?;

    output_result(
        "Prediction complete",
        &PredictionReport { query, response },
        cli_args,
    )
}

/// Predict diseases for every query line in a file.
fn batch(args: &BatchArgs, config: &SymptomaticConfig, cli_args: &SymptomaticArgs) -> Result<()> {
    let service = service(config)?;

    let file = File::open(&args.file).map_err(|e| {
        SymptomaticError::invalid_argument(format!("cannot open {}: {e}", args.file.display()))
    })?;
    let mut lines = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((i + 1, trimmed.to_string()));
    }
    if cli_args.verbosity() > 1 {
        println!("Predicting {} queries from {}", lines.len(), args.file.display());
    }

    let start = Instant::now();
    let queries: Vec<&str> = lines.iter().map(|(_, q)| q.as_str()).collect();
    let responses = service.predict_batch(&queries, args.top_k.unwrap_or(0));

    let mut entries = Vec::with_capacity(lines.len());
    for ((line, query), response) in lines.into_iter().zip(responses) {
        entries.push(BatchEntry {
            line,
            query,
            response: response?,
        });
    }
    let rejected = entries
        .iter()
        .filter(|e| matches!(e.response, PredictionResponse::Rejected { .. }))
        .count();

    output_result(
        "Batch prediction complete",
        &BatchReport {
            entries,
            rejected,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Show precautions for a disease.
fn precautions(
    args: &PrecautionsArgs,
    config: &SymptomaticConfig,
    cli_args: &SymptomaticArgs,
) -> Result<()> {
    let dataset = Dataset::load_files(&config.dataset)?;
    let requested = args.name();
    let key = disease_key(&requested);
    let disease = dataset
        .diseases()
        .into_iter()
        .find(|d| disease_key(d) == key)
        .unwrap_or(requested);

    output_result(
        "Precautions",
        &PrecautionList {
            precautions: dataset.precautions_for(&disease).to_vec(),
            disease,
        },
        cli_args,
    )
}

/// List every symptom the model knows.
fn list_symptoms(config: &SymptomaticConfig, cli_args: &SymptomaticArgs) -> Result<()> {
    let dataset = Dataset::load_files(&config.dataset)?;
    output_result(
        "Known symptoms",
        &NameList {
            title: "Symptoms".to_string(),
            items: dataset
                .symptoms()
                .into_iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        },
        cli_args,
    )
}

/// List every disease the model can predict.
fn list_diseases(config: &SymptomaticConfig, cli_args: &SymptomaticArgs) -> Result<()> {
    let dataset = Dataset::load_files(&config.dataset)?;
    output_result(
        "Known diseases",
        &NameList {
            title: "Diseases".to_string(),
            items: dataset.diseases(),
        },
        cli_args,
    )
}

/// Show totals and frequency tables for the dataset.
fn show_stats(args: &StatsArgs, config: &SymptomaticConfig, cli_args: &SymptomaticArgs) -> Result<()> {
    let dataset = Dataset::load_files(&config.dataset)?;
    output_result("Dataset statistics", &dataset.statistics(args.top), cli_args)
}

/// Score the model, either on its own training rows or on a held-out split.
fn run_evaluation(
    args: &EvaluateArgs,
    config: &SymptomaticConfig,
    cli_args: &SymptomaticArgs,
) -> Result<()> {
    let dataset = Dataset::load_files(&config.dataset)?;

    let (model, test): (SymptomModel, Vec<TrainingExample>) = match args.holdout {
        Some(every) => {
            let (train, test) = holdout_split(dataset.records().to_vec(), every)?;
            if train.is_empty() || test.is_empty() {
                return Err(SymptomaticError::invalid_argument(format!(
                    "holdout of every {every}th row leaves an empty split"
                )));
            }
            info!("Training on {} rows, testing on {}", train.len(), test.len());
            let examples = test.iter().map(|r| r.to_training_example()).collect();
            let train_set = Dataset::from_parts(train, dataset.precautions().clone());
            (SymptomModel::train(train_set, config)?, examples)
        }
        None => {
            let examples = dataset.training_examples();
            (SymptomModel::train(dataset, config)?, examples)
        }
    };

    let report = evaluate(&model, &test, args.top_k)?;
    output_result("Evaluation complete", &report, cli_args)
}
