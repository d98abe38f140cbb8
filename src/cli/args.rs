//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::dataset::statistics::DEFAULT_TOP_SYMPTOMS;

/// Symptomatic - rank likely diseases from a list of symptoms
#[derive(Parser, Debug, Clone)]
#[command(name = "symptomatic")]
#[command(about = "Rank likely diseases from a list of symptoms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SymptomaticArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Disease/symptom table, overriding the configuration
    #[arg(long, value_name = "CSV", env = "SYMPTOMATIC_SYMPTOMS_FILE")]
    pub symptoms_file: Option<PathBuf>,

    /// Disease/precaution table, overriding the configuration
    #[arg(long, value_name = "CSV", env = "SYMPTOMATIC_PRECAUTIONS_FILE")]
    pub precautions_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SymptomaticArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Predict diseases for a list of symptoms
    Predict(PredictArgs),

    /// Predict diseases for every line of a file
    Batch(BatchArgs),

    /// Show the precautions for a disease
    Precautions(PrecautionsArgs),

    /// List every known symptom
    Symptoms,

    /// List every known disease
    Diseases,

    /// Show dataset statistics
    Stats(StatsArgs),

    /// Measure accuracy on the dataset
    Evaluate(EvaluateArgs),
}

/// Arguments for a single prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Symptoms, separated by commas or given as separate arguments
    #[arg(value_name = "SYMPTOMS", required = true, num_args = 1..)]
    pub symptoms: Vec<String>,

    /// Number of predictions to show (default: from configuration)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

impl PredictArgs {
    /// The symptom arguments as one query.
    pub fn query(&self) -> String {
        self.symptoms.join(", ")
    }
}

/// Arguments for batch prediction
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one query per line; blank lines and lines starting with '#' are skipped
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of predictions per query (default: from configuration)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

/// Arguments for precaution lookup
#[derive(Parser, Debug, Clone)]
pub struct PrecautionsArgs {
    /// Disease name (case-insensitive)
    #[arg(value_name = "DISEASE", required = true, num_args = 1..)]
    pub disease: Vec<String>,
}

impl PrecautionsArgs {
    /// The disease arguments as one name.
    pub fn name(&self) -> String {
        self.disease.join(" ")
    }
}

/// Arguments for dataset statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Number of most frequent symptoms to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_SYMPTOMS)]
    pub top: usize,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Hold out every Nth row for testing instead of scoring the training rows
    #[arg(long, value_name = "N")]
    pub holdout: Option<usize>,

    /// Count a hit when the true disease is within the top K predictions
    #[arg(short = 'k', long, default_value = "3")]
    pub top_k: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity() {
        let args = SymptomaticArgs::try_parse_from(["symptomatic", "diseases"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SymptomaticArgs::try_parse_from(["symptomatic", "-vv", "diseases"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            SymptomaticArgs::try_parse_from(["symptomatic", "-vv", "--quiet", "diseases"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            SymptomaticArgs::try_parse_from(["symptomatic", "--format", "json", "symptoms"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_predict_joins_arguments() {
        let args = SymptomaticArgs::try_parse_from([
            "symptomatic",
            "predict",
            "chills",
            "high fever",
            "-k",
            "3",
        ])
        .unwrap();

        if let Command::Predict(predict) = args.command {
            assert_eq!(predict.query(), "chills, high fever");
            assert_eq!(predict.top_k, Some(3));
        } else {
            panic!("Expected Predict command");
        }
    }

    #[test]
    fn test_predict_requires_symptoms() {
        assert!(SymptomaticArgs::try_parse_from(["symptomatic", "predict"]).is_err());
    }

    #[test]
    fn test_precautions_name() {
        let args =
            SymptomaticArgs::try_parse_from(["symptomatic", "precautions", "Common", "Cold"])
                .unwrap();
        if let Command::Precautions(precautions) = args.command {
            assert_eq!(precautions.name(), "Common Cold");
        } else {
            panic!("Expected Precautions command");
        }
    }

    #[test]
    fn test_stats_top_default() {
        let args = SymptomaticArgs::try_parse_from(["symptomatic", "stats"]).unwrap();
        if let Command::Stats(stats) = args.command {
            assert_eq!(stats.top, 15);
        } else {
            panic!("Expected Stats command");
        }

        let args = SymptomaticArgs::try_parse_from(["symptomatic", "stats", "-n", "5"]).unwrap();
        assert!(matches!(args.command, Command::Stats(StatsArgs { top: 5 })));
    }

    #[test]
    fn test_evaluate_defaults() {
        let args =
            SymptomaticArgs::try_parse_from(["symptomatic", "evaluate", "--holdout", "5"]).unwrap();
        if let Command::Evaluate(evaluate) = args.command {
            assert_eq!(evaluate.holdout, Some(5));
            assert_eq!(evaluate.top_k, 3);
        } else {
            panic!("Expected Evaluate command");
        }
    }
}
