//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SymptomaticArgs};
use crate::dataset::DatasetStatistics;
use crate::error::Result;
use crate::ml::evaluation::EvaluationReport;
use crate::prediction::{PredictionResponse, PredictionResult};

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self, args: &SymptomaticArgs);
}

/// Result of a single prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionReport {
    pub query: String,
    pub response: PredictionResponse,
}

/// One line of a batch file and its answer.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub line: usize,
    pub query: String,
    pub response: PredictionResponse,
}

/// Result of a batch run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub rejected: usize,
    pub duration_ms: u64,
}

/// Precautions for one disease.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrecautionList {
    pub disease: String,
    pub precautions: Vec<String>,
}

/// A plain list of names.
#[derive(Debug, Serialize, Deserialize)]
pub struct NameList {
    pub title: String,
    pub items: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SymptomaticArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SymptomaticArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn print_response(response: &PredictionResponse, args: &SymptomaticArgs) {
    match response {
        PredictionResponse::Predicted(result) => print_prediction(result, args),
        PredictionResponse::Rejected { reason } => println!("{reason}"),
    }
}

fn print_prediction(result: &PredictionResult, args: &SymptomaticArgs) {
    if result.emergency {
        println!(
            "!! Emergency symptoms detected ({}). Contact emergency services now.",
            result.emergency_symptoms.join(", ")
        );
        println!();
    }

    if !result.matched_symptoms.is_empty() {
        let matched: Vec<&str> = result.matched_symptoms.iter().map(|s| s.as_str()).collect();
        println!("Recognised symptoms: {}", matched.join(", "));
    }
    if !result.unmatched_symptoms.is_empty() {
        println!("Unknown symptoms: {}", result.unmatched_symptoms.join(", "));
    }
    if result.is_unknown_input() {
        println!("No known symptom recognised; ranking reflects disease frequency only.");
    }

    if result.is_empty() {
        println!("No prediction reached the confidence threshold.");
        return;
    }

    println!();
    println!("Possible conditions:");
    println!("════════════════════");
    for (i, prediction) in result.predictions.iter().enumerate() {
        println!(
            "{}. {} ({:.1}%, {} confidence)",
            i + 1,
            prediction.disease,
            prediction.percentage(),
            prediction.band()
        );
        if args.verbosity() > 0 {
            for precaution in &prediction.precautions {
                println!("   - {precaution}");
            }
        }
    }
}

impl HumanOutput for PredictionReport {
    fn print_human(&self, args: &SymptomaticArgs) {
        print_response(&self.response, args);
    }
}

impl HumanOutput for BatchReport {
    fn print_human(&self, args: &SymptomaticArgs) {
        for entry in &self.entries {
            println!("Line {}: {}", entry.line, entry.query);
            println!("─────────────");
            print_response(&entry.response, args);
            println!();
        }
        println!(
            "{} queries, {} rejected, {}ms",
            self.entries.len(),
            self.rejected,
            self.duration_ms
        );
    }
}

impl HumanOutput for PrecautionList {
    fn print_human(&self, _args: &SymptomaticArgs) {
        if self.precautions.is_empty() {
            println!("No precautions recorded for {}", self.disease);
            return;
        }
        println!("Precautions for {}:", self.disease);
        for (i, precaution) in self.precautions.iter().enumerate() {
            println!("{}. {precaution}", i + 1);
        }
    }
}

impl HumanOutput for NameList {
    fn print_human(&self, args: &SymptomaticArgs) {
        if args.verbosity() > 0 {
            println!("{} ({}):", self.title, self.items.len());
        }
        for item in &self.items {
            println!("{item}");
        }
    }
}

impl HumanOutput for DatasetStatistics {
    fn print_human(&self, _args: &SymptomaticArgs) {
        println!("Dataset Statistics:");
        println!("═══════════════════");
        println!("Total diseases: {}", self.diseases);
        println!("Unique symptoms: {}", self.unique_symptoms);
        println!("Records: {}", self.records);

        println!();
        println!("Records per disease:");
        println!("────────────────────");
        for count in &self.records_per_disease {
            println!("{:>4}  {}", count.records, count.disease);
        }

        println!();
        println!("Most common symptoms:");
        println!("─────────────────────");
        for count in &self.top_symptoms {
            println!("{:>4}  {}", count.occurrences, count.symptom);
        }
    }
}

impl HumanOutput for EvaluationReport {
    fn print_human(&self, args: &SymptomaticArgs) {
        println!("Evaluation Results:");
        println!("═══════════════════");
        println!("Examples: {}", self.examples);
        println!(
            "Top-1 accuracy: {:.2}% ({}/{})",
            self.accuracy * 100.0,
            self.correct,
            self.examples
        );
        println!(
            "Top-{} accuracy: {:.2}% ({}/{})",
            self.top_k,
            self.top_k_accuracy * 100.0,
            self.top_k_correct,
            self.examples
        );

        if args.verbosity() > 1 && !self.misclassified.is_empty() {
            println!();
            println!("Misclassified:");
            println!("──────────────");
            for miss in &self.misclassified {
                println!(
                    "{} predicted as {} ({:.1}%)",
                    miss.expected,
                    miss.predicted,
                    miss.confidence * 100.0
                );
            }
        }
    }
}
