use log::{debug, info, warn};

use sentiment_engine::*;
use snafu::{prelude::*, Snafu};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::survey::config_reader::*;

mod config_reader;
mod io_common;
mod io_csv;
mod io_json;
mod io_msforms;
mod io_text;

#[derive(Debug, Snafu)]
pub enum SurveyError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The Excel file is empty or the worksheet is missing"))]
    EmptyExcel {},
    #[snafu(display("Several worksheets found, please select one of {names:?}"))]
    MultipleWorksheets { names: Vec<String> },
    #[snafu(display("No column with the header {label:?}"))]
    MissingQuestion { label: String },
    #[snafu(display("Either a question label or a text column must be given"))]
    MissingTextColumn {},
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON content"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Expected a number or a column letter"))]
    ParsingJsonNumber {},
    #[snafu(display("Unexpected JSON content: {description}"))]
    JsonWrongShape { description: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningText {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening the CSV file"))]
    CsvOpen { source: csv::Error },
    #[snafu(display("Error parsing a CSV line"))]
    CsvLineParse { source: csv::Error },
    #[snafu(display("Line {lineno} is too short"))]
    CsvLineToShort { lineno: usize },
    #[snafu(display("Provider not implemented {provider:?}"))]
    UnknownProvider { provider: String },
    #[snafu(display(
        "No responses to analyze: use --input or a configuration file with responseSources"
    ))]
    NoResponseSources {},
    #[snafu(display("The configuration file has no parent directory"))]
    MissingParentDir {},
    #[snafu(display("Invalid lexicon in the configuration"))]
    InvalidLexicon { source: LexiconError },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The summary differs from the reference summary {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

type SurveyResult<T> = Result<T, SurveyError>;
type BSurveyResult<T> = Result<T, Box<SurveyError>>;

/// A response, as parsed by the readers.
/// A missing text is analyzed like a blank answer.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedResponse {
    pub id: String,
    pub text: Option<String>,
}

// ******** Output data structures *********

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ResponseSentiment {
    pub id: String,
    pub sentiment: SentimentResult,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub config: OutputConfig,
    #[serde(rename = "totalResponses")]
    pub total_responses: u64,
    /// Responses that had some content to analyze.
    #[serde(rename = "analyzedResponses")]
    pub analyzed_responses: u64,
    #[serde(rename = "averageScore")]
    pub average_score: f64,
    #[serde(rename = "averageLabel")]
    pub average_label: String,
    #[serde(rename = "averageColor")]
    pub average_color: String,
    pub distribution: BTreeMap<String, u64>,
    pub responses: Vec<ResponseSentiment>,
}

pub fn summarize(
    output_config: OutputConfig,
    responses: &[ParsedResponse],
    lexicon: &Lexicon,
) -> SurveySummary {
    let mut distribution: BTreeMap<String, u64> = SentimentLabel::ALL
        .iter()
        .map(|l| (l.as_str().to_string(), 0))
        .collect();
    let mut results: Vec<ResponseSentiment> = Vec::new();
    let mut total_score = 0.0;
    let mut analyzed: u64 = 0;
    for pr in responses {
        let sentiment = lexicon.analyze(pr.text.as_deref());
        debug!("summarize: {}: {:?}", pr.id, sentiment);
        total_score += sentiment.score;
        if sentiment.details.is_some() {
            analyzed += 1;
        }
        *distribution
            .entry(sentiment.label.as_str().to_string())
            .or_insert(0) += 1;
        results.push(ResponseSentiment {
            id: pr.id.clone(),
            sentiment,
        });
    }

    let average_score = if results.is_empty() {
        0.0
    } else {
        total_score / results.len() as f64
    };
    SurveySummary {
        config: output_config,
        total_responses: results.len() as u64,
        analyzed_responses: analyzed,
        average_score,
        average_label: label_for(average_score).to_string(),
        average_color: color_for(average_score).to_string(),
        distribution,
        responses: results,
    }
}

fn read_responses(root_path: &Path, src: &ResponseSource) -> BSurveyResult<Vec<ParsedResponse>> {
    let p: PathBuf = root_path.join(&src.file_path);
    let p2 = p.as_path().display().to_string();
    info!("Attempting to read response file {:?}", p2);
    let responses = match src.provider.as_str() {
        "text" | "" => io_text::read_text_responses(p2, src),
        "csv" => io_csv::read_csv_responses(p2, src),
        "json" => io_json::read_json_responses(p2, src),
        "msforms" => io_msforms::read_msforms_responses(p2, src),
        x => {
            return Err(Box::new(SurveyError::UnknownProvider {
                provider: x.to_string(),
            }))
        }
    }?;
    info!("Read {} responses from {}", responses.len(), src.file_path);
    Ok(responses)
}

/// Runs the analysis for a configuration. Source paths are resolved against `root_path`.
pub fn run_survey_config(config: &SurveyConfig, root_path: &Path) -> BSurveyResult<SurveySummary> {
    let custom_lexicon: Option<Lexicon> = match &config.lexicon {
        Some(settings) => Some(settings.build_lexicon().context(InvalidLexiconSnafu {})?),
        None => None,
    };
    let lexicon: &Lexicon = custom_lexicon
        .as_ref()
        .unwrap_or(Lexicon::default_lexicon());

    if config.response_sources.is_empty() {
        warn!("run_survey_config: no response sources in the configuration");
    }

    let mut data: Vec<ParsedResponse> = Vec::new();
    for src in config.response_sources.iter() {
        let mut file_data = read_responses(root_path, src)?;
        data.append(&mut file_data);
    }

    let summary = summarize(config.output_settings.output_config(), &data, lexicon);
    info!(
        "Survey {:?}: {} responses, average score {} ({})",
        summary.config.survey,
        summary.total_responses,
        summary.average_score,
        summary.average_label
    );
    Ok(summary)
}

fn summary_to_pretty_json(summary: &SurveySummary) -> SurveyResult<String> {
    // Going through a JSON value orders the keys the same way as for the reference.
    let js: JSValue = serde_json::to_value(summary).context(ParsingJsonSnafu {})?;
    serde_json::to_string_pretty(&js).context(ParsingJsonSnafu {})
}

fn check_reference(pretty_js_stats: &str, reference_path: String) -> BSurveyResult<()> {
    let summary_ref = read_summary(reference_path.clone())?;
    debug!("check_reference: reference summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        return Err(Box::new(SurveyError::ReferenceMismatch {
            path: reference_path,
        }));
    }
    info!("Summary matches the reference {}", reference_path);
    Ok(())
}

fn write_output(pretty_js_stats: &str, out: Option<String>) -> BSurveyResult<()> {
    match out.as_deref() {
        None | Some("stdout") => {
            println!("{}", pretty_js_stats);
        }
        Some(path) => {
            info!("Writing summary to {}", path);
            fs::write(path, pretty_js_stats).context(WritingOutputSnafu { path })?;
        }
    }
    Ok(())
}

// The summary file: --out, else outputDirectory (relative to the configuration file).
fn output_path(
    out: Option<String>,
    settings: &OutputSettings,
    config_root: &Path,
) -> Option<String> {
    out.or_else(|| {
        settings.output_directory.as_ref().map(|dir| {
            let p: PathBuf = [
                config_root,
                Path::new(dir),
                Path::new(&format!("{}_summary.json", settings.file_stem())),
            ]
            .iter()
            .collect();
            p.display().to_string()
        })
    })
}

pub fn run_survey(args: &Args) -> BSurveyResult<()> {
    let (mut config, config_root) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root_p = Path::new(config_path.as_str())
                .parent()
                .context(MissingParentDirSnafu {})?
                .to_path_buf();
            (config, root_p)
        }
        None => (SurveyConfig::empty(), PathBuf::new()),
    };

    let mut root_path = config_root.clone();
    if let Some(input) = &args.input {
        if args.config.is_some() {
            warn!("run_survey: --input replaces the sources of the configuration file");
        }
        config.response_sources = vec![ResponseSource::from_args(input.clone(), args)];
        // The input path is relative to the working directory.
        root_path = PathBuf::new();
    }
    if config.response_sources.is_empty() {
        return Err(Box::new(SurveyError::NoResponseSources {}));
    }
    debug!("run_survey: config: {:?}", config);

    let summary = run_survey_config(&config, &root_path)?;
    let pretty_js_stats = summary_to_pretty_json(&summary)?;

    let out = output_path(args.out.clone(), &config.output_settings, &config_root);
    write_output(&pretty_js_stats, out)?;

    // The reference summary, if provided for comparison
    if let Some(reference_path) = args.reference.clone() {
        check_reference(&pretty_js_stats, reference_path)?;
    }

    Ok(())
}
