use crate::args::Args;
use crate::survey::*;

use sentiment_engine::builder::LexiconBuilder;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "surveyName")]
    pub survey_name: String,
    #[serde(rename = "surveyDate")]
    pub survey_date: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
}

impl OutputSettings {
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            survey: self.survey_name.clone(),
            date: self.survey_date.clone(),
            department: self.department.clone(),
        }
    }

    /// The survey name, usable as a file name.
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .survey_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        if stem.is_empty() {
            "survey".to_string()
        } else {
            stem
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub survey: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// 1-based number or Excel-style letter.
    #[serde(rename = "textColumnIndex")]
    pub text_column_index: Option<JSValue>,
    #[serde(rename = "idColumnIndex")]
    pub id_column_index: Option<JSValue>,
    #[serde(rename = "firstResponseRowIndex")]
    pub first_response_row_index: Option<JSValue>,
    #[serde(rename = "questionLabel")]
    pub question_label: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "textField")]
    pub text_field: Option<String>,
    #[serde(rename = "idField")]
    pub id_field: Option<String>,
}

impl ResponseSource {
    pub fn from_args(input: String, args: &Args) -> ResponseSource {
        ResponseSource {
            provider: args.input_type.clone().unwrap_or_else(|| "text".to_string()),
            file_path: input,
            text_column_index: args.text_column.clone().map(JSValue::String),
            question_label: args.question.clone(),
            excel_worksheet_name: args.excel_worksheet_name.clone(),
            ..ResponseSource::default()
        }
    }

    /// The 0-based index of the column with the responses, if any.
    pub fn text_column_index_int(&self) -> SurveyResult<Option<usize>> {
        read_js_index(&self.text_column_index)
    }

    /// The 0-based index of the column with the identifiers, if any.
    pub fn id_column_index_int(&self) -> SurveyResult<Option<usize>> {
        read_js_index(&self.id_column_index)
    }

    /// The 1-based row of the first response.
    pub fn first_response_row_index(&self, default_row: usize) -> SurveyResult<usize> {
        match &self.first_response_row_index {
            None => Ok(default_row),
            x => read_js_int(x),
        }
    }
}

/// Words added to (or removed from) the built-in lexicon.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconSettings {
    #[serde(rename = "positiveWords", default)]
    pub positive_words: Vec<String>,
    #[serde(rename = "negativeWords", default)]
    pub negative_words: Vec<String>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub negators: Vec<String>,
    #[serde(rename = "removedWords", default)]
    pub removed_words: Vec<String>,
}

impl LexiconSettings {
    pub fn build_lexicon(&self) -> Result<Lexicon, LexiconError> {
        LexiconBuilder::from_default()
            .remove(&self.removed_words)
            .positive(&self.positive_words)
            .negative(&self.negative_words)
            .intensifiers(&self.intensifiers)
            .negators(&self.negators)
            .build()
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: OutputSettings,
    #[serde(rename = "responseSources", default)]
    pub response_sources: Vec<ResponseSource>,
    pub lexicon: Option<LexiconSettings>,
}

impl SurveyConfig {
    pub fn empty() -> SurveyConfig {
        SurveyConfig {
            output_settings: OutputSettings::default(),
            response_sources: Vec::new(),
            lexicon: None,
        }
    }
}

pub fn read_config(path: &str) -> BSurveyResult<SurveyConfig> {
    let config_str = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: SurveyConfig = serde_json::from_str(&config_str).context(ParsingJsonSnafu {})?;
    info!("config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: String) -> BSurveyResult<JSValue> {
    let contents = fs::read_to_string(path.clone()).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

fn read_js_index(x: &Option<JSValue>) -> SurveyResult<Option<usize>> {
    match x {
        None => Ok(None),
        x => Ok(Some(read_js_int(x)? - 1)),
    }
}

// Reads a 1-based position: a number or an Excel-style column (A = 1, Z = 26, AA = 27).
fn read_js_int(x: &Option<JSValue>) -> SurveyResult<usize> {
    let res = match x {
        Some(JSValue::Number(n)) => n
            .as_u64()
            .map(|x| x as usize)
            .context(ParsingJsonNumberSnafu {})?,
        Some(JSValue::String(s)) if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) => {
            s.to_ascii_uppercase()
                .bytes()
                .try_fold(0usize, |acc, b| {
                    acc.checked_mul(26)?.checked_add((b - b'A' + 1) as usize)
                })
                .context(ParsingJsonNumberSnafu {})?
        }
        Some(JSValue::String(s)) => s.parse::<usize>().ok().context(ParsingJsonNumberSnafu {})?,
        _ => None.context(ParsingJsonNumberSnafu {})?,
    };
    if res == 0 {
        whatever!("Positions start at 1, got {:?}", x);
    }
    Ok(res)
}
