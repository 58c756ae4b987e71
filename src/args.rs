use clap::Parser;

/// Sentiment analysis of survey responses.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file describing the survey sources and settings, in JSON format.
    /// See the manual of the sentiment_engine crate for the format.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference summary in JSON format. If provided, pulse will
    /// check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary will be written in JSON format to the given
    /// location. Setting this option overrides the output directory that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The file containing the responses. Setting this option overrides the
    /// sources that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default text) The type of the input: text, csv, json or msforms.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (number or column letter) For csv and msforms inputs, the column holding the responses.
    #[clap(long, value_parser)]
    pub text_column: Option<String>,

    /// For msforms inputs, the header of the column holding the responses.
    #[clap(long, value_parser)]
    pub question: Option<String>,

    /// When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
