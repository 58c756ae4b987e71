// Plain text files, one response per line.

use crate::survey::{io_common::make_default_id, *};

pub fn read_text_responses(path: String, src: &ResponseSource) -> BSurveyResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(&path);
    let first_row = src.first_response_row_index(1)?;
    let contents = fs::read_to_string(&path).context(OpeningTextSnafu { path: path.clone() })?;

    let res: Vec<ParsedResponse> = contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(lineno, _)| *lineno >= first_row)
        .map(|(lineno, line)| ParsedResponse {
            id: default_id(lineno),
            text: Some(line.to_string()),
        })
        .collect();
    debug!("read_text_responses: {}: {} lines", path, res.len());
    Ok(res)
}
