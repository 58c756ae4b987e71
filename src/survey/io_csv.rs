// Primitives for reading CSV files.

use std::fs::File;

use crate::survey::{io_common::make_default_id, *};

pub fn read_csv_responses(path: String, src: &ResponseSource) -> BSurveyResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(&path);

    let id_idx_o = src.id_column_index_int()?;
    // The responses are in the first column unless specified otherwise.
    let text_idx = src.text_column_index_int()?.unwrap_or(0);

    let mut res: Vec<ParsedResponse> = Vec::new();
    let (records, row_offset) = get_records(&path, src)?;

    for (idx, line_r) in records.enumerate() {
        let lineno = idx + row_offset;
        let line = line_r.context(CsvLineParseSnafu {})?;
        debug!("read_csv_responses: lineno: {:?} row: {:?}", lineno, line);
        let id = if let Some(id_idx) = id_idx_o {
            line.get(id_idx)
                .context(CsvLineToShortSnafu { lineno })?
                .to_string()
        } else {
            default_id(lineno)
        };

        let text = line
            .get(text_idx)
            .context(CsvLineToShortSnafu { lineno })?
            .to_string();

        res.push(ParsedResponse {
            id,
            text: Some(text),
        });
    }
    Ok(res)
}

// Returns the records of the responses, and the 1-based line number of the first one.
fn get_records(
    path: &String,
    src: &ResponseSource,
) -> SurveyResult<(csv::StringRecordsIntoIter<File>, usize)> {
    // Skip the header by default.
    let first_row = src.first_response_row_index(2)?;
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu {})?;
    let mut records = rdr.into_records();
    // The index starts at 1 to respect most conventions in the excel world
    for _ in 1..first_row {
        _ = records.next();
    }
    Ok((records, first_row))
}
