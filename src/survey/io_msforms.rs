// Excel exports of Microsoft Forms and Google Forms.

use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::survey::{io_common::make_default_id, *};

pub fn read_msforms_responses(
    path: String,
    src: &ResponseSource,
) -> BSurveyResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(&path);
    let wrange = get_range(&path, src)?;

    let header = wrange.rows().next().context(EmptyExcelSnafu {})?;
    debug!("read_msforms_responses: header: {:?}", header);
    let text_idx = match (&src.question_label, src.text_column_index_int()?) {
        (Some(label), _) => header
            .iter()
            .position(|cell| matches!(cell, DataType::String(s) if s.trim() == label.trim()))
            .context(MissingQuestionSnafu {
                label: label.clone(),
            })?,
        (None, Some(idx)) => idx,
        (None, None) => return Err(Box::new(SurveyError::MissingTextColumn {})),
    };
    let id_idx_o = src.id_column_index_int()?;
    debug!(
        "read_msforms_responses: text column: {:?} id column: {:?}",
        text_idx, id_idx_o
    );

    let mut res: Vec<ParsedResponse> = Vec::new();
    // The first row holds the questions.
    for (idx, row) in wrange.rows().enumerate().skip(1) {
        let lineno = idx + 1;
        let text = cell_text(row.get(text_idx), lineno);
        let id = match id_idx_o.and_then(|id_idx| row.get(id_idx)) {
            Some(DataType::String(s)) if !s.is_empty() => s.clone(),
            Some(DataType::Int(i)) => i.to_string(),
            Some(DataType::Float(f)) => format!("{}", f),
            _ => default_id(lineno),
        };
        res.push(ParsedResponse { id, text });
    }
    Ok(res)
}

// Dates and formula errors are not answers: they are counted as blank responses.
fn cell_text(cell: Option<&DataType>, lineno: usize) -> Option<String> {
    match cell {
        None | Some(DataType::Empty) => None,
        Some(DataType::String(s)) => Some(s.clone()),
        Some(DataType::Int(i)) => Some(i.to_string()),
        Some(DataType::Float(f)) => Some(f.to_string()),
        Some(DataType::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            warn!(
                "read_msforms_responses: row {}: ignoring cell {:?}",
                lineno, other
            );
            None
        }
    }
}

fn get_range(path: &String, src: &ResponseSource) -> BSurveyResult<calamine::Range<DataType>> {
    let worksheet_name_o = src.excel_worksheet_name.clone();
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        &path, &worksheet_name_o
    );
    let mut workbook: Xlsx<_> =
        open_workbook(path.clone()).context(OpeningExcelSnafu { path: path.clone() })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(&worksheet_name)
            .context(EmptyExcelSnafu {})?
            .context(OpeningExcelSnafu { path: path.clone() })?;
        Ok(wrange)
    } else {
        let mut all_worksheets = workbook.worksheets();
        match all_worksheets.len() {
            0 => Err(Box::new(SurveyError::EmptyExcel {})),
            1 => {
                let (worksheet_name, wrange) = all_worksheets.remove(0);
                debug!("get_range: using worksheet {:?}", worksheet_name);
                Ok(wrange)
            }
            _ => Err(Box::new(SurveyError::MultipleWorksheets {
                names: all_worksheets.into_iter().map(|(name, _)| name).collect(),
            })),
        }
    }
}
