// JSON arrays of responses, as exported by the survey backend.

use crate::survey::{io_common::make_default_id, *};

const DEFAULT_TEXT_FIELD: &str = "response";
const DEFAULT_ID_FIELD: &str = "id";

pub fn read_json_responses(path: String, src: &ResponseSource) -> BSurveyResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(&path);
    let text_field = src.text_field.as_deref().unwrap_or(DEFAULT_TEXT_FIELD);
    let id_field = src.id_field.as_deref().unwrap_or(DEFAULT_ID_FIELD);

    let contents = fs::read_to_string(&path).context(OpeningJsonSnafu { path: path.clone() })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    let elements = js.as_array().context(JsonWrongShapeSnafu {
        description: format!("{} does not contain an array", path),
    })?;

    let mut res: Vec<ParsedResponse> = Vec::new();
    for (idx, elt) in elements.iter().enumerate() {
        let lineno = idx + 1;
        let pr = match elt {
            JSValue::String(s) => ParsedResponse {
                id: default_id(lineno),
                text: Some(s.clone()),
            },
            JSValue::Object(obj) => {
                let id = match obj.get(id_field) {
                    Some(JSValue::String(s)) => s.clone(),
                    Some(JSValue::Number(n)) => n.to_string(),
                    _ => default_id(lineno),
                };
                // A missing or non-textual answer is kept, as a blank one.
                let text = obj
                    .get(text_field)
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string());
                ParsedResponse { id, text }
            }
            x => {
                warn!(
                    "read_json_responses: element {}: no response in {:?}",
                    lineno, x
                );
                ParsedResponse {
                    id: default_id(lineno),
                    text: None,
                }
            }
        };
        debug!("read_json_responses: {:?}", pr);
        res.push(pr);
    }
    Ok(res)
}
