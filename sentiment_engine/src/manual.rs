/*!

This is the long-form manual for `sentiment_engine` and the `pulse` command line tool.

## Scoring

The engine scores a free-text answer in a few steps:

1. The text is lowercased and every character that is not an ASCII letter, a digit,
   an underscore or whitespace is removed. `"Don't!"` becomes `"dont"`. Accented
   letters are removed as well, so the lexicon only matches plain ASCII words.
2. The text is split on whitespace. Tokens of a single character (`"i"`, `"a"`) are
   not counted as words, but they still separate a modifier from the word after it.
3. Each word found in the positive list adds one point, each word of the negative list
   removes one. If the token right before it is an intensifier (`very`, `really`, ...)
   the point is doubled. If that token is a negator (`not`, `dont`, `never`, ...) the
   polarity is flipped.
4. The score is the sum divided by the number of counted words. The confidence is the
   fraction of counted words that carried a polarity.

| score                | label           | display label   | color     |
|----------------------|-----------------|-----------------|-----------|
| > 0.12               | `very positive` | `Very Positive` | `#2e7d32` |
| > 0.03               | `positive`      | `Positive`      | `#66bb6a` |
| between -0.03 and 0.03 | `neutral`     | `Neutral`       | `#9e9e9e` |
| < -0.03              | `negative`      | `Negative`      | `#ef5350` |
| < -0.12              | `very negative` | `Very Negative` | `#c62828` |

The boundaries themselves belong to the bucket closer to neutral: a score of exactly
`0.03` is `neutral`.

An empty or blank answer (or a missing one) is `neutral` with a confidence of 0, and
carries no word counts. A confidence of 0 is not an error: it is also what an answer
without any sentiment word gets.

## Input formats

The following formats are supported by `pulse`:
* `text` one response per line
* `csv` Comma Separated Values, one response per row
* `json` an array of responses
* `msforms` Excel export from Microsoft Forms or Google Forms

### `text`

Every line of the file is a response, including blank lines.

### `csv`

```text
id,department,response
r1,engineering,"Great team, but I am often stressed."
r2,sales,"Management doesn't care, I'm not valued"
```

The column holding the answers is given by `textColumnIndex` (1-based, or an Excel-style
letter such as `C`). The `id` column is optional. By default the first row is treated as
a header; use `firstResponseRowIndex` to change it.

### `json`

An array whose elements are either strings or objects:

```text
[
  {"id": "a1", "response": "Very happy with the flexible schedule"},
  "Extremely frustrated with the constant pressure"
]
```

The field holding the text is `response` unless `textField` says otherwise, and `idField`
selects the identifier. Elements without text (`null`, missing field) are counted as
blank responses.

### `msforms`

Results exported to Excel (.xlsx) from a survey form. The first row holds the questions.
The answers are taken from the column whose header is `questionLabel` (or from
`textColumnIndex`). If the workbook has several worksheets, `excelWorksheetName` is
mandatory. Dates and formula errors (`#N/A`) in the answer column are reported as a
warning and counted as blank responses.

## Configuration

`pulse` accepts a configuration file in JSON:

```text
{
  "outputSettings": {
    "surveyName": "Quarterly pulse",
    "surveyDate": "2024-03-31",
    "department": "Engineering"
  },
  "responseSources": [
    {"provider": "csv", "filePath": "responses.csv", "textColumnIndex": 3, "idColumnIndex": 1}
  ],
  "lexicon": {
    "positiveWords": ["kudos"],
    "negativeWords": ["layoffs"],
    "removedWords": ["pressure"]
  }
}
```

File paths are relative to the directory of the configuration file. The optional
`lexicon` section extends the built-in word lists. A word may only belong to one
list, and must be made of letters, digits or underscores.

Without a configuration file, the same information can be given on the command line:

```bash
pulse -i responses.csv --input-type csv --text-column 3
```

## Output

The summary is written in JSON, to the standard output or to the file given with
`--out`. It holds the distribution of labels, the average score with its display label
and color, and the result for each response. When `--reference` points to a previous
summary, `pulse` prints the differences and fails if the two do not match.

 */
