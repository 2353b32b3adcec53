//! Section content table.
//!
//! The table is declared once, in display order. The title list returned by
//! [`doc_titles`] and the lookup map behind [`section_content`] are both
//! derived from it, so a title can never be listed without a body.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Documentation sections as `(title, markdown body)` pairs, in display order.
pub static SECTION_CONTENT: [(&str, &str); 3] = [
    ("Step-by-step tutorial", STEP_BY_STEP_TUTORIAL),
    ("Session specification", SESSION_SPECIFICATION),
    ("Plots", PLOTS),
];

static SECTION_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SECTION_CONTENT.iter().copied().collect());

/// Iterate over `(title, body)` pairs in display order.
pub fn sections() -> impl Iterator<Item = (&'static str, &'static str)> {
    SECTION_CONTENT.iter().copied()
}

/// Section titles in display order.
pub fn doc_titles() -> Vec<String> {
    sections().map(|(title, _)| title.to_string()).collect()
}

/// Look up a section body by its exact title.
///
/// Matching is exact: callers are responsible for any normalisation of the
/// key (the `get_section_content` tool trims it first).
pub fn section_content(title: &str) -> Option<&'static str> {
    SECTION_INDEX.get(title).copied()
}

const STEP_BY_STEP_TUTORIAL: &str = r#"# Step-by-step tutorial

This walkthrough takes a new user from an empty workspace to a first
optimisation round.

## 1. Create a session

- Open the application and choose **New session**.
- Give the session a name. The name becomes the folder
  `sessions/<session_name>/` that holds every file of the session.
- The application writes an empty `session.json` into that folder.

## 2. Describe the experiment

- Add one entry per input variable under **Parameters**. Each entry needs a
  `name`, a `type` (`continuous`, `discrete` or `categorical`) and its bounds
  or allowed values.
- Add one entry per measured output under **Objectives** and state whether it
  should be `minimize`d or `maximize`d.
- Save. The application validates the description against the session
  specification and reports any missing field.

## 3. Import existing data

- Drop a CSV file into `sessions/<session_name>/data/` or use **Import data**.
- Column headers must match parameter and objective names exactly.
- Rows with missing objective values are kept as pending experiments.

## 4. Run a suggestion round

- Press **Suggest** and choose the batch size.
- The model is fitted on all complete rows and the suggested experiments are
  written to `sessions/<session_name>/suggestions/round_<n>.csv`.

## 5. Record results and iterate

- Fill in the measured objectives for the suggested rows and import them.
- Repeat step 4 until the objectives stop improving.
- Use the **Plots** tab to inspect the model at any point.
"#;

const SESSION_SPECIFICATION: &str = r#"# Session specification

A session is a folder under `sessions/` with the following layout:

```
sessions/<session_name>/
    session.json
    data/
        experiments.csv
    suggestions/
        round_1.csv
        round_2.csv
    plots/
```

## session.json

| Field | Type | Description |
|-------|------|-------------|
| `name` | string | Display name of the session |
| `created` | string | ISO 8601 creation timestamp |
| `parameters` | list | Input variable definitions |
| `objectives` | list | Output definitions |
| `model` | object | Surrogate model settings |

### Parameter entries

- `name`: unique identifier, also used as CSV column header
- `type`: one of `continuous`, `discrete`, `categorical`
- `low` / `high`: bounds for `continuous` and `discrete` parameters
- `values`: allowed values for `categorical` parameters

### Objective entries

- `name`: unique identifier, also used as CSV column header
- `direction`: `minimize` or `maximize`
- `weight`: optional, defaults to `1.0`

### Model settings

- `kernel`: `matern52` (default) or `rbf`
- `acquisition`: `ei` (expected improvement, default) or `ucb`
- `seed`: optional integer for reproducible suggestions

## Data files

`data/experiments.csv` has one column per parameter and one per objective.
Suggested batches are appended to it once their results are imported.
"#;

const PLOTS: &str = r#"# Plots

All plots are generated from the active session and saved as PNG files in
`sessions/<session_name>/plots/`.

## Available plot types

- **Bar chart**: objective value per experiment.
- **Scatter plot**: any parameter against any objective.
- **Histogram**: distribution of a single parameter or objective.
- **Grouped vertical bar chart**: objectives side by side for each experiment.
- **Circle pack plot**: categorical parameter levels sized by their count.
- **Response surface scatter plot**: model prediction over two parameters with
  the measured points overlaid.
- **Line plot**: best objective value per optimisation round.
- **Surface plot from unstructured data**: interpolated surface through the
  raw measurements, useful before a model is fitted.

## Forecast evaluation

After each round the application renders
`bayesian_forecasting_testset.png`, comparing predicted and measured
objective values on the held-out test set. Points close to the diagonal
indicate a well calibrated model.

## Exporting

Use **Export plots** to copy the whole `plots/` folder, or right click a plot
and choose **Save as** for a single file.
"#;
