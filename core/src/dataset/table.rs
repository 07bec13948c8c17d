use super::{Dataset, Field, FieldValue};
use serde::Serialize;

/// Table handed to the primary motion chart: one row per (model, time step).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<PrimaryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryRow {
    pub model: String,
    pub values: Vec<FieldValue>,
}

impl PrimaryTable {
    /// Column `k` (1-based, after "Model") is vocabulary field `k - 1`, which
    /// is how the widget's axis options address it.
    pub fn build(dataset: &Dataset) -> Self {
        let mut columns = Vec::with_capacity(Field::ALL.len() + 1);
        columns.push("Model".to_string());
        columns.extend(Field::ALL.iter().map(|field| field.title().to_string()));

        let rows = dataset
            .iter()
            .flat_map(|(model, records)| {
                records.iter().enumerate().map(move |(step, record)| {
                    let values = Field::ALL
                        .iter()
                        .map(|&field| match field {
                            Field::Time => FieldValue::Number(step as f64),
                            other => record.value(other),
                        })
                        .collect();
                    PrimaryRow {
                        model: model.to_string(),
                        values,
                    }
                })
            })
            .collect();

        Self { columns, rows }
    }
}
