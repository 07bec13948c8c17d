use crate::dataset::{Dataset, Field};
use crate::telemetry::LogManager;
use serde::Serialize;

/// Row-projected table for the per-axis scatter comparison.
///
/// Every row carries exactly one populated model column so the renderer never
/// joins points of different models.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparatorTable {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One Y column per model, in dataset order.
    pub columns: Vec<String>,
    pub rows: Vec<ComparatorRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparatorRow {
    pub x: f64,
    pub values: Vec<Option<f64>>,
}

impl ComparatorTable {
    /// Single blank point rendered when there is nothing to compare.
    pub fn empty() -> Self {
        Self {
            title: "Model: ''".to_string(),
            x_label: String::new(),
            y_label: String::new(),
            columns: vec![String::new()],
            rows: vec![ComparatorRow {
                x: 0.0,
                values: vec![None],
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

pub struct ComparatorProjector;

impl ComparatorProjector {
    /// Projects `models` onto the 0-based vocabulary axes `(x, y)`.
    pub fn project(dataset: &Dataset, models: &[String], x: i64, y: i64) -> ComparatorTable {
        let logger = LogManager::new("comparator");
        let (Some(x_field), Some(y_field)) = (Field::plottable(x), Field::plottable(y)) else {
            logger.trace(&format!("empty comparison: axes ({x}, {y}) are not plottable"));
            return ComparatorTable::empty();
        };

        let series: Vec<_> = models
            .iter()
            .filter_map(|name| dataset.records(name).map(|records| (name, records)))
            .collect();
        if series.is_empty() {
            logger.trace("empty comparison: no resolved models");
            return ComparatorTable::empty();
        }

        let total: usize = series.iter().map(|(_, records)| records.len()).sum();
        let mut rows = Vec::with_capacity(total);
        for (column, (_, records)) in series.iter().enumerate() {
            for record in records.iter() {
                let mut values = vec![None; series.len()];
                values[column] = record.number(y_field);
                rows.push(ComparatorRow {
                    x: record.number(x_field).unwrap_or_default(),
                    values,
                });
            }
        }

        let names: Vec<&str> = series.iter().map(|(name, _)| name.as_str()).collect();
        ComparatorTable {
            title: title_for(&names),
            x_label: x_field.title().to_string(),
            y_label: y_field.title().to_string(),
            columns: names.iter().map(|name| name.to_string()).collect(),
            rows,
        }
    }
}

fn title_for(names: &[&str]) -> String {
    match names {
        [only] => format!("Model: '{only}'"),
        _ => {
            let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
            format!("Models: {}", quoted.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::session;
    use crate::selection::ALPHABETICAL_SENTINEL;
    use proptest::prelude::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn single_model_projection() {
        let data = session(&["m1", "m2"], &[3, 2]);
        let table = ComparatorProjector::project(data.dataset(), &names(&["m1"]), 0, 1);
        assert_eq!(table.title, "Model: 'm1'");
        assert_eq!(table.x_label, "Event");
        assert_eq!(table.y_label, "Temperature");
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2].x, 2.0);
        assert_eq!(table.rows[2].values, vec![Some(2.5)]);
    }

    #[test]
    fn rows_only_populate_their_owning_model() {
        let data = session(&["m1", "m2"], &[2, 2]);
        let table = ComparatorProjector::project(data.dataset(), &names(&["m1", "m2"]), 1, 2);
        assert_eq!(table.title, "Models: 'm1' 'm2'");
        assert_eq!(table.columns, names(&["m1", "m2"]));
        assert_eq!(table.rows[0].values[1], None);
        assert!(table.rows[0].values[0].is_some());
        assert_eq!(table.rows[3].values[0], None);
        assert!(table.rows[3].values[1].is_some());
    }

    #[test]
    fn categorical_or_sentinel_axis_is_degenerate() {
        let data = session(&["m1"], &[4]);
        let models = names(&["m1"]);
        for (x, y) in [(6, 1), (1, 9), (ALPHABETICAL_SENTINEL, 1), (-1, 1)] {
            assert_eq!(
                ComparatorProjector::project(data.dataset(), &models, x, y),
                ComparatorTable::empty()
            );
        }
    }

    #[test]
    fn no_models_is_degenerate() {
        let data = session(&["m1"], &[4]);
        let table = ComparatorProjector::project(data.dataset(), &[], 0, 1);
        assert!(table.is_empty());
        assert_eq!(table.title, "Model: ''");
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn blank_model_name_is_not_the_empty_form() {
        let data = session(&[""], &[1]);
        let table = ComparatorProjector::project(data.dataset(), &names(&[""]), 0, 1);
        assert_eq!(table.columns, names(&[""]));
        assert_eq!(table.rows[0].values, vec![Some(0.5)]);
        assert!(!table.is_empty());
    }

    proptest! {
        #[test]
        fn prop_row_count_matches_record_total(
            steps in prop::collection::vec(0usize..12, 1..6),
            x in 0i64..6,
            y in 0i64..6
        ) {
            let owned: Vec<String> = (0..steps.len()).map(|idx| format!("m{idx}")).collect();
            let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
            let data = session(&refs, &steps);
            let table = ComparatorProjector::project(data.dataset(), &owned, x, y);
            let total: usize = steps.iter().sum();
            prop_assert_eq!(table.rows.len(), total);
            for row in &table.rows {
                prop_assert_eq!(row.values.iter().filter(|v| v.is_some()).count(), 1);
            }
        }

        #[test]
        fn prop_out_of_range_axis_is_always_degenerate(x in 6i64..200, y in 0i64..6) {
            let data = session(&["m1", "m2"], &[2, 3]);
            let table = ComparatorProjector::project(data.dataset(), &names(&["m1", "m2"]), x, y);
            prop_assert_eq!(table, ComparatorTable::empty());
        }
    }
}
