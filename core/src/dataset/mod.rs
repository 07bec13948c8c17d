//! Immutable run data supplied once per session.

pub mod assets;
pub mod record;
pub mod table;

pub use assets::{AssetRef, VisualAssets};
pub use record::{Field, FieldValue, Record, PLOTTABLE_FIELDS};
pub use table::PrimaryTable;

use crate::prelude::{DashboardError, DashboardResult};
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Time-ordered records per model. Position `i` is time step `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    models: BTreeMap<String, Vec<Record>>,
}

impl Dataset {
    pub fn new(models: BTreeMap<String, Vec<Record>>) -> Self {
        Self { models }
    }

    pub fn records(&self, model: &str) -> Option<&[Record]> {
        self.models.get(model).map(Vec::as_slice)
    }

    /// Model names in column order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.models
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<(String, Vec<Record>)> for Dataset {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Record>)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Records and images for a session, checked to share index semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionData", into = "RawSessionData")]
pub struct SessionData {
    dataset: Dataset,
    assets: VisualAssets,
}

impl SessionData {
    pub fn new(dataset: Dataset, assets: VisualAssets) -> DashboardResult<Self> {
        if let Err(err) = check_alignment(&dataset, &assets) {
            LogManager::new("dataset").warn(&format!("rejecting session data: {err}"));
            return Err(err);
        }
        Ok(Self { dataset, assets })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn assets(&self) -> &VisualAssets {
        &self.assets
    }
}

fn check_alignment(dataset: &Dataset, assets: &VisualAssets) -> DashboardResult<()> {
    for (model, records) in dataset.iter() {
        let images = assets
            .get(model)
            .ok_or_else(|| DashboardError::MissingAssets(model.to_string()))?;
        if images.len() != records.len() {
            return Err(DashboardError::MisalignedAssets {
                model: model.to_string(),
                records: records.len(),
                assets: images.len(),
            });
        }
    }
    if let Some(orphan) = assets.models().find(|model| !dataset.contains(model)) {
        return Err(DashboardError::MissingRecords(orphan.to_string()));
    }
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct RawSessionData {
    all_data: Dataset,
    viz_data: VisualAssets,
}

impl TryFrom<RawSessionData> for SessionData {
    type Error = DashboardError;

    fn try_from(raw: RawSessionData) -> DashboardResult<Self> {
        SessionData::new(raw.all_data, raw.viz_data)
    }
}

impl From<SessionData> for RawSessionData {
    fn from(data: SessionData) -> Self {
        Self {
            all_data: data.dataset,
            viz_data: data.assets,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{record, session};
    use super::*;

    #[test]
    fn session_data_rejects_misaligned_assets() {
        let dataset: Dataset = [("m1".to_string(), vec![record(0, 1.0), record(1, 2.0)])]
            .into_iter()
            .collect();
        let assets: VisualAssets = [("m1".to_string(), vec![AssetRef::new("a0.png")])]
            .into_iter()
            .collect();
        let err = SessionData::new(dataset, assets).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::MisalignedAssets {
                records: 2,
                assets: 1,
                ..
            }
        ));
    }

    #[test]
    fn session_data_rejects_unmatched_models() {
        let dataset: Dataset = [("m1".to_string(), vec![record(0, 1.0)])]
            .into_iter()
            .collect();
        let err = SessionData::new(dataset, VisualAssets::default()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingAssets(name) if name == "m1"));

        let assets: VisualAssets = [("ghost".to_string(), vec![AssetRef::new("g.png")])]
            .into_iter()
            .collect();
        let err = SessionData::new(Dataset::default(), assets).unwrap_err();
        assert!(matches!(err, DashboardError::MissingRecords(name) if name == "ghost"));
    }

    #[test]
    fn session_data_reads_exported_json() {
        let json = r#"{
            "all_data": {"m1": [{"time": 0, "temperature": 0.1, "energy": -1.0,
                "director_variance": 0.0, "avg_director_dist": 0.0, "time_used": 2,
                "num_directors": 8, "potential": "LJ", "potential_approx": "Fixed",
                "process": "Heating"}]},
            "viz_data": {"m1": [{"file": "models/m1/000001.png"}]}
        }"#;
        let data: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(data.dataset().len(), 1);
        assert_eq!(data.assets().get("m1").unwrap()[0].file, "models/m1/000001.png");
    }

    #[test]
    fn model_names_are_sorted() {
        let data = session(&["zeta", "alpha"], &[1, 1]);
        let names: Vec<_> = data.dataset().model_names().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
