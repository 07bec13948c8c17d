use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to the rendered image of one time step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub file: String,
}

impl AssetRef {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

/// Per-model image sequences, index-aligned with the model's records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualAssets {
    models: BTreeMap<String, Vec<AssetRef>>,
}

impl VisualAssets {
    pub fn new(models: BTreeMap<String, Vec<AssetRef>>) -> Self {
        Self { models }
    }

    pub fn get(&self, model: &str) -> Option<&[AssetRef]> {
        self.models.get(model).map(Vec::as_slice)
    }

    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<(String, Vec<AssetRef>)> for VisualAssets {
    fn from_iter<T: IntoIterator<Item = (String, Vec<AssetRef>)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
