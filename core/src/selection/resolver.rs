use crate::dataset::Dataset;
use crate::prelude::SelectionState;

/// What the dependent views should actually show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing picked in a multi-model dashboard, or no data at all.
    NoSelection,
    /// The sole model of a single-model dashboard.
    AutoSelected(String),
    /// The models the user has picked, in dataset order.
    Selected(Vec<String>),
}

impl Resolution {
    pub fn models(&self) -> Vec<String> {
        match self {
            Resolution::NoSelection => Vec::new(),
            Resolution::AutoSelected(model) => vec![model.clone()],
            Resolution::Selected(models) => models.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Resolution::NoSelection)
    }
}

pub struct SelectionResolver;

impl SelectionResolver {
    pub fn resolve(selection: &SelectionState, dataset: &Dataset) -> Resolution {
        if !selection.selected_models.is_empty() {
            return Resolution::Selected(selection.selected_models.iter().cloned().collect());
        }
        let mut names = dataset.model_names();
        match (names.next(), names.next()) {
            (Some(only), None) => Resolution::AutoSelected(only.to_string()),
            _ => Resolution::NoSelection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::session;
    use proptest::prelude::*;

    #[test]
    fn explicit_selection_is_kept() {
        let data = session(&["a", "b"], &[1, 1]);
        let selection = SelectionState {
            selected_models: ["b".to_string()].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(
            SelectionResolver::resolve(&selection, data.dataset()),
            Resolution::Selected(vec!["b".into()])
        );
    }

    #[test]
    fn empty_dataset_resolves_to_nothing() {
        let data = session(&[], &[]);
        let resolution = SelectionResolver::resolve(&SelectionState::default(), data.dataset());
        assert!(resolution.is_empty());
        assert!(resolution.models().is_empty());
    }

    proptest! {
        #[test]
        fn prop_sole_model_is_auto_selected(name in "[a-z]{1,12}", steps in 0usize..20) {
            let data = session(&[name.as_str()], &[steps]);
            let resolution = SelectionResolver::resolve(&SelectionState::default(), data.dataset());
            prop_assert_eq!(resolution, Resolution::AutoSelected(name));
        }

        #[test]
        fn prop_unpicked_multi_model_has_no_selection(count in 2usize..8) {
            let names: Vec<String> = (0..count).map(|idx| format!("model_{idx}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let data = session(&refs, &vec![3; count]);
            let resolution = SelectionResolver::resolve(&SelectionState::default(), data.dataset());
            prop_assert_eq!(resolution, Resolution::NoSelection);
        }
    }
}
