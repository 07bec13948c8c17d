use lcdash::session::stock_state;
use lcdash::views::InspectorView;
use lcdash::{
    AssetRef, Dataset, Orchestrator, Record, SessionConfig, SessionData, SessionPhase,
    VisualAssets,
};

fn record(step: usize) -> Record {
    Record {
        time: step as f64,
        temperature: 0.2 * (step + 1) as f64,
        energy: -1.5 * (step + 1) as f64,
        director_variance: 0.01,
        avg_director_dist: 0.02,
        time_used: 3.0,
        num_directors: 27,
        potential: "GayBernePotential".into(),
        potential_approx: "FixedNearestNeighbours".into(),
        process: (if step == 0 { "Heating" } else { "Cooling" }).to_string(),
    }
}

fn single_model() -> SessionData {
    let dataset: Dataset = [("m1".to_string(), vec![record(0), record(1)])]
        .into_iter()
        .collect();
    let assets: VisualAssets = [(
        "m1".to_string(),
        vec![AssetRef::new("models/m1/a0.png"), AssetRef::new("models/m1/a1.png")],
    )]
    .into_iter()
    .collect();
    SessionData::new(dataset, assets).unwrap()
}

fn two_models() -> SessionData {
    let dataset: Dataset = ["m1", "m2"]
        .iter()
        .map(|name| (name.to_string(), vec![record(0), record(1), record(2)]))
        .collect();
    let assets: VisualAssets = ["m1", "m2"]
        .iter()
        .map(|name| {
            let files: Vec<AssetRef> = (0..3)
                .map(|step| AssetRef::new(format!("models/{name}/{step}.png")))
                .collect();
            (name.to_string(), files)
        })
        .collect();
    SessionData::new(dataset, assets).unwrap()
}

fn config() -> SessionConfig {
    SessionConfig {
        base_year: 2000,
        ..Default::default()
    }
}

#[test]
fn single_model_auto_selects_and_tracks_time() {
    let mut orch = Orchestrator::new(single_model(), config());
    let redraw = orch.on_state_change(Some(r#"{"time":"2001"}"#));

    assert_eq!(redraw.phase, SessionPhase::SingleAutoSelected);
    assert_eq!(redraw.selection.time_offset, 1);
    assert!(redraw.selection.selected_models.is_empty());

    assert_eq!(redraw.comparator.title, "Model: 'm1'");
    assert_eq!(redraw.comparator.rows.len(), 2);
    for row in &redraw.comparator.rows {
        assert_eq!(row.values.iter().filter(|v| v.is_some()).count(), 1);
    }

    let image = redraw.inspector.image().expect("inspector should show an image");
    assert_eq!(image.file, "models/m1/a1.png");
    assert_eq!(image.alt, "m1[1]: models/m1/a1.png");
}

#[test]
fn null_or_empty_state_renders_empty_views() {
    for state in [None, Some("")] {
        let mut orch = Orchestrator::new(single_model(), config());
        let redraw = orch.on_state_change(state);
        assert_eq!(redraw.phase, SessionPhase::NoSelection);
        assert!(redraw.comparator.is_empty());
        assert_eq!(redraw.comparator.title, "Model: ''");
        assert_eq!(redraw.inspector, InspectorView::Hidden);
    }
}

#[test]
fn multi_model_without_selection_is_empty() {
    let mut orch = Orchestrator::new(two_models(), config());
    let redraw = orch.on_state_change(Some(&stock_state(2000)));
    assert_eq!(redraw.phase, SessionPhase::NoSelection);
    assert!(redraw.comparator.is_empty());
    assert!(redraw.inspector.is_hidden());
}

#[test]
fn multi_selection_projects_every_record() {
    let mut orch = Orchestrator::new(two_models(), config());
    let state = r#"{"time":"2002","xAxisOption":"3","yAxisOption":"2","iconKeySettings":[{"key":{"dim0":"m1"}},{"key":{"dim0":"m2"}}]}"#;
    let redraw = orch.on_state_change(Some(state));

    assert_eq!(redraw.phase, SessionPhase::MultiSelected);
    assert_eq!(redraw.comparator.title, "Models: 'm1' 'm2'");
    assert_eq!(redraw.comparator.x_label, "Energy");
    assert_eq!(redraw.comparator.y_label, "Temperature");
    assert_eq!(redraw.comparator.rows.len(), 6);
    assert_eq!(redraw.comparator.rows[0].x, -1.5);

    let view = orch.on_focus_change("m2");
    assert_eq!(
        view.image().map(|image| image.file.as_str()),
        Some("models/m2/2.png")
    );
}

#[test]
fn categorical_axis_empties_comparison_only() {
    let mut orch = Orchestrator::new(two_models(), config());
    let state = r#"{"time":"2000","xAxisOption":"9","iconKeySettings":[{"key":{"dim0":"m1"}}]}"#;
    let redraw = orch.on_state_change(Some(state));
    assert!(redraw.comparator.is_empty());
    assert!(redraw.inspector.image().is_some());
}

#[test]
fn primary_table_covers_all_models() {
    let orch = Orchestrator::new(two_models(), config());
    let table = orch.primary_table();
    assert_eq!(table.rows.len(), 6);
    assert_eq!(table.columns[3], "Energy");
}
