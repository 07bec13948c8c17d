use crate::dataset::{AssetRef, VisualAssets};
use crate::prelude::Viewport;
use serde::Serialize;

pub struct ImageResolver;

impl ImageResolver {
    /// Asset for `model` at time step `time`, or `None` for unknown models and
    /// out-of-range steps.
    pub fn resolve<'a>(assets: &'a VisualAssets, model: &str, time: i64) -> Option<&'a AssetRef> {
        let index = usize::try_from(time).ok()?;
        assets.get(model)?.get(index)
    }
}

/// Image element of the inspector panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectorImage {
    pub file: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl InspectorImage {
    pub fn new(model: &str, time: i64, asset: &AssetRef, size: (u32, u32)) -> Self {
        Self {
            file: asset.file.clone(),
            alt: format!("{model}[{time}]: {}", asset.file),
            width: size.0,
            height: size.1,
        }
    }
}

/// Derived render of the image inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum InspectorView {
    Hidden,
    Shown {
        model: String,
        time: i64,
        /// Empty when there is no image to label.
        title: String,
        image: Option<InspectorImage>,
        candidates: Vec<String>,
        focused_index: Option<usize>,
    },
}

impl InspectorView {
    pub fn build(
        assets: &VisualAssets,
        model: &str,
        time: i64,
        candidates: &[String],
        viewport: &Viewport,
        panel_scale: f64,
    ) -> Self {
        let focused_index = candidates.iter().position(|name| name == model);
        // Only a model in the resolved selection may show its image.
        let image = focused_index
            .and_then(|_| ImageResolver::resolve(assets, model, time))
            .map(|asset| InspectorImage::new(model, time, asset, viewport.panel(panel_scale)));
        let title = if image.is_some() {
            format!("'{model}' (time: {time})")
        } else {
            String::new()
        };
        InspectorView::Shown {
            model: model.to_string(),
            time,
            title,
            image,
            candidates: candidates.to_vec(),
            focused_index,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, InspectorView::Hidden)
    }

    pub fn image(&self) -> Option<&InspectorImage> {
        match self {
            InspectorView::Shown { image, .. } => image.as_ref(),
            InspectorView::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::session;
    use proptest::prelude::*;

    #[test]
    fn resolves_asset_at_time_step() {
        let data = session(&["m1"], &[3]);
        let asset = ImageResolver::resolve(data.assets(), "m1", 2).unwrap();
        assert_eq!(asset.file, "models/m1/000002.png");
    }

    #[test]
    fn unknown_model_has_no_image() {
        let data = session(&["m1"], &[3]);
        assert!(ImageResolver::resolve(data.assets(), "m9", 0).is_none());
    }

    #[test]
    fn shown_panel_labels_image() {
        let data = session(&["m1", "m2"], &[2, 2]);
        let candidates = vec!["m1".to_string(), "m2".to_string()];
        let view = InspectorView::build(
            data.assets(),
            "m2",
            1,
            &candidates,
            &Viewport::new(800, 600),
            0.5,
        );
        let image = view.image().unwrap();
        assert_eq!(image.alt, "m2[1]: models/m2/000001.png");
        assert_eq!((image.width, image.height), (400, 300));
        match view {
            InspectorView::Shown {
                title,
                focused_index,
                ..
            } => {
                assert_eq!(title, "'m2' (time: 1)");
                assert_eq!(focused_index, Some(1));
            }
            InspectorView::Hidden => panic!("panel should be shown"),
        }
    }

    #[test]
    fn missing_image_keeps_selector() {
        let data = session(&["m1"], &[2]);
        let candidates = vec!["m1".to_string()];
        let view =
            InspectorView::build(data.assets(), "m1", 7, &candidates, &Viewport::default(), 0.5);
        assert!(!view.is_hidden());
        assert!(view.image().is_none());
    }

    #[test]
    fn model_outside_candidates_has_no_image() {
        let data = session(&["m1", "m3"], &[2, 2]);
        let candidates = vec!["m1".to_string()];
        let view =
            InspectorView::build(data.assets(), "m3", 1, &candidates, &Viewport::default(), 0.5);
        assert!(!view.is_hidden());
        assert!(view.image().is_none());
        match view {
            InspectorView::Shown {
                title,
                focused_index,
                ..
            } => {
                assert!(title.is_empty());
                assert_eq!(focused_index, None);
            }
            InspectorView::Hidden => panic!("panel should be shown"),
        }
    }

    proptest! {
        #[test]
        fn prop_out_of_range_time_has_no_image(len in 0usize..16, past in 0i64..100, before in 1i64..100) {
            let data = session(&["m1"], &[len]);
            prop_assert!(ImageResolver::resolve(data.assets(), "m1", len as i64 + past).is_none());
            prop_assert!(ImageResolver::resolve(data.assets(), "m1", -before).is_none());
        }
    }
}
