//! Opaque serialization of presentation snapshots.
//!
//! JSON is the canonical form: camelCase keys, the shape a host UI stores and
//! reloads. YAML is offered for human-readable dumps.

use crate::common::{Error, Result};
use crate::presentation::Presentation;

/// Serialize a snapshot to compact JSON.
pub fn to_json(presentation: &Presentation) -> Result<String> {
    Ok(serde_json::to_string(presentation)?)
}

/// Serialize a snapshot to indented JSON.
pub fn to_json_pretty(presentation: &Presentation) -> Result<String> {
    Ok(serde_json::to_string_pretty(presentation)?)
}

/// Parse a snapshot from JSON. Missing `theme` and `mediaLibrary` take defaults.
pub fn from_json(json: &str) -> Result<Presentation> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a snapshot to YAML.
pub fn to_yaml(presentation: &Presentation) -> Result<String> {
    serde_saphyr::to_string(presentation).map_err(|e| Error::Yaml(e.to_string()))
}

/// Parse a snapshot from YAML.
pub fn from_yaml(yaml: &str) -> Result<Presentation> {
    serde_saphyr::from_str(yaml).map_err(|e| Error::Yaml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::IdStrategy;
    use crate::config::StoreOptions;
    use crate::media::{MediaType, NewMedia};
    use crate::presentation::{
        ContentStyle, ContentType, ContentUpdate, DocumentStore, SlideLayout, SlideUpdate,
        TextAlign,
    };

    fn rich_presentation() -> Presentation {
        let mut store =
            DocumentStore::with_options(StoreOptions::new().with_id_strategy(IdStrategy::Sequential));
        store.create_presentation("Roadmap");
        let slide = store.add_slide(SlideLayout::TitleImageText).applied().unwrap();
        store.update_slide(&slide, SlideUpdate::new().background(Some("#102030")));
        let text = store.current().unwrap().slides[1].content[1].id.clone();
        store.update_content(
            &slide,
            &text,
            ContentUpdate::value("Milestones").with_style(Some(ContentStyle {
                color: Some("#ff0000".to_string()),
                font_size: Some("24px".to_string()),
                font_weight: None,
                text_align: Some(TextAlign::Center),
            })),
        );
        store.add_slide(SlideLayout::parse("mosaic"));
        store.add_media_to_library(
            NewMedia::new(MediaType::Image, "https://x/logo.png", "Logo").with_thumbnail("https://x/t.png"),
        );
        store.add_media_to_current_slide(ContentType::Audio);
        (**store.current().unwrap()).clone()
    }

    #[test]
    fn test_json_round_trip_preserves_everything() {
        let pres = rich_presentation();
        let json = to_json(&pres).unwrap();
        assert_eq!(from_json(&json).unwrap(), pres);

        let pretty = to_json_pretty(&pres).unwrap();
        assert_eq!(from_json(&pretty).unwrap(), pres);
    }

    #[test]
    fn test_json_key_names() {
        let value: serde_json::Value = serde_json::from_str(&to_json(&rich_presentation()).unwrap()).unwrap();
        assert!(value.get("mediaLibrary").is_some());
        assert_eq!(value["theme"]["primaryColor"], "#3b82f6");
        assert_eq!(value["slides"][1]["background"], "#102030");
        assert_eq!(value["slides"][1]["content"][1]["style"]["fontSize"], "24px");
        assert_eq!(value["slides"][1]["content"][1]["style"]["textAlign"], "center");
        assert_eq!(value["slides"][2]["layout"], "mosaic");
        assert_eq!(value["mediaLibrary"][0]["type"], "image");
        assert!(value["mediaLibrary"][0].get("dateAdded").is_some());
    }

    #[test]
    fn test_minimal_json_takes_defaults() {
        let pres = from_json(r#"{"id":"p9","title":"Bare","slides":[]}"#).unwrap();
        assert_eq!(pres.title, "Bare");
        assert!(pres.media_library.is_empty());
        assert_eq!(pres.theme.font_family, "Inter, sans-serif");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let pres = rich_presentation();
        let yaml = to_yaml(&pres).unwrap();
        assert!(yaml.contains("Roadmap"));
        assert_eq!(from_yaml(&yaml).unwrap(), pres);
    }
}
