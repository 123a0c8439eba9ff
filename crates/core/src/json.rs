//! JSON rendering of extracted presentations.
//!
//! The JSON artifact is pretty-printed with stable key order (struct field
//! order) and round-trips: parsing the output reproduces an equal
//! `Presentation`.

use crate::error::Result;
use crate::types::Presentation;

/// Serialize a presentation to the canonical pretty-printed JSON artifact.
pub fn to_json(presentation: &Presentation) -> Result<String> {
    Ok(serde_json::to_string_pretty(presentation)?)
}

/// Parse a JSON artifact back into a presentation.
pub fn from_json(json: &str) -> Result<Presentation> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Shape, Slide};

    fn sample() -> Presentation {
        let mut pres = Presentation::new("quarterly.pptx");
        let mut slide = Slide::new(1);
        slide.title = "Q3 Results".to_string();
        slide.content = vec!["Revenue up".to_string(), "Costs down".to_string()];
        slide.notes = vec!["Pause here".to_string()];
        slide.shapes = vec![Shape::new("title", "Q3 Results")];
        pres.set_slides(vec![slide]);
        pres
    }

    #[test]
    fn test_round_trip() {
        let pres = sample();
        let json = to_json(&pres).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed, pres);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains("\"processedAt\""));
        assert!(json.contains("\"slideCount\""));
        assert!(json.contains("\"type\""));
        assert!(!json.contains("\"slide_count\""));
    }

    #[test]
    fn test_pretty_printed() {
        let json = to_json(&sample()).unwrap();
        assert!(json.contains('\n'));
    }
}
