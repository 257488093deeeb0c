use crate::GeneratedSlide;

/// Parse raw model output into slide descriptors.
///
/// The model is instructed to emit a JSON array but is not trusted to return
/// pure JSON: the array substring is located first, then parsed as a whole,
/// then salvaged object-by-object if the whole-array parse fails. Returns an
/// empty vec on total failure (the caller substitutes its fallback).
pub fn parse_outline(raw: &str) -> Vec<GeneratedSlide> {
    let json_str = match extract_json_array(raw) {
        Some(s) => s,
        None => return vec![],
    };

    match serde_json::from_str(&json_str) {
        Ok(slides) => slides,
        Err(_) => parse_object_by_object(&json_str),
    }
}

/// Extract the JSON array substring from raw model output (first `[` to
/// last `]`, surrounding prose ignored).
fn extract_json_array(raw: &str) -> Option<String> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(raw[start..=end].to_string())
}

/// Salvage individual objects from a malformed JSON array.
fn parse_object_by_object(json_str: &str) -> Vec<GeneratedSlide> {
    let inner = json_str
        .trim()
        .strip_prefix('[')
        .unwrap_or(json_str)
        .strip_suffix(']')
        .unwrap_or(json_str);

    let mut slides = Vec::new();
    let mut depth = 0;
    let mut start = None;

    for (i, ch) in inner.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    if let Some(s) = start {
                        let obj_str = &inner[s..=i];
                        if let Ok(slide) = serde_json::from_str::<GeneratedSlide>(obj_str) {
                            slides.push(slide);
                        }
                    }
                    start = None;
                }
            }
            _ => {}
        }
    }

    slides
}

#[cfg(test)]
mod tests {
    use super::*;
    use decksmith_core::Layout;

    #[test]
    fn ignores_prose_around_the_array() {
        let raw = "Sure! Here is your outline:\n\
            [{\"title\":\"A\",\"content\":\"B\",\"layout\":\"title\"}]\n\
            Let me know if you need anything else.";
        let slides = parse_outline(raw);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "A");
        assert_eq!(slides[0].content, "B");
        assert_eq!(slides[0].layout, Layout::Title);
    }

    #[test]
    fn parses_image_prompt_and_defaults_layout() {
        let raw = r#"[
            {"title":"Pics","content":"...","layout":"image","imagePrompt":"a rocket"},
            {"title":"Plain","content":"..."}
        ]"#;
        let slides = parse_outline(raw);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].image_prompt.as_deref(), Some("a rocket"));
        assert_eq!(slides[1].layout, Layout::Content);
    }

    #[test]
    fn salvages_objects_from_a_malformed_array() {
        // Trailing comma breaks the whole-array parse; both objects are
        // still recoverable individually.
        let raw = r#"[
            {"title":"A","content":"a","layout":"content"},
            {"title":"B","content":"b","layout":"twoColumn"},
        ]"#;
        let slides = parse_outline(raw);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].layout, Layout::TwoColumn);
    }

    #[test]
    fn drops_objects_with_unknown_layouts_during_salvage() {
        let raw = r#"[
            {"title":"A","content":"a","layout":"hologram"},
            {"title":"B","content":"b","layout":"content"},
        ]"#;
        let slides = parse_outline(raw);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "B");
    }

    #[test]
    fn no_array_means_no_slides() {
        assert!(parse_outline("I could not produce an outline.").is_empty());
        assert!(parse_outline("]oops[").is_empty());
        assert!(parse_outline("").is_empty());
    }
}
