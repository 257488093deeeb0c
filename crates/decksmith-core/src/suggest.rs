//! Rule-based slide improvement hints. Deterministic, no I/O; the
//! AI-backed operations live in the `decksmith-ai` crate.

use serde::{Deserialize, Serialize};

use crate::{Layout, Slide};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    pub id: String,
    pub text: String,
    pub category: SuggestionCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionCategory {
    Content,
    Style,
    Structure,
}

/// Derive improvement suggestions from a slide's content and layout.
///
/// Rules fire independently and are emitted in declaration order.
pub fn suggestions_for(slide: &Slide) -> Vec<AiSuggestion> {
    let mut suggestions = Vec::new();
    let content = slide.content.to_lowercase();

    if content.len() < 50 {
        suggestions.push(AiSuggestion {
            id: "1".to_string(),
            text: "Add more detail to engage your audience".to_string(),
            category: SuggestionCategory::Content,
        });
    }

    if !content.contains("example") && !content.contains("instance") {
        suggestions.push(AiSuggestion {
            id: "2".to_string(),
            text: "Include a specific example to illustrate your point".to_string(),
            category: SuggestionCategory::Content,
        });
    }

    if slide.layout == Layout::Content && content.len() > 200 {
        suggestions.push(AiSuggestion {
            id: "3".to_string(),
            text: "Consider splitting this into two slides for better readability".to_string(),
            category: SuggestionCategory::Structure,
        });
    }

    suggestions
}

/// Apply a suggestion to a slide, returning the updated slide.
///
/// Only content suggestions mutate anything today; the style and structure
/// branches are placeholders carried over from the original editor and are
/// deliberately left as no-ops.
pub fn apply_suggestion(slide: &Slide, suggestion: &AiSuggestion) -> Slide {
    let mut updated = slide.clone();
    match suggestion.category {
        SuggestionCategory::Content => {
            updated.content.push_str("\n\n");
            updated.content.push_str(&suggestion.text);
        }
        SuggestionCategory::Style => {}
        SuggestionCategory::Structure => {}
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_BACKGROUND, DEFAULT_TEXT_COLOR};

    fn slide(content: &str, layout: Layout) -> Slide {
        Slide {
            id: "slide-1".to_string(),
            title: "Test".to_string(),
            content: content.to_string(),
            layout,
            background_color: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            image_url: None,
        }
    }

    #[test]
    fn short_slide_without_example_fires_both_content_rules() {
        let s = slide("Hello", Layout::Content);
        let suggestions = suggestions_for(&s);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id, "1");
        assert_eq!(suggestions[1].id, "2");
        assert!(suggestions
            .iter()
            .all(|s| s.category == SuggestionCategory::Content));
    }

    #[test]
    fn example_mention_suppresses_rule_two() {
        let s = slide(
            "For Instance, consider how this plays out in practice here.",
            Layout::Content,
        );
        let suggestions = suggestions_for(&s);
        assert!(suggestions.iter().all(|s| s.id != "2"));
    }

    #[test]
    fn long_content_layout_suggests_split() {
        let long = "word ".repeat(50);
        let s = slide(&long, Layout::Content);
        let suggestions = suggestions_for(&s);
        assert_eq!(suggestions.last().unwrap().id, "3");
        assert_eq!(
            suggestions.last().unwrap().category,
            SuggestionCategory::Structure
        );

        // Same length on a two-column layout does not fire the split rule.
        let s = slide(&long, Layout::TwoColumn);
        assert!(suggestions_for(&s).iter().all(|s| s.id != "3"));
    }

    #[test]
    fn suggestions_are_deterministic() {
        let s = slide("Hello", Layout::Content);
        assert_eq!(suggestions_for(&s), suggestions_for(&s));
    }

    #[test]
    fn content_suggestion_appends_with_blank_line() {
        let s = slide("Hello", Layout::Content);
        let suggestion = AiSuggestion {
            id: "1".to_string(),
            text: "Add more detail...".to_string(),
            category: SuggestionCategory::Content,
        };
        let updated = apply_suggestion(&s, &suggestion);
        assert_eq!(updated.content, "Hello\n\nAdd more detail...");
    }

    #[test]
    fn structure_and_style_suggestions_leave_slide_unchanged() {
        let s = slide("Hello", Layout::Content);
        for category in [SuggestionCategory::Style, SuggestionCategory::Structure] {
            let suggestion = AiSuggestion {
                id: "3".to_string(),
                text: "whatever".to_string(),
                category,
            };
            assert_eq!(apply_suggestion(&s, &suggestion), s);
        }
    }
}
