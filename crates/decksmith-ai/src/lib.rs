//! AI adapter: prompt the hosted text-generation endpoint for slide content
//! and normalize whatever comes back.
//!
//! Every operation resolves to a usable value. Transport errors, non-2xx
//! statuses, unparseable output and empty responses all collapse to the
//! operation's deterministic fallback; callers never see a failure, only
//! the log does.

pub mod engine;
mod parse;
mod prompt;

use serde::{Deserialize, Serialize};

use decksmith_core::{AiSettings, DraftSlide, Layout, Slide};

/// A slide descriptor as emitted by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSlide {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

/// Patch returned by content enhancement. `layout` is absent when the call
/// fell back to the original content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

pub const DEFAULT_IMAGE_URL: &str = "https://source.unsplash.com/featured/?presentation";

/// Generate a full presentation outline for a topic.
pub async fn generate_outline(settings: &AiSettings, topic: &str) -> Vec<GeneratedSlide> {
    match engine::generate(settings, &prompt::outline(topic), 1000).await {
        Ok(raw) => {
            let slides = parse::parse_outline(&raw);
            if slides.is_empty() {
                log::warn!("outline response contained no usable slides, using fallback");
                fallback_outline(topic)
            } else {
                log::debug!("generated {} slides for \"{}\"", slides.len(), topic);
                slides
            }
        }
        Err(e) => {
            log::warn!("outline generation failed: {e}");
            fallback_outline(topic)
        }
    }
}

fn fallback_outline(topic: &str) -> Vec<GeneratedSlide> {
    vec![
        GeneratedSlide {
            title: format!("Introduction to {topic}"),
            content: format!("Let's explore {topic} together."),
            layout: Layout::Title,
            image_prompt: None,
        },
        GeneratedSlide {
            title: "Key Points".to_string(),
            content: "Main aspects to consider...".to_string(),
            layout: Layout::Content,
            image_prompt: None,
        },
    ]
}

/// Rewrite a slide's content with better phrasing, recommending a
/// two-column layout when the rewrite runs long.
pub async fn enhance_slide(settings: &AiSettings, slide: &Slide) -> Enhancement {
    match engine::generate(settings, &prompt::enhance(&slide.content), 500).await {
        Ok(raw) => {
            let content = raw.trim().to_string();
            let layout = if content.len() > 200 {
                Layout::TwoColumn
            } else {
                slide.layout
            };
            Enhancement {
                content,
                layout: Some(layout),
            }
        }
        Err(e) => {
            log::warn!("enhancement failed: {e}");
            Enhancement {
                content: slide.content.clone(),
                layout: None,
            }
        }
    }
}

/// Turn slide content into an image-search URL via a model-suggested
/// keyword.
pub async fn suggest_image_url(settings: &AiSettings, content: &str) -> String {
    match engine::generate(settings, &prompt::image_keyword(content), 50).await {
        Ok(raw) => {
            let keyword = raw.trim().to_lowercase();
            format!(
                "https://source.unsplash.com/featured/?{}",
                urlencoding::encode(&keyword)
            )
        }
        Err(e) => {
            log::warn!("image suggestion failed: {e}");
            DEFAULT_IMAGE_URL.to_string()
        }
    }
}

/// Convert generated slides into insertable drafts, fetching image URLs for
/// image-layout slides. Fetches run in parallel; the draft sequence keeps
/// the original slide order.
pub async fn resolve_drafts(
    settings: &AiSettings,
    generated: Vec<GeneratedSlide>,
) -> Vec<DraftSlide> {
    let mut handles = Vec::with_capacity(generated.len());
    for slide in generated {
        let settings = settings.clone();
        handles.push(tokio::spawn(async move {
            let image_url = match (slide.layout, &slide.image_prompt) {
                (Layout::Image, Some(image_prompt)) => {
                    Some(suggest_image_url(&settings, image_prompt).await)
                }
                _ => None,
            };
            DraftSlide {
                title: slide.title,
                content: slide.content,
                layout: slide.layout,
                image_url,
            }
        }));
    }

    let mut drafts = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(draft) => drafts.push(draft),
            Err(e) => log::warn!("draft task failed: {e}"),
        }
    }
    drafts
}
