pub mod store;
pub mod suggest;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// --- Types (matching the frontend's TypeScript shapes) ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    Title,
    Content,
    TwoColumn,
    Image,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Content
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub layout: Layout,
    pub background_color: String,
    pub text_color: String,
    /// Expected when layout is `Image`; the editor views assume it but
    /// nothing enforces it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary: "#3b82f6".to_string(),
            secondary: "#93c5fd".to_string(),
            font: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub id: String,
    pub title: String,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub theme: Theme,
}

/// An id-less slide payload, as produced by AI generation. The store mints
/// ids when the drafts are inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftSlide {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

impl Presentation {
    /// The document every session starts from: a single welcome slide.
    pub fn starter() -> Self {
        Presentation {
            id: "presentation-1".to_string(),
            title: "Untitled Presentation".to_string(),
            slides: vec![Slide {
                id: "slide-1".to_string(),
                title: "Welcome to Decksmith".to_string(),
                content: "Create beautiful presentations with AI assistance".to_string(),
                layout: Layout::Title,
                background_color: DEFAULT_BACKGROUND.to_string(),
                text_color: DEFAULT_TEXT_COLOR.to_string(),
                image_url: None,
            }],
            theme: Theme::default(),
        }
    }
}

// --- AI Settings ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Whole-request timeout in seconds. A stalled endpoint becomes an
    /// error (and thus a fallback) instead of hanging the caller.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "mistralai/Mistral-7B-Instruct-v0.2".to_string()
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for AiSettings {
    fn default() -> Self {
        AiSettings {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resolve the global config directory (~/.decksmith/).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".decksmith")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn read_settings() -> AiSettings {
    let path = settings_path();
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), String> {
    let dir = config_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(settings_path(), json).map_err(|e| e.to_string())
}

pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.model.is_empty() && !settings.api_key.is_empty()
}
