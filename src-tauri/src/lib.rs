use std::sync::{Arc, Mutex};

use decksmith_ai::Enhancement;
use decksmith_core::store::{DeckSnapshot, DeckStore};
use decksmith_core::suggest::{self, AiSuggestion};
use decksmith_core::{AiSettings, DraftSlide, Slide, Theme};

/// Managed state wrapping the presentation being edited.
struct DeckState(Arc<Mutex<DeckStore>>);

/// Managed state wrapping the AI settings.
struct SettingsState(Arc<Mutex<AiSettings>>);

#[tauri::command]
fn get_presentation(state: tauri::State<'_, DeckState>) -> Result<DeckSnapshot, String> {
    Ok(state.0.lock().unwrap().snapshot())
}

#[tauri::command]
fn update_slide(
    index: usize,
    slide: Slide,
    state: tauri::State<'_, DeckState>,
) -> Result<(), String> {
    state.0.lock().unwrap().update_slide(index, slide)
}

#[tauri::command]
fn add_slide(state: tauri::State<'_, DeckState>) -> Result<Slide, String> {
    Ok(state.0.lock().unwrap().add_slide())
}

#[tauri::command]
fn delete_slide(index: usize, state: tauri::State<'_, DeckState>) -> Result<DeckSnapshot, String> {
    let mut store = state.0.lock().unwrap();
    store.delete_slide(index);
    Ok(store.snapshot())
}

#[tauri::command]
fn select_slide(index: usize, state: tauri::State<'_, DeckState>) -> Result<(), String> {
    state.0.lock().unwrap().select(index);
    Ok(())
}

#[tauri::command]
fn set_presentation_title(title: String, state: tauri::State<'_, DeckState>) -> Result<(), String> {
    state.0.lock().unwrap().set_title(title);
    Ok(())
}

#[tauri::command]
fn set_theme(theme: Theme, state: tauri::State<'_, DeckState>) -> Result<(), String> {
    state.0.lock().unwrap().set_theme(theme);
    Ok(())
}

#[tauri::command]
fn set_slide_image(
    index: usize,
    url: String,
    state: tauri::State<'_, DeckState>,
) -> Result<(), String> {
    state.0.lock().unwrap().set_slide_image(index, url)
}

#[tauri::command]
fn slide_suggestions(
    index: usize,
    state: tauri::State<'_, DeckState>,
) -> Result<Vec<AiSuggestion>, String> {
    let store = state.0.lock().unwrap();
    let slide = store
        .slide(index)
        .ok_or_else(|| format!("no slide at index {}", index))?;
    Ok(suggest::suggestions_for(slide))
}

#[tauri::command]
fn apply_slide_suggestion(
    index: usize,
    suggestion: AiSuggestion,
    state: tauri::State<'_, DeckState>,
) -> Result<Slide, String> {
    let mut store = state.0.lock().unwrap();
    let slide = store
        .slide(index)
        .ok_or_else(|| format!("no slide at index {}", index))?;
    let updated = suggest::apply_suggestion(slide, &suggestion);
    store.update_slide(index, updated.clone())?;
    Ok(updated)
}

/// Generate an outline for a topic. Performs no mutation: the frontend
/// applies the returned drafts via `apply_generated`, so dismissing the
/// dialog mid-request simply means the result is discarded.
#[tauri::command]
async fn generate_outline(
    topic: String,
    state: tauri::State<'_, SettingsState>,
) -> Result<Vec<DraftSlide>, String> {
    let topic = topic.trim().to_string();
    if topic.is_empty() {
        // The dialog disables the action on empty input; this guards callers
        // that bypass it.
        return Err("topic must not be empty".to_string());
    }

    let settings = state.0.lock().unwrap().clone();
    let generated = decksmith_ai::generate_outline(&settings, &topic).await;
    Ok(decksmith_ai::resolve_drafts(&settings, generated).await)
}

#[tauri::command]
fn apply_generated(
    slides: Vec<DraftSlide>,
    state: tauri::State<'_, DeckState>,
) -> Result<DeckSnapshot, String> {
    if slides.is_empty() {
        return Err("generated slide sequence is empty".to_string());
    }
    let mut store = state.0.lock().unwrap();
    store.replace_slides(slides);
    Ok(store.snapshot())
}

/// Enhance the slide at `index`. The slide is identified by id before the
/// network call; if it no longer exists when the result arrives (deleted or
/// replaced mid-flight), the patch is discarded.
#[tauri::command]
async fn enhance_slide(
    index: usize,
    deck: tauri::State<'_, DeckState>,
    settings: tauri::State<'_, SettingsState>,
) -> Result<DeckSnapshot, String> {
    let (slide, ai_settings) = {
        let store = deck.0.lock().unwrap();
        let slide = store
            .slide(index)
            .ok_or_else(|| format!("no slide at index {}", index))?
            .clone();
        (slide, settings.0.lock().unwrap().clone())
    };

    let enhancement = decksmith_ai::enhance_slide(&ai_settings, &slide).await;

    let mut store = deck.0.lock().unwrap();
    apply_enhancement(&mut store, &slide.id, enhancement)?;
    Ok(store.snapshot())
}

/// Apply an enhancement to the slide with `slide_id`, if it still exists.
/// A fallback result (no layout recommendation) carries the pre-request
/// content and is dropped entirely, so edits made while the call was in
/// flight survive. Real results patch the live slide, not the pre-request
/// copy.
fn apply_enhancement(
    store: &mut DeckStore,
    slide_id: &str,
    enhancement: Enhancement,
) -> Result<(), String> {
    if enhancement.layout.is_none() {
        log::debug!("enhancement for {} fell back, leaving slide as-is", slide_id);
        return Ok(());
    }

    let pos = store
        .presentation()
        .slides
        .iter()
        .position(|s| s.id == slide_id);
    match pos.and_then(|p| store.slide(p).cloned().map(|s| (p, s))) {
        Some((pos, current)) => {
            let mut updated = current;
            updated.content = enhancement.content;
            if let Some(layout) = enhancement.layout {
                updated.layout = layout;
            }
            store.update_slide(pos, updated)
        }
        None => {
            log::debug!("slide {} vanished mid-enhancement, discarding result", slide_id);
            Ok(())
        }
    }
}

#[tauri::command]
async fn suggest_image(
    index: usize,
    deck: tauri::State<'_, DeckState>,
    settings: tauri::State<'_, SettingsState>,
) -> Result<String, String> {
    let (content, ai_settings) = {
        let store = deck.0.lock().unwrap();
        let slide = store
            .slide(index)
            .ok_or_else(|| format!("no slide at index {}", index))?;
        (slide.content.clone(), settings.0.lock().unwrap().clone())
    };
    Ok(decksmith_ai::suggest_image_url(&ai_settings, &content).await)
}

/// Export stub. Neither target writes a file or calls an API yet; the
/// returned text is shown to the user as a notification.
#[tauri::command]
fn export_presentation(target: String) -> Result<String, String> {
    match target.as_str() {
        "pptx" => Ok("Export to PowerPoint is not implemented yet. No file was written.".to_string()),
        "google" => {
            Ok("Export to Google Slides is not implemented yet. No file was written.".to_string())
        }
        other => Err(format!("unknown export target: {}", other)),
    }
}

#[tauri::command]
fn get_ai_settings(state: tauri::State<'_, SettingsState>) -> Result<serde_json::Value, String> {
    let settings = state.0.lock().unwrap().clone();
    let configured = decksmith_core::ai_configured(&settings);
    // Mask API key — only send whether it's set
    Ok(serde_json::json!({
        "model": settings.model,
        "endpoint": settings.endpoint,
        "timeoutSecs": settings.timeout_secs,
        "hasKey": !settings.api_key.is_empty(),
        "configured": configured,
    }))
}

#[tauri::command]
fn save_ai_settings(
    api_key: String,
    model: String,
    endpoint: String,
    state: tauri::State<'_, SettingsState>,
) -> Result<(), String> {
    let mut settings = state.0.lock().unwrap();
    settings.model = model;
    settings.endpoint = endpoint;
    // Empty key means "keep existing"
    if !api_key.is_empty() {
        settings.api_key = api_key;
    }
    decksmith_core::write_settings(&settings)
}


#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let store = Arc::new(Mutex::new(DeckStore::default()));

    let mut settings = decksmith_core::read_settings();
    if let Ok(key) = std::env::var("HUGGINGFACE_API_KEY") {
        if !key.is_empty() {
            settings.api_key = key;
        }
    }
    let settings_state = Arc::new(Mutex::new(settings));

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(DeckState(store))
        .manage(SettingsState(settings_state))
        .invoke_handler(tauri::generate_handler![
            get_presentation,
            update_slide,
            add_slide,
            delete_slide,
            select_slide,
            set_presentation_title,
            set_theme,
            set_slide_image,
            slide_suggestions,
            apply_slide_suggestion,
            generate_outline,
            apply_generated,
            enhance_slide,
            suggest_image,
            export_presentation,
            get_ai_settings,
            save_ai_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
