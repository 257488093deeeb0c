use serde::Serialize;

use crate::{
    DraftSlide, Layout, Presentation, Slide, DEFAULT_BACKGROUND, DEFAULT_TEXT_COLOR,
};

/// Owns the single presentation being edited plus the selection index.
///
/// All mutation goes through this store, so the "at least one slide" and
/// "selection stays in bounds" invariants are enforced in exactly one place.
pub struct DeckStore {
    presentation: Presentation,
    current: usize,
    /// Monotonic id counter. Never reset, not even by wholesale replacement,
    /// so slide ids stay unique for the document's lifetime.
    next_id: u64,
}

/// Serializable view of the store for the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    pub presentation: Presentation,
    pub current_slide_index: usize,
}

impl DeckStore {
    pub fn new(presentation: Presentation) -> Self {
        // Seed the counter past any numeric suffix already present.
        let max = presentation
            .slides
            .iter()
            .filter_map(|s| s.id.strip_prefix("slide-").and_then(|n| n.parse::<u64>().ok()))
            .max()
            .unwrap_or(0);
        DeckStore {
            presentation,
            current: 0,
            next_id: max + 1,
        }
    }

    fn mint_id(&mut self) -> String {
        let id = format!("slide-{}", self.next_id);
        self.next_id += 1;
        id
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            presentation: self.presentation.clone(),
            current_slide_index: self.current,
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.presentation.slides.get(index)
    }

    pub fn current_slide(&self) -> &Slide {
        // The selection invariant keeps `current` in bounds.
        &self.presentation.slides[self.current]
    }

    /// Replace the slide at `index` wholesale. The editor surface always
    /// passes the currently selected index, so an invalid index is a caller
    /// bug and reported as an error.
    pub fn update_slide(&mut self, index: usize, slide: Slide) -> Result<(), String> {
        match self.presentation.slides.get_mut(index) {
            Some(slot) => {
                *slot = slide;
                Ok(())
            }
            None => Err(format!("no slide at index {}", index)),
        }
    }

    /// Append a default slide and select it.
    pub fn add_slide(&mut self) -> Slide {
        let slide = Slide {
            id: self.mint_id(),
            title: "New Slide".to_string(),
            content: String::new(),
            layout: Layout::Content,
            background_color: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            image_url: None,
        };
        self.presentation.slides.push(slide.clone());
        self.current = self.presentation.slides.len() - 1;
        slide
    }

    /// Remove the slide at `index`. Refused (without error) when only one
    /// slide remains; a presentation always has at least one slide.
    pub fn delete_slide(&mut self, index: usize) {
        if self.presentation.slides.len() <= 1 {
            log::debug!("delete refused: last remaining slide");
            return;
        }
        if index >= self.presentation.slides.len() {
            return;
        }
        self.presentation.slides.remove(index);
        self.current = index.saturating_sub(1);
    }

    /// Discard the whole slide sequence in favor of generated drafts,
    /// minting fresh ids and resetting the selection. Empty input is refused
    /// so the "at least one slide" invariant holds trivially.
    pub fn replace_slides(&mut self, drafts: Vec<DraftSlide>) {
        if drafts.is_empty() {
            log::warn!("replace refused: empty slide sequence");
            return;
        }
        self.presentation.slides = drafts
            .into_iter()
            .map(|d| Slide {
                id: self.mint_id(),
                title: d.title,
                content: d.content,
                layout: d.layout,
                background_color: DEFAULT_BACKGROUND.to_string(),
                text_color: DEFAULT_TEXT_COLOR.to_string(),
                image_url: d.image_url,
            })
            .collect();
        self.current = 0;
    }

    pub fn select(&mut self, index: usize) {
        self.current = index.min(self.presentation.slides.len().saturating_sub(1));
    }

    pub fn set_title(&mut self, title: String) {
        self.presentation.title = title;
    }

    pub fn set_theme(&mut self, theme: crate::Theme) {
        self.presentation.theme = theme;
    }

    /// Attach a user-supplied image URL (accepted as-is, no validation) and
    /// switch the slide to the image layout.
    pub fn set_slide_image(&mut self, index: usize, url: String) -> Result<(), String> {
        match self.presentation.slides.get_mut(index) {
            Some(slide) => {
                slide.image_url = Some(url);
                slide.layout = Layout::Image;
                Ok(())
            }
            None => Err(format!("no slide at index {}", index)),
        }
    }
}

impl Default for DeckStore {
    fn default() -> Self {
        DeckStore::new(Presentation::starter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> DraftSlide {
        DraftSlide {
            title: title.to_string(),
            content: String::new(),
            layout: Layout::Content,
            image_url: None,
        }
    }

    #[test]
    fn add_slide_appends_and_selects() {
        let mut store = DeckStore::default();
        assert_eq!(store.presentation().slides.len(), 1);

        let slide = store.add_slide();
        assert_eq!(store.presentation().slides.len(), 2);
        assert_eq!(store.current_index(), 1);
        assert_eq!(slide.title, "New Slide");
        assert_eq!(slide.layout, Layout::Content);
    }

    #[test]
    fn delete_last_slide_is_refused() {
        let mut store = DeckStore::default();
        store.delete_slide(0);
        assert_eq!(store.presentation().slides.len(), 1);
    }

    #[test]
    fn delete_moves_selection_back() {
        let mut store = DeckStore::default();
        store.add_slide();
        store.add_slide();
        store.select(2);

        store.delete_slide(2);
        assert_eq!(store.presentation().slides.len(), 2);
        assert_eq!(store.current_index(), 1);

        // Deleting index 0 keeps the selection at 0.
        store.delete_slide(0);
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn delete_out_of_bounds_is_a_noop() {
        let mut store = DeckStore::default();
        store.add_slide();
        store.delete_slide(7);
        assert_eq!(store.presentation().slides.len(), 2);
    }

    #[test]
    fn update_slide_rejects_invalid_index() {
        let mut store = DeckStore::default();
        let mut slide = store.current_slide().clone();
        slide.title = "Changed".to_string();

        assert!(store.update_slide(0, slide.clone()).is_ok());
        assert_eq!(store.current_slide().title, "Changed");
        assert!(store.update_slide(5, slide).is_err());
    }

    #[test]
    fn replace_slides_resets_selection() {
        let mut store = DeckStore::default();
        store.add_slide();
        assert_eq!(store.current_index(), 1);

        store.replace_slides(vec![draft("A"), draft("B"), draft("C")]);
        assert_eq!(store.presentation().slides.len(), 3);
        assert_eq!(store.current_index(), 0);
        assert_eq!(store.presentation().slides[0].title, "A");
    }

    #[test]
    fn replace_with_empty_input_is_refused() {
        let mut store = DeckStore::default();
        let before = store.presentation().clone();
        store.replace_slides(vec![]);
        assert_eq!(store.presentation(), &before);
    }

    #[test]
    fn ids_stay_unique_across_replacement() {
        let mut store = DeckStore::default();
        let first_id = store.current_slide().id.clone();

        store.replace_slides(vec![draft("A"), draft("B")]);
        let mut ids: Vec<String> = store
            .presentation()
            .slides
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert!(!ids.contains(&first_id));

        store.add_slide();
        ids.push(store.current_slide().id.clone());
        let unique: std::collections::HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn select_clamps_to_bounds() {
        let mut store = DeckStore::default();
        store.add_slide();
        store.select(99);
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn set_slide_image_switches_layout() {
        let mut store = DeckStore::default();
        store
            .set_slide_image(0, "https://example.com/pic.png".to_string())
            .unwrap();
        let slide = store.current_slide();
        assert_eq!(slide.layout, Layout::Image);
        assert_eq!(slide.image_url.as_deref(), Some("https://example.com/pic.png"));
    }
}
