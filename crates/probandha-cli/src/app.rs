use anyhow::Result;
use probandha_engine::{BlogPost, ContentBlock, GalleryCursor, Locale, PostFile, ScanOptions, io};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListState,
};
use std::path::PathBuf;

use crate::blocks::{GalleryView, block_lines};

/// One gallery block in the current post and its carousel position.
#[derive(Debug, Clone, Copy)]
struct GallerySlot {
    block_index: usize,
    cursor: GalleryCursor,
}

pub struct App {
    posts_path: PathBuf,
    scan: ScanOptions,
    pub posts: Vec<PostFile>,
    pub post_list_state: ListState,
    locale: Locale,
    current_post: Option<BlogPost>,
    blocks: Vec<ContentBlock>,
    galleries: Vec<GallerySlot>,
    focused_gallery: Option<usize>,
    message: Option<String>,
}

impl App {
    pub fn new(posts_path: PathBuf, locale: Locale, scan: ScanOptions) -> Result<Self> {
        let posts = io::scan_posts(&posts_path)?;

        let mut app = Self {
            posts_path,
            scan,
            posts,
            post_list_state: ListState::default(),
            locale,
            current_post: None,
            blocks: Vec::new(),
            galleries: Vec::new(),
            focused_gallery: None,
            message: None,
        };

        if !app.posts.is_empty() {
            app.post_list_state.select(Some(0));
            app.load_selected_post();
        }

        Ok(app)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn next_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(i) => (i + 1) % self.posts.len(),
            None => 0,
        };
        self.post_list_state.select(Some(i));
        self.load_selected_post();
    }

    pub fn previous_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.post_list_state.selected() {
            Some(0) | None => self.posts.len() - 1,
            Some(i) => i - 1,
        };
        self.post_list_state.select(Some(i));
        self.load_selected_post();
    }

    fn load_selected_post(&mut self) {
        let Some(file) = self
            .post_list_state
            .selected()
            .and_then(|i| self.posts.get(i))
        else {
            return;
        };

        match io::read_post(file.relative_path(), &self.posts_path) {
            Ok(post) => {
                log::debug!("Loaded post {}", file.relative_path());
                self.current_post = Some(post);
                self.message = None;
            }
            Err(e) => {
                log::warn!("Error reading post {}: {e}", file.relative_path());
                self.current_post = None;
                self.message = Some(format!("Error reading post: {e}"));
            }
        }
        self.rebuild_blocks();
    }

    /// Re-derives blocks for the current locale. Gallery positions reset.
    fn rebuild_blocks(&mut self) {
        self.blocks = match &self.current_post {
            Some(post) => post.blocks(self.locale, &self.scan),
            None => Vec::new(),
        };
        self.galleries = self
            .blocks
            .iter()
            .enumerate()
            .filter_map(|(block_index, block)| match block {
                ContentBlock::Gallery { images, .. } if !images.is_empty() => Some(GallerySlot {
                    block_index,
                    cursor: GalleryCursor::new(images.len()),
                }),
                _ => None,
            })
            .collect();
        self.focused_gallery = if self.galleries.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
        self.rebuild_blocks();
    }

    pub fn focus_next_gallery(&mut self) {
        if self.galleries.is_empty() {
            return;
        }
        self.focused_gallery = Some(match self.focused_gallery {
            Some(i) => (i + 1) % self.galleries.len(),
            None => 0,
        });
    }

    pub fn gallery_next(&mut self) {
        if let Some(slot) = self.focused_slot_mut() {
            slot.cursor.next();
        }
    }

    pub fn gallery_previous(&mut self) {
        if let Some(slot) = self.focused_slot_mut() {
            slot.cursor.previous();
        }
    }

    fn focused_slot_mut(&mut self) -> Option<&mut GallerySlot> {
        self.focused_gallery
            .and_then(|i| self.galleries.get_mut(i))
    }

    /// Cursor of the focused gallery, if the post has one.
    pub fn focused_gallery(&self) -> Option<GalleryCursor> {
        self.focused_gallery
            .and_then(|i| self.galleries.get(i))
            .map(|slot| slot.cursor)
    }

    fn gallery_view(&self, block_index: usize) -> Option<GalleryView> {
        self.galleries
            .iter()
            .position(|slot| slot.block_index == block_index)
            .map(|i| GalleryView {
                cursor: self.galleries[i].cursor,
                focused: self.focused_gallery == Some(i),
            })
    }

    pub fn content_lines(&self) -> Vec<Line<'static>> {
        if let Some(message) = &self.message {
            return vec![Line::styled(message.clone(), Style::default().fg(Color::Red))];
        }
        let Some(post) = &self.current_post else {
            return vec![Line::from("Select a post to preview it")];
        };

        let mut title = vec![Span::styled(
            post.title.get(self.locale).to_string(),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )];
        if !post.status.is_published() {
            title.push(Span::styled(
                format!(" [{}]", post.status.as_str()),
                Style::default().fg(Color::Yellow),
            ));
        }
        let mut lines = vec![Line::from(title)];
        if let Some(category) = &post.category {
            lines.push(Line::styled(
                category.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if post.shows_fallback(self.locale) {
            lines.push(Line::styled(
                self.locale.labels().untranslated,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }
        lines.push(Line::default());

        for (i, block) in self.blocks.iter().enumerate() {
            lines.extend(block_lines(block, self.gallery_view(i), self.locale));
            lines.push(Line::default());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &TempDir, name: &str, en: &str, bn: &str) {
        let json = serde_json::json!({
            "slug": name,
            "title": { "en": format!("{name} title"), "bn": "" },
            "content": { "en": en, "bn": bn }
        });
        fs::write(dir.path().join(format!("{name}.json")), json.to_string()).unwrap();
    }

    fn app_with_posts() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        write_post(
            &dir,
            "a",
            "Intro\n\n!GALLERY: One [1.jpg, 2.jpg, 3.jpg]\n\n!GALLERY: Two [x.jpg, y.jpg]",
            "বাংলা লেখা",
        );
        write_post(&dir, "b", "Second post", "");
        let app = App::new(dir.path().to_path_buf(), Locale::En, ScanOptions::default()).unwrap();
        (dir, app)
    }

    #[test]
    fn first_post_is_loaded() {
        let (_dir, app) = app_with_posts();
        assert_eq!(app.post_list_state.selected(), Some(0));
        assert_eq!(app.blocks().len(), 3);
        assert_eq!(app.focused_gallery().map(|c| c.len()), Some(3));
    }

    #[test]
    fn post_selection_wraps() {
        let (_dir, mut app) = app_with_posts();
        app.previous_post();
        assert_eq!(app.post_list_state.selected(), Some(1));
        app.next_post();
        assert_eq!(app.post_list_state.selected(), Some(0));
    }

    #[test]
    fn tab_cycles_gallery_focus() {
        let (_dir, mut app) = app_with_posts();
        app.focus_next_gallery();
        assert_eq!(app.focused_gallery().map(|c| c.len()), Some(2));
        app.focus_next_gallery();
        assert_eq!(app.focused_gallery().map(|c| c.len()), Some(3));
    }

    #[test]
    fn gallery_navigation_moves_focused_cursor_only() {
        let (_dir, mut app) = app_with_posts();
        app.gallery_previous();
        assert_eq!(app.focused_gallery().map(|c| c.index()), Some(2));
        app.focus_next_gallery();
        assert_eq!(app.focused_gallery().map(|c| c.index()), Some(0));
    }

    #[test]
    fn locale_toggle_rebuilds_blocks() {
        let (_dir, mut app) = app_with_posts();
        app.toggle_locale();
        assert_eq!(app.locale(), Locale::Bn);
        assert_eq!(
            app.blocks(),
            &[ContentBlock::Text {
                content: "বাংলা লেখা".to_string()
            }]
        );
        assert!(app.focused_gallery().is_none());
    }

    #[test]
    fn untranslated_post_falls_back_to_english() {
        let (_dir, mut app) = app_with_posts();
        app.next_post();
        app.toggle_locale();
        assert_eq!(
            app.blocks(),
            &[ContentBlock::Text {
                content: "Second post".to_string()
            }]
        );
    }

    #[test]
    fn header_marks_drafts_and_missing_translations() {
        let dir = TempDir::new().unwrap();
        let json = serde_json::json!({
            "slug": "wip",
            "title": { "en": "Work in progress" },
            "content": { "en": "Body" },
            "status": "draft"
        });
        fs::write(dir.path().join("wip.json"), json.to_string()).unwrap();
        let mut app = App::new(dir.path().to_path_buf(), Locale::En, ScanOptions::default()).unwrap();

        let lines = app.content_lines();
        assert_eq!(lines[0].to_string(), "Work in progress [draft]");
        assert_eq!(lines[1].to_string(), "");

        app.toggle_locale();
        let lines = app.content_lines();
        assert_eq!(lines[1].to_string(), Locale::Bn.labels().untranslated);
    }

    #[test]
    fn unreadable_post_shows_message() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let app = App::new(dir.path().to_path_buf(), Locale::En, ScanOptions::default()).unwrap();

        let lines = app.content_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].to_string().starts_with("Error reading post"));
    }

    #[test]
    fn empty_folder_has_no_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(dir.path().to_path_buf(), Locale::En, ScanOptions::default()).unwrap();
        app.next_post();
        assert_eq!(app.post_list_state.selected(), None);
        assert!(app.blocks().is_empty());
    }
}
