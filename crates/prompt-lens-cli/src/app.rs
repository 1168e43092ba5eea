use anyhow::Result;
use prompt_lens_engine::{Catalog, Category, PromptFile, ViewMode, io, render_content};
use ratatui::{text::Line, widgets::ListState};
use std::path::PathBuf;

use crate::paint;

/// What the content pane currently holds.
enum Loaded {
    Nothing,
    Content(String),
    Failed(String),
}

pub struct App {
    prompts_path: PathBuf,
    catalog: Catalog,
    category_index: usize,
    pub files: Vec<PromptFile>,
    pub file_list_state: ListState,
    mode: ViewMode,
    loaded: Loaded,
    pub current_content: Vec<Line<'static>>,
    pub scroll: u16,
}

impl App {
    pub fn new(
        prompts_path: PathBuf,
        catalog: Catalog,
        category_index: usize,
        file: Option<&str>,
        mode: ViewMode,
    ) -> Result<Self> {
        let mut app = Self {
            prompts_path,
            catalog,
            category_index,
            files: Vec::new(),
            file_list_state: ListState::default(),
            mode,
            loaded: Loaded::Nothing,
            current_content: Vec::new(),
            scroll: 0,
        };
        app.load_category()?;

        if let Some(name) = file {
            match app.files.iter().position(|f| f.name() == name) {
                Some(index) => {
                    app.file_list_state.select(Some(index));
                    app.update_content_for_selection();
                }
                None => log::warn!(
                    "file '{name}' not found in category '{}', showing first file",
                    app.category().slug
                ),
            }
        }

        Ok(app)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn category(&self) -> &Category {
        // category_index is only ever set from positions inside the catalog
        &self.catalog.as_slice()[self.category_index]
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selected_file(&self) -> Option<&PromptFile> {
        self.file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
    }

    fn load_category(&mut self) -> Result<()> {
        self.files = io::list_files(&self.prompts_path, self.category())?;
        // Select first file if available
        self.file_list_state
            .select(if self.files.is_empty() { None } else { Some(0) });
        self.update_content_for_selection();
        Ok(())
    }

    pub fn next_category(&mut self) -> Result<()> {
        self.category_index = (self.category_index + 1) % self.catalog.len();
        self.load_category()
    }

    pub fn previous_category(&mut self) -> Result<()> {
        self.category_index = if self.category_index == 0 {
            self.catalog.len() - 1
        } else {
            self.category_index - 1
        };
        self.load_category()
    }

    pub fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.refresh_view();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = u16::try_from(self.current_content.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn update_content_for_selection(&mut self) {
        let category = self.category();
        let loaded = match self.selected_file() {
            Some(file) => match io::read_file(&self.prompts_path, category, file.name()) {
                Ok(content) => Loaded::Content(content),
                Err(e) => {
                    log::warn!("failed to read {}: {e}", file.relative_path());
                    Loaded::Failed(format!("Unable to load file content: {e}"))
                }
            },
            None => Loaded::Nothing,
        };
        self.loaded = loaded;
        self.scroll = 0;
        self.refresh_view();
    }

    /// Rebuilds the painted content; runs only when the selection or mode changes.
    fn refresh_view(&mut self) {
        self.current_content = match &self.loaded {
            Loaded::Nothing => vec![Line::from(format!(
                "No files found for {}",
                self.category().name
            ))],
            Loaded::Failed(message) => vec![Line::from(message.clone())],
            Loaded::Content(content) => {
                let painted = paint::paint_nodes(&render_content(content, self.mode));
                if painted.is_empty() {
                    vec![Line::from("(empty file)")]
                } else {
                    painted
                }
            }
        };
    }

    /// The content pane as plain text lines.
    pub fn content_text(&self) -> Vec<String> {
        self.current_content
            .iter()
            .map(paint::line_to_string)
            .collect()
    }
}
