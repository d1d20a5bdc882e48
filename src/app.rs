//! Application state and main event loop for the picker binary.

use crate::config::MenuConfig;
use crate::domain::MenuItem;
use crate::error::{AppError, Result};
use crate::ui::input::MenuKeymap;
use crate::ui::theme::Theme;
use crate::ui::widgets::{FuzzMenu, MenuAction, VMenu};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// The menu the picker drives
pub enum Picker {
    /// Menu with a filter prompt
    Fuzzy(FuzzMenu<String>),
    /// Plain menu
    Plain(VMenu<String>),
}

impl Picker {
    /// Forward a key to the menu
    pub fn handle_key(&mut self, key: KeyEvent) -> MenuAction {
        match self {
            Self::Fuzzy(menu) => menu.handle_key(key),
            Self::Plain(menu) => menu.handle_key(key),
        }
    }

    /// The current item, if any
    pub fn current(&self) -> Option<&MenuItem<String>> {
        match self {
            Self::Fuzzy(menu) => menu.current(),
            Self::Plain(menu) => menu.current(),
        }
    }

    /// (shown, total) item counts
    pub fn counts(&self) -> (usize, usize) {
        match self {
            Self::Fuzzy(menu) => (menu.filtered().len(), menu.items().len()),
            Self::Plain(menu) => (menu.items().len(), menu.items().len()),
        }
    }

    /// Width needed to show every label
    pub fn preferred_width(&self) -> usize {
        match self {
            Self::Fuzzy(menu) => menu.menu().preferred_width(),
            Self::Plain(menu) => menu.preferred_width(),
        }
    }
}

impl Widget for &mut Picker {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            Picker::Fuzzy(menu) => Widget::render(menu, area, buf),
            Picker::Plain(menu) => Widget::render(menu, area, buf),
        }
    }
}

/// Main application state
pub struct App {
    /// Loaded configuration
    pub config: MenuConfig,
    /// The menu
    pub picker: Picker,
    /// Item chosen with Enter
    pub chosen: Option<MenuItem<String>>,
    /// Should quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a picker over `items`; `filter` selects the fuzzy menu
    pub fn new(items: Vec<MenuItem<String>>, config: MenuConfig, filter: bool) -> Result<Self> {
        let theme = Theme::from_config(&config.theme)?;
        let keymap = MenuKeymap::from_config(&config.keys);

        let picker = if filter {
            Picker::Fuzzy(
                FuzzMenu::new(items)
                    .keymap(keymap)
                    .theme(theme)
                    .highlight_symbol(config.menu.highlight_symbol.as_str())
                    .prompt(config.menu.prompt.as_str())
                    .case_insensitive(config.menu.case_insensitive),
            )
        } else {
            Picker::Plain(
                VMenu::new(items)
                    .keymap(keymap)
                    .theme(theme)
                    .highlight_symbol(config.menu.highlight_symbol.as_str()),
            )
        };

        Ok(Self {
            config,
            picker,
            chosen: None,
            should_quit: false,
        })
    }

    /// Handle a key event, returns true if the application should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if ctrl_c || key.code == KeyCode::Esc {
            self.should_quit = true;
            return true;
        }

        if self.picker.handle_key(key) == MenuAction::Selected {
            self.chosen = self.picker.current().cloned();
            self.should_quit = true;
        }

        self.should_quit
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                match event::read().map_err(|e| AppError::Terminal(e.to_string()))? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        tracing::debug!("Terminal resized to {}x{}", width, height);
                    }
                    Event::FocusGained => self.set_focused(true),
                    Event::FocusLost => self.set_focused(false),
                    Event::Mouse(_) | Event::Paste(_) => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn set_focused(&mut self, focused: bool) {
        match &mut self.picker {
            Picker::Fuzzy(menu) => menu.set_focused(focused),
            Picker::Plain(menu) => menu.set_focused(focused),
        }
    }
}
