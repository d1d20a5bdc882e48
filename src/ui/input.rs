//! Keyboard input handling for menu navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode of the widget receiving keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Plain menu: every key is a candidate binding
    #[default]
    Normal,
    /// A text buffer owns printable keys (filter prompt)
    Insert,
}

/// Menu commands that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    First,
    Last,
    Up,
    Down,
    PageUp,
    PageDown,
    Select,
}

/// Keyboard bindings for menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuKeymap {
    /// j/k move down/up in `Normal` mode
    pub vim_navigation: bool,
    /// Space behaves like Enter
    pub space_selects: bool,
}

impl Default for MenuKeymap {
    fn default() -> Self {
        Self {
            vim_navigation: true,
            space_selects: true,
        }
    }
}

impl MenuKeymap {
    /// Create a keymap from the `[keys]` configuration section
    pub fn from_config(keys: &crate::config::KeysConfig) -> Self {
        Self {
            vim_navigation: keys.vim_navigation,
            space_selects: keys.space_selects,
        }
    }

    /// Resolve a key event to a menu command
    pub fn resolve(&self, key: KeyEvent, mode: InputMode) -> Option<MenuCommand> {
        let jump = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            // Ctrl+Home or Esc-prefixed Home (reported as Alt)
            KeyCode::Home if jump => Some(MenuCommand::First),
            KeyCode::End if jump => Some(MenuCommand::Last),

            KeyCode::Up => Some(MenuCommand::Up),
            KeyCode::Down => Some(MenuCommand::Down),
            KeyCode::PageUp => Some(MenuCommand::PageUp),
            KeyCode::PageDown => Some(MenuCommand::PageDown),

            KeyCode::Char('j') if self.vi_keys(key, mode) => Some(MenuCommand::Down),
            KeyCode::Char('k') if self.vi_keys(key, mode) => Some(MenuCommand::Up),

            KeyCode::Enter => Some(MenuCommand::Select),
            KeyCode::Char(' ') if self.space_selects && key.modifiers.is_empty() => {
                Some(MenuCommand::Select)
            }

            _ => None,
        }
    }

    fn vi_keys(&self, key: KeyEvent, mode: InputMode) -> bool {
        self.vim_navigation && mode == InputMode::Normal && key.modifiers.is_empty()
    }
}
