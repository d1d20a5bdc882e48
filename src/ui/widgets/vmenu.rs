//! Vertical menu widget with a single current item.

use crate::domain::MenuItem;
use crate::ui::input::{InputMode, MenuCommand, MenuKeymap};
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState},
};

/// Callback invoked with the label and payload of an item
pub type ItemCallback<T> = Box<dyn FnMut(&str, &T)>;

/// Actions that can result from menu key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Nothing observable happened
    None,
    /// The current item changed
    Moved,
    /// The current item was chosen (Enter)
    Selected,
    /// The filter pattern was edited
    FilterChanged,
}

/// Vertical selectable menu.
///
/// The menu owns its items and tracks the current one both by value and by
/// index, so the selection survives replacement of the item list as long as
/// the current item is still present.
pub struct VMenu<T> {
    items: Vec<MenuItem<T>>,
    current_item: Option<MenuItem<T>>,
    current_index: Option<usize>,
    on_current: Option<ItemCallback<T>>,
    on_enter: Option<ItemCallback<T>>,
    keymap: MenuKeymap,
    mode: InputMode,
    theme: Theme,
    highlight_symbol: String,
    focused: bool,
    list_state: ListState,
    /// Lines shown by the last render; `None` until rendered
    displayed_lines: Option<usize>,
}

impl<T: Clone + PartialEq> VMenu<T> {
    /// Create a menu whose first item is current
    pub fn new(items: Vec<MenuItem<T>>) -> Self {
        let current_item = items.first().cloned();
        let current_index = current_item.as_ref().map(|_| 0);
        Self {
            items,
            current_item,
            current_index,
            on_current: None,
            on_enter: None,
            keymap: MenuKeymap::default(),
            mode: InputMode::Normal,
            theme: Theme::default(),
            highlight_symbol: String::new(),
            focused: true,
            list_state: ListState::default(),
            displayed_lines: None,
        }
    }

    /// Register the current-item callback; it is notified of the initial
    /// current item right away.
    pub fn on_current(mut self, callback: impl FnMut(&str, &T) + 'static) -> Self {
        self.on_current = Some(Box::new(callback));
        self.handle_current();
        self
    }

    /// Register the callback invoked when the current item is chosen
    pub fn on_enter(mut self, callback: impl FnMut(&str, &T) + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    /// Set key bindings
    pub fn keymap(mut self, keymap: MenuKeymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Set styles
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the prefix drawn before the current item
    pub fn highlight_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.highlight_symbol = symbol.into();
        self
    }

    pub(crate) fn input_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set focused state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Check focused state
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Items currently shown
    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    /// The current item, if any
    pub fn current(&self) -> Option<&MenuItem<T>> {
        self.current_item.as_ref()
    }

    /// Index of the current item, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Replace the items; the current item is kept when still present
    pub fn set_items(&mut self, items: Vec<MenuItem<T>>) {
        self.items = items;
        self.current_index = None;
        self.sanitize();
    }

    /// Notify the current-item callback
    pub fn handle_current(&mut self) {
        if let (Some(callback), Some(index)) = (self.on_current.as_mut(), self.current_index) {
            if let Some(item) = self.items.get(index) {
                callback(&item.label, &item.payload);
            }
        }
    }

    /// Notify the enter callback; returns whether there was an item to choose
    pub fn handle_enter(&mut self) -> bool {
        let Some(item) = self.current_index.and_then(|index| self.items.get(index)) else {
            return false;
        };
        tracing::debug!("Menu item chosen: {}", item.label);
        if let Some(callback) = self.on_enter.as_mut() {
            callback(&item.label, &item.payload);
        }
        true
    }

    /// Bring `current_item` and `current_index` back in line with `items`.
    pub fn sanitize(&mut self) {
        if self.items.is_empty() {
            // The only state where current is absent
            self.current_item = None;
            self.current_index = None;
            return;
        }

        let known = self
            .current_item
            .as_ref()
            .is_some_and(|current| self.items.contains(current));
        if !known {
            self.current_item = Some(self.items[0].clone());
            self.current_index = Some(0);
            return;
        }

        let index = match self.current_index {
            Some(index) => index,
            None => {
                self.current_index = Some(
                    self.items
                        .iter()
                        .position(|item| Some(item) == self.current_item.as_ref())
                        .unwrap_or(0),
                );
                return;
            }
        };

        let index = index.min(self.items.len() - 1);
        self.current_index = Some(index);
        self.current_item = Some(self.items[index].clone());
    }

    /// Run a navigation step on a sanitized menu. `step` maps the current
    /// index and the item count to a target index, which is clamped.
    /// Returns true when the current item changed.
    fn navigate(&mut self, step: impl FnOnce(isize, isize) -> isize) -> bool {
        self.sanitize();
        let (Some(previous), Some(index)) = (self.current_item.clone(), self.current_index) else {
            return false;
        };

        let len = self.items.len() as isize;
        let target = step(index as isize, len).clamp(0, len - 1) as usize;
        self.current_index = Some(target);
        self.current_item = Some(self.items[target].clone());

        let changed = self.items[target] != previous;
        if changed {
            tracing::trace!("Menu current moved {} -> {}", index, target);
            self.handle_current();
        }
        changed
    }

    /// Move to the first item
    pub fn first(&mut self) -> bool {
        self.navigate(|_, _| 0)
    }

    /// Move to the last item
    pub fn last(&mut self) -> bool {
        self.navigate(|_, len| len - 1)
    }

    /// Move up one item
    pub fn up(&mut self) -> bool {
        self.navigate(|index, _| index - 1)
    }

    /// Move down one item
    pub fn down(&mut self) -> bool {
        self.navigate(|index, _| index + 1)
    }

    /// Move up by the number of lines shown at the last render
    pub fn page_up(&mut self) -> bool {
        let page = self.page_size();
        self.navigate(|index, _| index - page)
    }

    /// Move down by the number of lines shown at the last render
    pub fn page_down(&mut self) -> bool {
        let page = self.page_size();
        self.navigate(|index, _| index + page)
    }

    fn page_size(&self) -> isize {
        self.displayed_lines.unwrap_or(0) as isize
    }

    /// Apply a resolved key command
    pub fn apply(&mut self, command: MenuCommand) -> MenuAction {
        let moved = match command {
            MenuCommand::First => self.first(),
            MenuCommand::Last => self.last(),
            MenuCommand::Up => self.up(),
            MenuCommand::Down => self.down(),
            MenuCommand::PageUp => self.page_up(),
            MenuCommand::PageDown => self.page_down(),
            MenuCommand::Select => {
                return if self.handle_enter() {
                    MenuAction::Selected
                } else {
                    MenuAction::None
                };
            }
        };
        if moved {
            MenuAction::Moved
        } else {
            MenuAction::None
        }
    }

    /// Resolve a key command for this menu without applying it
    pub fn resolve_key(&self, key: KeyEvent) -> Option<MenuCommand> {
        self.keymap.resolve(key, self.mode)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> MenuAction {
        match self.resolve_key(key) {
            Some(command) => self.apply(command),
            None => MenuAction::None,
        }
    }

    /// Width needed to show every label
    pub fn preferred_width(&self) -> usize {
        let symbol = Line::raw(self.highlight_symbol.as_str()).width();
        self.items
            .iter()
            .map(|item| Line::raw(item.label.as_str()).width())
            .max()
            .unwrap_or(0)
            + symbol
    }
}

impl<T> Widget for &mut VMenu<T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.label.as_str()).style(self.theme.item))
            .collect();

        self.list_state.select(self.current_index);

        let list = List::new(items)
            .style(self.theme.region(self.focused))
            .highlight_style(self.theme.current)
            .highlight_symbol(self.highlight_symbol.as_str());

        StatefulWidget::render(list, area, buf, &mut self.list_state);

        let shown = self.items.len().saturating_sub(self.list_state.offset());
        self.displayed_lines = Some(shown.min(area.height as usize));
    }
}
