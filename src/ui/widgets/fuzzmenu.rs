//! Menu with a regex filter prompt above it.

use crate::domain::MenuItem;
use crate::error::Result;
use crate::ui::input::{InputMode, MenuKeymap};
use crate::ui::theme::Theme;
use crate::ui::widgets::vmenu::{MenuAction, VMenu};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use regex::{Regex, RegexBuilder};
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Fuzzy-filtering menu.
///
/// Every edit of the filter buffer recompiles it as a regex and rebinds the
/// inner [`VMenu`] to the items whose label matches. Patterns that do not
/// compile (typically half-typed ones) leave the list as it was.
pub struct FuzzMenu<T> {
    items: Vec<MenuItem<T>>,
    vmenu: VMenu<T>,
    filter: TextArea<'static>,
    /// Last pattern that compiled; `None` matches everything
    active: Option<Regex>,
    prompt: String,
    case_insensitive: bool,
    theme: Theme,
    focused: bool,
}

impl<T: Clone + PartialEq> FuzzMenu<T> {
    /// Create a fuzzy menu showing every item
    pub fn new(items: Vec<MenuItem<T>>) -> Self {
        let vmenu = VMenu::new(items.clone()).input_mode(InputMode::Insert);
        Self {
            items,
            vmenu,
            filter: filter_area(""),
            active: None,
            prompt: "/".to_string(),
            case_insensitive: false,
            theme: Theme::default(),
            focused: true,
        }
    }

    /// Register the current-item callback (notified right away)
    pub fn on_current(mut self, callback: impl FnMut(&str, &T) + 'static) -> Self {
        self.vmenu = self.vmenu.on_current(callback);
        self
    }

    /// Register the callback invoked when an item is chosen
    pub fn on_enter(mut self, callback: impl FnMut(&str, &T) + 'static) -> Self {
        self.vmenu = self.vmenu.on_enter(callback);
        self
    }

    /// Set key bindings
    pub fn keymap(mut self, keymap: MenuKeymap) -> Self {
        self.vmenu = self.vmenu.keymap(keymap);
        self
    }

    /// Set styles
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.vmenu = self.vmenu.theme(theme);
        self
    }

    /// Set the prefix drawn before the current item
    pub fn highlight_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.vmenu = self.vmenu.highlight_symbol(symbol);
        self
    }

    /// Set the glyph shown left of the filter buffer
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Match labels ignoring case
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Set focused state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.vmenu.set_focused(focused);
    }

    /// Current filter text
    pub fn pattern(&self) -> String {
        self.filter.lines().join("")
    }

    /// All items, filtered or not
    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    /// Items matching the filter
    pub fn filtered(&self) -> &[MenuItem<T>] {
        self.vmenu.items()
    }

    /// The current item, if any
    pub fn current(&self) -> Option<&MenuItem<T>> {
        self.vmenu.current()
    }

    /// The inner menu
    pub fn menu(&self) -> &VMenu<T> {
        &self.vmenu
    }

    /// Mutable access to the inner menu
    pub fn menu_mut(&mut self) -> &mut VMenu<T> {
        &mut self.vmenu
    }

    /// Replace the filter text. An invalid pattern is reported and nothing
    /// changes.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<()> {
        let regex = self.compile(pattern)?;
        self.filter = filter_area(pattern);
        self.apply(regex);
        Ok(())
    }

    /// Replace the full item list and re-apply the filter
    pub fn set_items(&mut self, items: Vec<MenuItem<T>>) {
        self.items = items;
        self.refilter();
    }

    /// Handle a key event: menu bindings first, the filter buffer otherwise
    pub fn handle_key(&mut self, key: KeyEvent) -> MenuAction {
        if let Some(command) = self.vmenu.resolve_key(key) {
            return self.vmenu.apply(command);
        }
        if is_newline(key) {
            return MenuAction::None;
        }

        let before = self.pattern();
        self.filter.input(convert_key_event(key));
        if self.pattern() == before {
            return MenuAction::None;
        }

        self.do_filter();
        MenuAction::FilterChanged
    }

    /// Recompute the filtered list from the filter buffer
    fn do_filter(&mut self) {
        let pattern = self.pattern();
        match self.compile(&pattern) {
            Ok(regex) => self.apply(regex),
            Err(e) => tracing::debug!("Keeping previous filter, {:?} does not compile: {}", pattern, e),
        }
    }

    fn compile(&self, pattern: &str) -> std::result::Result<Regex, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .build()
    }

    fn apply(&mut self, regex: Regex) {
        self.active = Some(regex);
        self.refilter();
    }

    fn refilter(&mut self) {
        let filtered: Vec<MenuItem<T>> = match &self.active {
            Some(regex) => self
                .items
                .iter()
                .filter(|item| regex.is_match(&item.label))
                .cloned()
                .collect(),
            None => self.items.clone(),
        };
        tracing::debug!(
            "Filter matched {} of {} items",
            filtered.len(),
            self.items.len()
        );

        self.vmenu.set_items(filtered);
        self.vmenu.handle_current();
    }
}

impl<T> Widget for &mut FuzzMenu<T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [prompt_row, menu_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let prompt = Line::raw(self.prompt.as_str());
        let [glyph, input] = Layout::horizontal([
            Constraint::Length(prompt.width() as u16),
            Constraint::Min(0),
        ])
        .areas(prompt_row);

        let style = self.theme.region(self.focused);
        prompt.style(style).render(glyph, buf);

        self.filter.set_style(style);
        self.filter.set_cursor_style(if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            style
        });
        (&self.filter).render(input, buf);

        (&mut self.vmenu).render(menu_area, buf);
    }
}

/// Single-line filter buffer
fn filter_area(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Keys the text buffer would turn into a line break
fn is_newline(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Convert crossterm KeyEvent to tui-textarea Input
fn convert_key_event(key: KeyEvent) -> Input {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let key = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Esc => Key::Esc,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Null,
    };

    Input {
        key,
        ctrl,
        alt,
        shift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fruits() -> Vec<MenuItem<String>> {
        ["apple", "banana", "cherry", "apricot", "Avocado"]
            .into_iter()
            .map(MenuItem::plain)
            .collect()
    }

    fn labels<T>(items: &[MenuItem<T>]) -> Vec<&str> {
        items.iter().map(|item| item.label.as_str()).collect()
    }

    fn type_text<T: Clone + PartialEq>(menu: &mut FuzzMenu<T>, text: &str) {
        for c in text.chars() {
            menu.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_unfiltered_shows_everything() {
        let menu = FuzzMenu::new(fruits());
        assert_eq!(menu.filtered().len(), 5);
        assert_eq!(menu.current().map(|i| i.label.as_str()), Some("apple"));
        assert_eq!(menu.pattern(), "");
    }

    #[test]
    fn test_typing_filters() {
        let mut menu = FuzzMenu::new(fruits());
        let action = menu.handle_key(key(KeyCode::Char('a')));
        assert_eq!(action, MenuAction::FilterChanged);
        type_text(&mut menu, "p");
        assert_eq!(menu.pattern(), "ap");
        assert_eq!(labels(menu.filtered()), vec!["apple", "apricot"]);
    }

    #[test]
    fn test_regex_pattern() {
        let mut menu = FuzzMenu::new(fruits());
        type_text(&mut menu, "^[bc]");
        assert_eq!(labels(menu.filtered()), vec!["banana", "cherry"]);
    }

    #[test]
    fn test_invalid_pattern_keeps_previous_list() {
        let mut menu = FuzzMenu::new(fruits());
        type_text(&mut menu, "an");
        assert_eq!(labels(menu.filtered()), vec!["banana"]);

        type_text(&mut menu, "(");
        assert_eq!(menu.pattern(), "an(");
        assert_eq!(labels(menu.filtered()), vec!["banana"]);

        type_text(&mut menu, ")");
        assert_eq!(labels(menu.filtered()), vec!["banana"]);
    }

    #[test]
    fn test_current_survives_filtering() {
        let mut menu = FuzzMenu::new(fruits());
        menu.handle_key(key(KeyCode::Down));
        menu.handle_key(key(KeyCode::Down));
        menu.handle_key(key(KeyCode::Down));
        assert_eq!(menu.current().map(|i| i.label.as_str()), Some("apricot"));

        type_text(&mut menu, "ap");
        assert_eq!(menu.current().map(|i| i.label.as_str()), Some("apricot"));
        assert_eq!(menu.menu().current_index(), Some(1));
    }

    #[test]
    fn test_current_resets_when_filtered_out() {
        let mut menu = FuzzMenu::new(fruits());
        menu.handle_key(key(KeyCode::Down));
        type_text(&mut menu, "ch");
        assert_eq!(menu.current().map(|i| i.label.as_str()), Some("cherry"));
    }

    #[test]
    fn test_no_match_is_empty_and_inert() {
        let mut menu = FuzzMenu::new(fruits());
        type_text(&mut menu, "zzz");
        assert!(menu.filtered().is_empty());
        assert_eq!(menu.current(), None);
        assert_eq!(menu.handle_key(key(KeyCode::Down)), MenuAction::None);
        assert_eq!(menu.handle_key(key(KeyCode::Enter)), MenuAction::None);

        menu.handle_key(key(KeyCode::Backspace));
        menu.handle_key(key(KeyCode::Backspace));
        menu.handle_key(key(KeyCode::Backspace));
        assert_eq!(menu.filtered().len(), 5);
        assert_eq!(menu.current().map(|i| i.label.as_str()), Some("apple"));
    }

    #[test]
    fn test_vim_keys_are_typed() {
        let mut menu = FuzzMenu::new(fruits());
        type_text(&mut menu, "j");
        assert_eq!(menu.pattern(), "j");
        assert!(menu.filtered().is_empty());
    }

    #[test]
    fn test_space_selects_by_default() {
        let chosen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&chosen);
        let mut menu = FuzzMenu::new(fruits())
            .on_enter(move |_: &str, payload: &String| sink.borrow_mut().push(payload.clone()));

        assert_eq!(menu.handle_key(key(KeyCode::Char(' '))), MenuAction::Selected);
        assert_eq!(menu.pattern(), "");
        assert_eq!(*chosen.borrow(), vec!["apple".to_string()]);
    }

    #[test]
    fn test_space_typed_when_not_bound() {
        let mut menu = FuzzMenu::new(fruits()).keymap(MenuKeymap {
            vim_navigation: true,
            space_selects: false,
        });
        assert_eq!(menu.handle_key(key(KeyCode::Char(' '))), MenuAction::FilterChanged);
        assert_eq!(menu.pattern(), " ");
    }

    #[test]
    fn test_filter_notifies_current() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut menu = FuzzMenu::new(fruits())
            .on_current(move |label: &str, _: &String| sink.borrow_mut().push(label.to_string()));
        type_text(&mut menu, "b");
        assert_eq!(*seen.borrow(), vec!["apple", "banana"]);
    }

    #[test]
    fn test_case_insensitive() {
        let mut menu = FuzzMenu::new(fruits()).case_insensitive(true);
        type_text(&mut menu, "^a");
        assert_eq!(labels(menu.filtered()), vec!["apple", "apricot", "Avocado"]);
    }

    #[test]
    fn test_set_pattern() {
        let mut menu = FuzzMenu::new(fruits());
        menu.set_pattern("rr").unwrap();
        assert_eq!(menu.pattern(), "rr");
        assert_eq!(labels(menu.filtered()), vec!["cherry"]);

        let err = menu.set_pattern("[").unwrap_err();
        assert!(matches!(err, crate::error::AppError::Pattern(_)));
        assert_eq!(menu.pattern(), "rr");
        assert_eq!(labels(menu.filtered()), vec!["cherry"]);
    }

    #[test]
    fn test_set_items_reapplies_filter() {
        let mut menu = FuzzMenu::new(fruits());
        menu.set_pattern("an").unwrap();
        menu.set_items(vec![MenuItem::plain("mango"), MenuItem::plain("kiwi")]);
        assert_eq!(labels(menu.filtered()), vec!["mango"]);
        assert_eq!(menu.items().len(), 2);
    }

    #[test]
    fn test_newline_keys_ignored() {
        let mut menu = FuzzMenu::new(fruits());
        let ctrl_m = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL);
        assert_eq!(menu.handle_key(ctrl_m), MenuAction::None);
        assert_eq!(menu.handle_key(key(KeyCode::Char('\n'))), MenuAction::None);
        assert_eq!(menu.handle_key(key(KeyCode::Char('\r'))), MenuAction::None);
        assert_eq!(menu.pattern(), "");
        assert_eq!(menu.filter.lines().len(), 1);
    }

    #[test]
    fn test_render_prompt_and_items() {
        let mut menu = FuzzMenu::new(fruits());
        menu.set_pattern("err").unwrap();

        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        (&mut menu).render(area, &mut buf);

        let row = |y: u16| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        };
        assert_eq!(row(0), "/err    ");
        assert_eq!(row(1), "cherry  ");
        assert_eq!(row(2), "        ");
    }

    #[test]
    fn test_render_unfocused_style() {
        let mut menu = FuzzMenu::new(fruits());
        menu.set_focused(false);

        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        (&mut menu).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, Color::Gray);
        assert_eq!(buf[(0, 2)].fg, Color::Gray);

        menu.set_focused(true);
        (&mut menu).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::White);
        assert_eq!(buf[(0, 2)].fg, Color::White);
    }
}
