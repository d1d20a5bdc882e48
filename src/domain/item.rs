//! Menu item entity.

use serde::{Deserialize, Serialize};

/// One menu entry: the label shown on screen and the payload handed back to
/// callers when the entry becomes current or is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem<T> {
    /// Text displayed (and matched by filters)
    pub label: String,
    /// Caller data associated with the label
    pub payload: T,
}

impl<T> MenuItem<T> {
    /// Create a new menu item
    pub fn new(label: impl Into<String>, payload: T) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }
}

impl MenuItem<String> {
    /// Item whose payload is its own label
    pub fn plain(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            payload: label.clone(),
            label,
        }
    }
}

impl<L: Into<String>, T> From<(L, T)> for MenuItem<T> {
    fn from((label, payload): (L, T)) -> Self {
        Self::new(label, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_covers_payload() {
        let a = MenuItem::new("same", 1);
        let b = MenuItem::new("same", 2);
        assert_ne!(a, b);
        assert_eq!(a, MenuItem::from(("same", 1)));
    }

    #[test]
    fn test_plain_item() {
        let item = MenuItem::plain("alpha");
        assert_eq!(item.label, "alpha");
        assert_eq!(item.payload, "alpha");
    }

    #[test]
    fn test_deserialize_item() {
        let item: MenuItem<u32> =
            serde_json::from_str(r#"{"label": "answer", "payload": 42}"#).unwrap();
        assert_eq!(item, MenuItem::new("answer", 42));
    }
}
