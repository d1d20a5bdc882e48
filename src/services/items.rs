//! Item source for loading menu entries from files or stdin.

use crate::domain::MenuItem;
use crate::error::{ItemsError, ItemsResult};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where menu items come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    /// A `.json` array of `{label, payload}` objects, or a line-based file
    File(PathBuf),
    /// Line-based items read from standard input
    Stdin,
}

/// Raw JSON entry; payloads of any JSON type are accepted
#[derive(Debug, Deserialize)]
struct JsonItem {
    label: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

impl ItemSource {
    /// Load all items from this source
    pub fn load(&self) -> ItemsResult<Vec<MenuItem<String>>> {
        match self {
            Self::File(path) => load_file(path),
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(parse_lines(&text))
            }
        }
    }
}

fn load_file(path: &Path) -> ItemsResult<Vec<MenuItem<String>>> {
    if !path.exists() {
        return Err(ItemsError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&text)
    } else {
        Ok(parse_lines(&text))
    }
}

/// Parse a JSON array of items. A missing payload defaults to the label;
/// non-string payloads keep their JSON text.
pub fn parse_json(text: &str) -> ItemsResult<Vec<MenuItem<String>>> {
    let raw: Vec<JsonItem> = serde_json::from_str(text)?;
    Ok(raw
        .into_iter()
        .map(|item| {
            let payload = match item.payload {
                None | Some(serde_json::Value::Null) => item.label.clone(),
                Some(serde_json::Value::String(s)) => s,
                Some(other) => other.to_string(),
            };
            MenuItem::new(item.label, payload)
        })
        .collect())
}

/// Parse one item per non-empty line; `label<TAB>payload` splits the line
pub fn parse_lines(text: &str) -> Vec<MenuItem<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('\t') {
            Some((label, payload)) => MenuItem::new(label, payload.to_string()),
            None => MenuItem::plain(line),
        })
        .collect()
}
