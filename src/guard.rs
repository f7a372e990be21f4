//! Interaction guard - vetoes drags that start on interactive controls
//!
//! A pointer-down target is described by its ancestry path, target first.
//! If the target or any ancestor up to (and including) the drag-handle
//! boundary matches an interactive selector, the press belongs to that
//! control and must not start a drag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A node in the pointer-down target's ancestry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Lower-case tag name (`"button"`, `"div"`, ...)
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    /// Attribute names present on the element
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Whether this element is the drag handle (ancestry scan stops here)
    #[serde(default)]
    pub drag_handle: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Mark this element as the drag-handle boundary
    pub fn handle(mut self) -> Self {
        self.drag_handle = true;
        self
    }

    /// The header region every panel uses as its drag handle
    pub fn panel_header() -> Self {
        Self::new("div").with_class("modal-header").handle()
    }
}

/// Ancestry of a pointer-down target, target first
pub type TargetPath = Vec<Element>;

/// A simple selector: bare tag, `.class` or `[attribute]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selector {
    Tag(String),
    Class(String),
    Attribute(String),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            Selector::Class(class) => element.classes.iter().any(|c| c == class),
            Selector::Attribute(attr) => element.attributes.iter().any(|a| a == attr),
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(class) = s.strip_prefix('.') {
            if class.is_empty() {
                return Err("empty class selector".to_string());
            }
            return Ok(Selector::Class(class.to_string()));
        }
        if let Some(rest) = s.strip_prefix('[') {
            let attr = rest
                .strip_suffix(']')
                .ok_or_else(|| format!("unterminated attribute selector: {}", s))?;
            if attr.is_empty() {
                return Err("empty attribute selector".to_string());
            }
            return Ok(Selector::Attribute(attr.to_string()));
        }
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("invalid tag selector: {:?}", s));
        }
        Ok(Selector::Tag(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Selector {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Tag(tag) => write!(f, "{}", tag),
            Selector::Class(class) => write!(f, ".{}", class),
            Selector::Attribute(attr) => write!(f, "[{}]", attr),
        }
    }
}

/// Selectors treated as interactive out of the box
pub const DEFAULT_INTERACTIVE_SELECTORS: &[&str] = &[
    "button",
    "input",
    "select",
    "textarea",
    "a",
    ".btn",
    ".modal-close",
    ".window-control",
    ".tab",
    "[data-modal]",
    "[onclick]",
];

pub fn default_selectors() -> Vec<Selector> {
    DEFAULT_INTERACTIVE_SELECTORS
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Whether a press on `path` landed on an interactive control
///
/// Scans from the target outwards and stops after the drag-handle element.
/// A path without a handle is scanned in full.
pub fn is_interactive(path: &[Element], selectors: &[Selector]) -> bool {
    for element in path {
        if selectors.iter().any(|s| s.matches(element)) {
            return true;
        }
        if element.drag_handle {
            break;
        }
    }
    false
}
