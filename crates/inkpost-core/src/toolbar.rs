//! Editor widget configuration: theme and toolbar.
//!
//! The configuration is fixed at startup; [`EditorConfig::standard`] is the
//! only one the client attaches. It serializes to the widget's JSON options:
//! toolbar plain formats as strings, valued formats as single-key objects.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLevel {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Ordered,
    Bullet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPosition {
    Sub,
    Super,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStep {
    Decrease,
    Increase,
}

/// A single toolbar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Bold,
    Italic,
    Underline,
    Strike,
    Blockquote,
    CodeBlock,
    Header(HeaderLevel),
    List(ListStyle),
    Script(ScriptPosition),
    Indent(IndentStep),
    Link,
    Image,
    /// Clear formatting.
    Clean,
}

impl ToolbarItem {
    /// Format name and, for valued formats, the value.
    pub fn format(&self) -> (&'static str, Option<Value>) {
        match self {
            ToolbarItem::Bold => ("bold", None),
            ToolbarItem::Italic => ("italic", None),
            ToolbarItem::Underline => ("underline", None),
            ToolbarItem::Strike => ("strike", None),
            ToolbarItem::Blockquote => ("blockquote", None),
            ToolbarItem::CodeBlock => ("code-block", None),
            ToolbarItem::Header(level) => {
                let n = match level {
                    HeaderLevel::One => 1,
                    HeaderLevel::Two => 2,
                };
                ("header", Some(json!(n)))
            }
            ToolbarItem::List(style) => {
                let v = match style {
                    ListStyle::Ordered => "ordered",
                    ListStyle::Bullet => "bullet",
                };
                ("list", Some(json!(v)))
            }
            ToolbarItem::Script(position) => {
                let v = match position {
                    ScriptPosition::Sub => "sub",
                    ScriptPosition::Super => "super",
                };
                ("script", Some(json!(v)))
            }
            ToolbarItem::Indent(step) => {
                let v = match step {
                    IndentStep::Decrease => "-1",
                    IndentStep::Increase => "+1",
                };
                ("indent", Some(json!(v)))
            }
            ToolbarItem::Link => ("link", None),
            ToolbarItem::Image => ("image", None),
            ToolbarItem::Clean => ("clean", None),
        }
    }
}

impl Serialize for ToolbarItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.format() {
            (name, None) => serializer.serialize_str(name),
            (name, Some(value)) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, &value)?;
                map.end()
            }
        }
    }
}

/// Toolbar layout: rows of controls, rendered as separate groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolbarConfig {
    rows: Vec<Vec<ToolbarItem>>,
}

impl ToolbarConfig {
    /// The fixed toolbar the compose editor is attached with.
    pub fn standard() -> Self {
        use ToolbarItem::*;

        Self {
            rows: vec![
                vec![Bold, Italic, Underline, Strike],
                vec![Blockquote, CodeBlock],
                vec![Header(HeaderLevel::One), Header(HeaderLevel::Two)],
                vec![List(ListStyle::Ordered), List(ListStyle::Bullet)],
                vec![
                    Script(ScriptPosition::Sub),
                    Script(ScriptPosition::Super),
                ],
                vec![
                    Indent(IndentStep::Decrease),
                    Indent(IndentStep::Increase),
                ],
                vec![Link, Image],
                vec![Clean],
            ],
        }
    }

    pub fn rows(&self) -> &[Vec<ToolbarItem>] {
        &self.rows
    }

    pub fn items(&self) -> impl Iterator<Item = &ToolbarItem> {
        self.rows.iter().flatten()
    }

    pub fn contains(&self, item: ToolbarItem) -> bool {
        self.items().any(|i| *i == item)
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Widget theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTheme {
    /// Toolbar above the document.
    Snow,
}

/// Everything the editor is attached with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub theme: EditorTheme,
    pub toolbar: ToolbarConfig,
}

impl EditorConfig {
    pub fn standard() -> Self {
        Self {
            theme: EditorTheme::Snow,
            toolbar: ToolbarConfig::standard(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for EditorConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Modules<'a> {
            toolbar: &'a ToolbarConfig,
        }

        let mut options = serializer.serialize_struct("EditorConfig", 2)?;
        options.serialize_field("theme", &self.theme)?;
        options.serialize_field(
            "modules",
            &Modules {
                toolbar: &self.toolbar,
            },
        )?;
        options.end()
    }
}
