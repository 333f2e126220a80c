//! UniFFI bindings for cooklang-parser
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Parsing is synchronous; file parsing manages its own tokio runtime.

use std::fmt;

use crate::{Document, Item, ItemKind, ParseError, Parser, ParserConfig, Quantity};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible parsed recipe
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiDocument {
    pub steps: Vec<FfiStep>,
    /// Metadata as key-value pairs, sorted by key
    pub metadata: Vec<FfiKeyValue>,
}

/// Key-value pair for metadata (since maps of records aren't directly supported in UniFFI)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiKeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiStep {
    pub items: Vec<FfiItem>,
}

/// FFI-compatible quantity: a number or raw text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiQuantity {
    Number { value: f64 },
    Text { value: String },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiItem {
    Text {
        value: String,
    },
    Ingredient {
        name: String,
        quantity: FfiQuantity,
        units: String,
    },
    Cookware {
        name: String,
        quantity: FfiQuantity,
    },
    Timer {
        name: String,
        quantity: FfiQuantity,
        units: String,
    },
    Comment {
        value: String,
    },
}

/// FFI-compatible item kind, used to exclude items from the result
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiItemKind {
    Text,
    Comment,
    Ingredient,
    Cookware,
    Timer,
}

impl From<FfiItemKind> for ItemKind {
    fn from(kind: FfiItemKind) -> Self {
        match kind {
            FfiItemKind::Text => ItemKind::Text,
            FfiItemKind::Comment => ItemKind::Comment,
            FfiItemKind::Ingredient => ItemKind::Ingredient,
            FfiItemKind::Cookware => ItemKind::Cookware,
            FfiItemKind::Timer => ItemKind::Timer,
        }
    }
}

impl From<Quantity> for FfiQuantity {
    fn from(quantity: Quantity) -> Self {
        match quantity {
            Quantity::Number(value) => FfiQuantity::Number { value },
            Quantity::Text(value) => FfiQuantity::Text { value },
        }
    }
}

impl From<Item> for FfiItem {
    fn from(item: Item) -> Self {
        match item {
            Item::Text { value } => FfiItem::Text { value },
            Item::Ingredient(ingredient) => FfiItem::Ingredient {
                name: ingredient.name,
                quantity: ingredient.amount.quantity.into(),
                units: ingredient.amount.units,
            },
            Item::Cookware(cookware) => FfiItem::Cookware {
                name: cookware.name,
                quantity: cookware.quantity.into(),
            },
            Item::Timer(timer) => FfiItem::Timer {
                name: timer.name,
                quantity: timer.amount.quantity.into(),
                units: timer.amount.units,
            },
            Item::Comment(comment) => FfiItem::Comment {
                value: comment.value,
            },
        }
    }
}

impl From<Document> for FfiDocument {
    fn from(document: Document) -> Self {
        FfiDocument {
            steps: document
                .steps
                .into_iter()
                .map(|step| FfiStep {
                    items: step.items.into_iter().map(FfiItem::from).collect(),
                })
                .collect(),
            metadata: document
                .metadata
                .into_iter()
                .map(|(key, value)| FfiKeyValue { key, value })
                .collect(),
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiParseError {
    /// Nothing to parse
    EmptyInput { message: String },
    /// Malformed recipe; `line` is 1-based
    InvalidRecipe { line: u64, message: String },
    /// Failed to read the recipe file
    IoError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiParseError::EmptyInput { message } => write!(f, "Empty input: {}", message),
            FfiParseError::InvalidRecipe { line, message } => {
                write!(f, "Invalid recipe at line {}: {}", line, message)
            }
            FfiParseError::IoError { message } => write!(f, "I/O error: {}", message),
            FfiParseError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiParseError {}

impl From<ParseError> for FfiParseError {
    fn from(err: ParseError) -> Self {
        if let Some(line) = err.line() {
            return FfiParseError::InvalidRecipe {
                line: line as u64,
                message: err.to_string(),
            };
        }
        match err {
            ParseError::EmptyInput => FfiParseError::EmptyInput {
                message: ParseError::EmptyInput.to_string(),
            },
            ParseError::Io(e) => FfiParseError::IoError {
                message: e.to_string(),
            },
            other => FfiParseError::RuntimeError {
                message: other.to_string(),
            },
        }
    }
}

fn parser_excluding(exclude: Vec<FfiItemKind>) -> Parser {
    Parser::new(ParserConfig::excluding(
        exclude.into_iter().map(ItemKind::from),
    ))
}

/// Parse Cooklang text
///
/// # Arguments
/// * `text` - The recipe in Cooklang format
/// * `exclude` - Item kinds to leave out of the steps
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe(
    text: String,
    exclude: Vec<FfiItemKind>,
) -> Result<FfiDocument, FfiParseError> {
    let document = parser_excluding(exclude).parse_str(&text)?;
    Ok(document.into())
}

/// Read and parse a Cooklang file
///
/// # Arguments
/// * `path` - Path to the `.cook` file
/// * `exclude` - Item kinds to leave out of the steps
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_file(
    path: String,
    exclude: Vec<FfiItemKind>,
) -> Result<FfiDocument, FfiParseError> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| FfiParseError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })?;
    let parser = parser_excluding(exclude);
    let document = rt.block_on(parser.parse_file(&path))?;
    Ok(document.into())
}

/// Parse Cooklang text and return the document as JSON
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipe_to_json(text: String) -> Result<String, FfiParseError> {
    let document = Parser::default().parse_str(&text)?;
    serde_json::to_string(&document).map_err(|e| FfiParseError::RuntimeError {
        message: e.to_string(),
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
