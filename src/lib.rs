//! Parses [Cooklang](https://cooklang.org/docs/spec/) recipes into a
//! structured [`Document`]: ordered steps made of text, ingredients, cookware,
//! timers and comments, plus a flat metadata map.
//!
//! ```
//! use cooklang_parser::{parse, Item};
//!
//! let document = parse("Add @chilli{3%items} and @ginger{10%g}.")?;
//! assert_eq!(document.steps.len(), 1);
//! assert!(matches!(&document.steps[0].items[1], Item::Ingredient(i) if i.name == "chilli"));
//! # Ok::<(), cooklang_parser::ParseError>(())
//! ```

pub mod amount;
pub mod builder;
pub mod config;
pub mod error;
pub mod metadata;
pub mod model;
pub mod parser;
pub mod render;
pub mod scanners;
pub mod tokenizer;
pub mod uniffi_bindings;

use std::path::Path;

pub use builder::{InputSource, RecipeParser, RecipeParserBuilder};
pub use config::ParserConfig;
pub use error::{LineError, ParseError};
pub use model::{
    Amount, Comment, CommentKind, Cookware, Document, Ingredient, Item, ItemKind, Metadata,
    Quantity, Step, Timer,
};
pub use parser::Parser;

/// Parse a recipe with the default configuration
pub fn parse(recipe: &str) -> Result<Document, ParseError> {
    Parser::default().parse_str(recipe)
}

/// Parse a recipe, leaving out the item kinds the configuration excludes
pub fn parse_with_config(recipe: &str, config: &ParserConfig) -> Result<Document, ParseError> {
    Parser::new(config.clone()).parse_str(recipe)
}

/// Read and parse a recipe file with the default configuration
pub async fn parse_file(path: impl AsRef<Path>) -> Result<Document, ParseError> {
    Parser::default().parse_file(path).await
}
