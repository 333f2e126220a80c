use std::path::PathBuf;

use crate::{Document, ItemKind, ParseError, Parser, ParserConfig};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Cooklang text held in memory
    Text(String),
    /// Path to a `.cook` file
    File(PathBuf),
}

/// Builder for configuring and executing a parse
#[derive(Debug, Default)]
pub struct RecipeParserBuilder {
    source: Option<InputSource>,
    config: ParserConfig,
}

impl RecipeParserBuilder {
    /// Set the input source to Cooklang text
    ///
    /// # Example
    /// ```
    /// use cooklang_parser::RecipeParser;
    ///
    /// let builder = RecipeParser::builder()
    ///     .text("Add @salt{1%tsp}.");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a recipe file
    ///
    /// # Example
    /// ```
    /// use cooklang_parser::RecipeParser;
    ///
    /// let builder = RecipeParser::builder()
    ///     .file("recipes/pancakes.cook");
    /// ```
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Leave items of this kind out of the parsed steps
    ///
    /// # Example
    /// ```
    /// use cooklang_parser::{ItemKind, RecipeParser};
    ///
    /// let builder = RecipeParser::builder()
    ///     .text("Stir. -- gently")
    ///     .exclude(ItemKind::Comment);
    /// ```
    pub fn exclude(mut self, kind: ItemKind) -> Self {
        self.config.exclude.insert(kind);
        self
    }

    /// Replace the whole parser configuration
    pub fn config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Read the input source and parse it
    ///
    /// # Errors
    /// Returns `ParseError` if:
    /// - No input source was specified
    /// - The text is empty
    /// - The file cannot be read
    /// - The recipe is malformed
    ///
    /// # Example
    /// ```
    /// # use cooklang_parser::RecipeParser;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let document = RecipeParser::builder()
    ///     .text("Add @salt{1%tsp}.")
    ///     .build()
    ///     .await?;
    /// assert_eq!(document.steps.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Document, ParseError> {
        let source = self.source.ok_or_else(|| {
            ParseError::Builder("No input source specified. Use .text() or .file()".to_string())
        })?;

        let parser = Parser::new(self.config);
        match source {
            InputSource::Text(text) => parser.parse_str(&text),
            InputSource::File(path) => parser.parse_file(&path).await,
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeParser;

impl RecipeParser {
    /// Creates a new builder for parsing recipes
    ///
    /// # Example
    /// ```
    /// use cooklang_parser::RecipeParser;
    ///
    /// let builder = RecipeParser::builder();
    /// ```
    pub fn builder() -> RecipeParserBuilder {
        RecipeParserBuilder::default()
    }
}
