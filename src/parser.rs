use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::metadata::{self, FRONT_MATTER_DELIMITER, METADATA_PREFIX};
use crate::model::{Document, Item, ItemKind, Metadata, Step};
use crate::scanners::line_comment;
use crate::tokenizer;
use log::{debug, warn};
use std::io::BufRead;
use std::path::Path;

/// Turns Cooklang text into a [`Document`]
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Parser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a recipe held in memory. Empty input is an error.
    pub fn parse_str(&self, recipe: &str) -> Result<Document, ParseError> {
        if recipe.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        self.parse_reader(recipe.as_bytes())
    }

    /// Parse a recipe line by line from any buffered reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Document, ParseError> {
        let mut assembler = Assembler::new(&self.config);
        for (index, line) in reader.lines().enumerate() {
            assembler.feed(index + 1, &line?)?;
        }
        Ok(assembler.finish())
    }

    /// Read and parse a recipe file
    pub async fn parse_file(&self, path: impl AsRef<Path>) -> Result<Document, ParseError> {
        let path = path.as_ref();
        debug!("Reading recipe from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        self.parse_reader(content.as_bytes())
    }
}

enum LineState {
    Normal,
    /// Inside a `---` block; `opened_at` is the line of the opening delimiter
    InFrontMatter { buffer: String, opened_at: usize },
}

/// Collects steps and metadata while lines are classified one by one
struct Assembler<'a> {
    config: &'a ParserConfig,
    state: LineState,
    steps: Vec<Step>,
    metadata: Metadata,
}

impl<'a> Assembler<'a> {
    fn new(config: &'a ParserConfig) -> Self {
        Assembler {
            config,
            state: LineState::Normal,
            steps: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    fn feed(&mut self, number: usize, line: &str) -> Result<(), ParseError> {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            return Ok(());
        }

        self.state = match std::mem::replace(&mut self.state, LineState::Normal) {
            LineState::Normal if trimmed == FRONT_MATTER_DELIMITER => {
                debug!("line {}: front matter opens", number);
                LineState::InFrontMatter {
                    buffer: String::new(),
                    opened_at: number,
                }
            }
            LineState::InFrontMatter { buffer, opened_at } if trimmed == FRONT_MATTER_DELIMITER => {
                debug!(
                    "line {}: front matter opened at line {} closes",
                    number, opened_at
                );
                let entries =
                    metadata::parse_front_matter(&buffer).map_err(|err| err.at(number))?;
                self.metadata.extend(entries);
                LineState::Normal
            }
            LineState::InFrontMatter {
                mut buffer,
                opened_at,
            } => {
                buffer.push_str(trimmed);
                buffer.push('\n');
                LineState::InFrontMatter { buffer, opened_at }
            }
            LineState::Normal => {
                self.classify(number, line)?;
                LineState::Normal
            }
        };
        Ok(())
    }

    fn classify(&mut self, number: usize, line: &str) -> Result<(), ParseError> {
        if let Some(comment) = line_comment(line) {
            // `--` lines only exist as comments, so excluding comments drops the line
            if !self.config.is_excluded(ItemKind::Comment) {
                self.push_step(Step::from(vec![Item::Comment(comment)]));
            }
        } else if line.starts_with(METADATA_PREFIX) {
            let (key, value) = metadata::parse_line(line).map_err(|err| err.at(number))?;
            debug!("line {}: metadata {:?}", number, key);
            self.metadata.insert(key, value);
        } else {
            let step = tokenizer::tokenize(line).map_err(|err| err.at(number))?;
            debug!("line {}: step with {} items", number, step.items.len());
            self.push_step(step);
        }
        Ok(())
    }

    /// Drop excluded kinds. The step stays even if nothing is left in it.
    fn push_step(&mut self, mut step: Step) {
        step.items.retain(|item| !self.config.is_excluded(item.kind()));
        self.steps.push(step);
    }

    fn finish(self) -> Document {
        if let LineState::InFrontMatter { opened_at, .. } = self.state {
            warn!(
                "front matter opened at line {} is never closed, ignoring it",
                opened_at
            );
        }
        Document {
            steps: self.steps,
            metadata: self.metadata,
        }
    }
}
