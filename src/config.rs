use crate::model::ItemKind;
use config::{Config, ConfigError, Environment, File, FileFormat, FileSourceFile};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Parser options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Item kinds left out of the parsed steps
    #[serde(default)]
    pub exclude: BTreeSet<ItemKind>,
}

impl ParserConfig {
    /// A configuration leaving out the given item kinds
    pub fn excluding(kinds: impl IntoIterator<Item = ItemKind>) -> Self {
        ParserConfig {
            exclude: kinds.into_iter().collect(),
        }
    }

    pub fn is_excluded(&self, kind: ItemKind) -> bool {
        self.exclude.contains(&kind)
    }

    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKLANG__ prefix
    /// 2. cooklang.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKLANG__EXCLUDE=comment,timer
    pub fn load() -> Result<Self, ConfigError> {
        load_config(
            File::with_name("cooklang").required(false),
            environment(),
        )
    }
}

fn environment() -> Environment {
    Environment::with_prefix("COOKLANG")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("exclude")
        .try_parsing(true)
}

fn load_config(
    file: File<FileSourceFile, FileFormat>,
    env: Environment,
) -> Result<ParserConfig, ConfigError> {
    let settings = Config::builder().add_source(file).add_source(env).build()?;

    settings.try_deserialize()
}
