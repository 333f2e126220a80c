use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Recipe metadata: `>> key: value` lines and front matter entries.
pub type Metadata = BTreeMap<String, String>;

/// A parsed recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub steps: Vec<Step>,
    pub metadata: Metadata,
}

impl Document {
    /// All ingredients in the order they appear in the recipe
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.items().filter_map(|item| match item {
            Item::Ingredient(ingredient) => Some(ingredient),
            _ => None,
        })
    }

    /// All cookware in the order it appears in the recipe
    pub fn cookware(&self) -> impl Iterator<Item = &Cookware> {
        self.items().filter_map(|item| match item {
            Item::Cookware(cookware) => Some(cookware),
            _ => None,
        })
    }

    /// All timers in the order they appear in the recipe
    pub fn timers(&self) -> impl Iterator<Item = &Timer> {
        self.items().filter_map(|item| match item {
            Item::Timer(timer) => Some(timer),
            _ => None,
        })
    }

    fn items(&self) -> impl Iterator<Item = &Item> {
        self.steps.iter().flat_map(|step| step.items.iter())
    }
}

/// One direction line of the recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step {
    pub items: Vec<Item>,
}

impl From<Vec<Item>> for Step {
    fn from(items: Vec<Item>) -> Self {
        Step { items }
    }
}

/// Discriminates the kinds of [`Item`] a step can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Text,
    Comment,
    Ingredient,
    Cookware,
    Timer,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Text => "text",
            ItemKind::Comment => "comment",
            ItemKind::Ingredient => "ingredient",
            ItemKind::Cookware => "cookware",
            ItemKind::Timer => "timer",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of a step, in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Text { value: String },
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
    Comment(Comment),
}

impl Item {
    pub fn text(value: impl Into<String>) -> Self {
        Item::Text {
            value: value.into(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Text { .. } => ItemKind::Text,
            Item::Ingredient(_) => ItemKind::Ingredient,
            Item::Cookware(_) => ItemKind::Cookware,
            Item::Timer(_) => ItemKind::Timer,
            Item::Comment(_) => ItemKind::Comment,
        }
    }
}

/// The quantity part of an [`Amount`]
///
/// Serializes as a JSON number or string. Whole numbers serialize as integers
/// so `3` stays `3` rather than `3.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Quantity {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Quantity::Number(n) => Some(*n),
            Quantity::Text(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Quantity::Text(s) if s.is_empty())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Number(n) if is_whole(*n) => serializer.serialize_i64(*n as i64),
            Quantity::Number(n) => serializer.serialize_f64(*n),
            Quantity::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) if is_whole(*n) => write!(f, "{}", *n as i64),
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64
}

/// Quantity plus unit, as written between an entity's braces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub quantity: Quantity,
    #[serde(default)]
    pub units: String,
}

impl Amount {
    pub fn number(value: f64, units: impl Into<String>) -> Self {
        Amount {
            quantity: Quantity::Number(value),
            units: units.into(),
        }
    }

    pub fn text(value: impl Into<String>, units: impl Into<String>) -> Self {
        Amount {
            quantity: Quantity::Text(value.into()),
            units: units.into(),
        }
    }

    /// `@salt` with no amount means "some" salt
    pub fn ingredient_default() -> Self {
        Amount::text("some", "")
    }

    /// `#pan` with no amount means one pan
    pub fn cookware_default() -> Self {
        Amount::number(1.0, "")
    }

    pub fn timer_default() -> Self {
        Amount::text("", "")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(flatten)]
    pub amount: Amount,
}

/// Cookware only carries a quantity; units written in the braces are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookware {
    pub name: String,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub amount: Amount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentKind {
    /// `-- comment` on its own line
    #[default]
    Line,
    /// `[- comment -]` inside a direction
    Block,
    /// `-- comment` after a direction
    EndOfLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
    #[serde(skip)]
    pub kind: CommentKind,
}
