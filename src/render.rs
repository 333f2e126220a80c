use crate::metadata::METADATA_PREFIX;
use crate::model::{Document, Item, Step, Timer};
use std::fmt;

impl Step {
    /// The step as plain prose: entity names in place of their markup,
    /// timers as their duration, comments left out.
    pub fn directions(&self) -> String {
        let mut directions = String::new();
        for item in &self.items {
            match item {
                Item::Text { value } => directions.push_str(value),
                Item::Ingredient(ingredient) => directions.push_str(&ingredient.name),
                Item::Cookware(cookware) => directions.push_str(&cookware.name),
                Item::Timer(timer) => directions.push_str(&timer_text(timer)),
                Item::Comment(_) => {}
            }
        }
        directions.trim().to_string()
    }
}

fn timer_text(timer: &Timer) -> String {
    if timer.amount.quantity.is_empty() {
        return timer.name.clone();
    }
    format!("{} {}", timer.amount.quantity, timer.amount.units)
        .trim_end()
        .to_string()
}

/// Metadata as `>> key: value` lines, then one paragraph per step
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.metadata {
            writeln!(f, "{} {}: {}", METADATA_PREFIX, key, value)?;
        }
        if !self.metadata.is_empty() && !self.steps.is_empty() {
            writeln!(f)?;
        }

        let directions: Vec<String> = self
            .steps
            .iter()
            .map(Step::directions)
            .filter(|directions| !directions.is_empty())
            .collect();
        write!(f, "{}", directions.join("\n\n"))?;
        if !directions.is_empty() {
            writeln!(f)?;
        }
        Ok(())
    }
}
