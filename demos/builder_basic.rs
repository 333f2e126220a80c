//! Basic usage of the RecipeParser builder API
//!
//! 1. Text → Document
//! 2. File → Document
//! 3. Leaving item kinds out of the steps

use cooklang_parser::{ItemKind, RecipeParser};
use std::io::Write;

const RECIPE: &str = "Boil @water{1%l} in a #pot{}. [- a big one -]\nAdd @pasta{200%g} for ~{10%minutes}.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Use Case 1: Text → Document ===");
    let document = RecipeParser::builder().text(RECIPE).build().await?;
    for (index, step) in document.steps.iter().enumerate() {
        println!("{}. {}", index + 1, step.directions());
    }

    println!("\n=== Use Case 2: File → Document ===");
    let mut file = tempfile::Builder::new().suffix(".cook").tempfile()?;
    file.write_all(RECIPE.as_bytes())?;
    let document = RecipeParser::builder().file(file.path()).build().await?;
    println!("Timers: {}", document.timers().count());

    println!("\n=== Use Case 3: Entities only ===");
    let document = RecipeParser::builder()
        .text(RECIPE)
        .exclude(ItemKind::Text)
        .exclude(ItemKind::Comment)
        .build()
        .await?;
    println!("{}", serde_json::to_string_pretty(&document.steps)?);

    Ok(())
}
