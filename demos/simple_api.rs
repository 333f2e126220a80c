//! Simple API usage with convenience functions
//!
//! Parses a recipe held in memory and walks the resulting document.

use cooklang_parser::{parse, parse_with_config, ItemKind, ParserConfig};

const RECIPE: &str = r#">> servings: 2

Crack @eggs{3} into a #bowl and whisk with @milk{50%ml}. -- or cream
Melt @butter{15%g} in a #frying pan{} and cook for ~{3%minutes}.
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Parse ===");
    let document = parse(RECIPE)?;
    println!("Servings: {}", document.metadata["servings"]);
    for ingredient in document.ingredients() {
        println!(
            "- {} ({} {})",
            ingredient.name, ingredient.amount.quantity, ingredient.amount.units
        );
    }

    println!("\n=== Directions ===");
    println!("{}", document);

    println!("\n=== Without comments ===");
    let config = ParserConfig::excluding([ItemKind::Comment]);
    let document = parse_with_config(RECIPE, &config)?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
