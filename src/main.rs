use cooklang_parser::{Document, Ingredient, Item, Parser, ParserConfig, Quantity, Step};
use log::debug;
use std::env;

const INDENT: &str = "    ";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the recipe path from command-line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let path = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .ok_or("Usage: cooklang-parser <recipe.cook> [--json]")?;

    let parser = Parser::new(ParserConfig::load()?);
    debug!("{:?}", parser.config());

    let document = parser.parse_file(path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_summary(&document);
    }

    Ok(())
}

fn print_summary(document: &Document) {
    if !document.metadata.is_empty() {
        println!("Metadata:");
        for (key, value) in &document.metadata {
            println!("{}{}: {}", INDENT, key, value);
        }
        println!();
    }

    let mut ingredients: Vec<_> = document.ingredients().collect();
    ingredients.sort_by(|a, b| a.name.cmp(&b.name));
    if !ingredients.is_empty() {
        println!("Ingredients:");
        for ingredient in ingredients {
            println!(
                "{}{:<30}{} {}",
                INDENT,
                ingredient.name,
                format_quantity(&ingredient.amount.quantity),
                ingredient.amount.units
            );
        }
        println!();
    }

    let mut cookware: Vec<&str> = document.cookware().map(|c| c.name.as_str()).collect();
    cookware.sort_unstable();
    if !cookware.is_empty() {
        println!("Cookware:");
        for name in cookware {
            println!("{}{}", INDENT, name);
        }
        println!();
    }

    if !document.steps.is_empty() {
        println!("Steps:");
        for (index, step) in document.steps.iter().enumerate() {
            println!("{}{:2}. {}", INDENT, index + 1, step.directions());
            println!("{}    [{}]", INDENT, step_ingredients(step));
        }
    }
}

/// `name: quantity unit` for each ingredient of a step, sorted, or a dash
fn step_ingredients(step: &Step) -> String {
    let mut entries: Vec<String> = step
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Ingredient(ingredient) => Some(ingredient_entry(ingredient)),
            _ => None,
        })
        .collect();
    if entries.is_empty() {
        return "\u{2013}".to_string();
    }
    entries.sort();
    entries.join("; ")
}

fn ingredient_entry(ingredient: &Ingredient) -> String {
    format!(
        "{}: {} {}",
        ingredient.name,
        format_quantity(&ingredient.amount.quantity),
        ingredient.amount.units
    )
}

/// Numbers with at most two decimals and no trailing zeros
fn format_quantity(quantity: &Quantity) -> String {
    match quantity.as_number() {
        Some(number) => {
            let fixed = format!("{:.2}", number);
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        None => quantity.to_string(),
    }
}
