//! Cases from the Cooklang canonical test suite, parsed with comments excluded
//! and compared against the expected JSON document.

use cooklang_parser::{parse_with_config, ItemKind, ParserConfig};
use serde_json::{json, Value};

fn assert_parses(source: &str, expected: Value) {
    let config = ParserConfig::excluding([ItemKind::Comment]);
    let document = parse_with_config(source, &config)
        .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", source, e));
    assert_eq!(
        serde_json::to_value(&document).unwrap(),
        expected,
        "source: {:?}",
        source
    );
}

fn text(value: &str) -> Value {
    json!({"type": "text", "value": value})
}

fn ingredient(name: &str, quantity: Value, units: &str) -> Value {
    json!({"type": "ingredient", "name": name, "quantity": quantity, "units": units})
}

fn cookware(name: &str, quantity: Value) -> Value {
    json!({"type": "cookware", "name": name, "quantity": quantity})
}

fn timer(name: &str, quantity: Value, units: &str) -> Value {
    json!({"type": "timer", "name": name, "quantity": quantity, "units": units})
}

#[test]
fn test_basic_direction() {
    assert_parses(
        "Add a bit of chilli\n",
        json!({"steps": [[text("Add a bit of chilli")]], "metadata": {}}),
    );
}

#[test]
fn test_comments() {
    assert_parses(
        "-- testing comments\n",
        json!({"steps": [], "metadata": {}}),
    );
}

#[test]
fn test_comments_after_ingredients() {
    assert_parses(
        "@thyme{2%springs} -- testing comments\nand some text\n",
        json!({
            "steps": [
                [ingredient("thyme", json!(2), "springs"), text(" ")],
                [text("and some text")]
            ],
            "metadata": {}
        }),
    );
}

#[test]
fn test_comments_with_ingredients() {
    assert_parses(
        "-- testing comments\n@thyme{2%springs}\n",
        json!({"steps": [[ingredient("thyme", json!(2), "springs")]], "metadata": {}}),
    );
}

#[test]
fn test_directions_with_degrees_and_numbers() {
    assert_parses(
        "Heat oven up to 200°C\nHeat 5L of water\n",
        json!({
            "steps": [[text("Heat oven up to 200°C")], [text("Heat 5L of water")]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_direction_with_ingredients() {
    assert_parses(
        "Add @chilli{3%items}, @ginger{10%g} and @milk{1%l}.\n",
        json!({
            "steps": [[
                text("Add "),
                ingredient("chilli", json!(3), "items"),
                text(", "),
                ingredient("ginger", json!(10), "g"),
                text(" and "),
                ingredient("milk", json!(1), "l"),
                text(".")
            ]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_equipment_multiple_words() {
    assert_parses(
        "Fry in #frying pan{}\n",
        json!({"steps": [[text("Fry in "), cookware("frying pan", json!(1))]], "metadata": {}}),
    );
}

#[test]
fn test_equipment_multiple_words_with_leading_number() {
    assert_parses(
        "Fry in #7-inch nonstick frying pan{ }\n",
        json!({
            "steps": [[text("Fry in "), cookware("7-inch nonstick frying pan", json!(1))]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_equipment_one_word() {
    assert_parses(
        "Simmer in #pan for some time\n",
        json!({
            "steps": [[text("Simmer in "), cookware("pan", json!(1)), text(" for some time")]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_equipment_quantity() {
    assert_parses(
        "#frying pan{2}\n",
        json!({"steps": [[cookware("frying pan", json!(2))]], "metadata": {}}),
    );
    assert_parses(
        "#frying pan{three}\n",
        json!({"steps": [[cookware("frying pan", json!("three"))]], "metadata": {}}),
    );
}

#[test]
fn test_fractions() {
    assert_parses(
        "@milk{1/2%cup}\n",
        json!({"steps": [[ingredient("milk", json!(0.5), "cup")]], "metadata": {}}),
    );
    assert_parses(
        "@milk{1 / 2 %cup}\n",
        json!({"steps": [[ingredient("milk", json!(0.5), "cup")]], "metadata": {}}),
    );
}

#[test]
fn test_fractions_like() {
    assert_parses(
        "@milk{01/2%cup}\n",
        json!({"steps": [[ingredient("milk", json!("01/2"), "cup")]], "metadata": {}}),
    );
}

#[test]
fn test_fractions_in_directions() {
    assert_parses(
        "knife cut about every 1/2 inches\n",
        json!({"steps": [[text("knife cut about every 1/2 inches")]], "metadata": {}}),
    );
}

#[test]
fn test_ingredient_explicit_units() {
    assert_parses(
        "@chilli{3%items}\n",
        json!({"steps": [[ingredient("chilli", json!(3), "items")]], "metadata": {}}),
    );
    assert_parses(
        "@chilli{ 3 % items }\n",
        json!({"steps": [[ingredient("chilli", json!(3), "items")]], "metadata": {}}),
    );
}

#[test]
fn test_ingredient_implicit_units() {
    assert_parses(
        "@chilli{3}\n",
        json!({"steps": [[ingredient("chilli", json!(3), "")]], "metadata": {}}),
    );
}

#[test]
fn test_ingredient_no_units() {
    assert_parses(
        "@chilli\n",
        json!({"steps": [[ingredient("chilli", json!("some"), "")]], "metadata": {}}),
    );
    assert_parses(
        "@5peppers\n",
        json!({"steps": [[ingredient("5peppers", json!("some"), "")]], "metadata": {}}),
    );
}

#[test]
fn test_ingredient_with_numbers() {
    assert_parses(
        "@tipo 00 flour{250%g}\n",
        json!({"steps": [[ingredient("tipo 00 flour", json!(250), "g")]], "metadata": {}}),
    );
    assert_parses(
        "Top with @1000 island dressing{ }\n",
        json!({
            "steps": [[text("Top with "), ingredient("1000 island dressing", json!("some"), "")]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_ingredient_with_emoji() {
    assert_parses(
        "Add some @🧂\n",
        json!({"steps": [[text("Add some "), ingredient("🧂", json!("some"), "")]], "metadata": {}}),
    );
}

#[test]
fn test_ingredient_without_stopper() {
    assert_parses(
        "@chilli cut into pieces\n",
        json!({
            "steps": [[ingredient("chilli", json!("some"), ""), text(" cut into pieces")]],
            "metadata": {}
        }),
    );
    assert_parses(
        "@chilli cut into pieces and @garlic\n",
        json!({
            "steps": [[
                ingredient("chilli", json!("some"), ""),
                text(" cut into pieces and "),
                ingredient("garlic", json!("some"), "")
            ]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_multi_word_ingredient() {
    assert_parses(
        "@hot chilli{3}\n",
        json!({"steps": [[ingredient("hot chilli", json!(3), "")]], "metadata": {}}),
    );
    assert_parses(
        "@hot chilli{}\n",
        json!({"steps": [[ingredient("hot chilli", json!("some"), "")]], "metadata": {}}),
    );
}

#[test]
fn test_quantity_as_text() {
    assert_parses(
        "@thyme{few%springs}\n",
        json!({"steps": [[ingredient("thyme", json!("few"), "springs")]], "metadata": {}}),
    );
    assert_parses(
        "@water{7 k }\n",
        json!({"steps": [[ingredient("water", json!("7 k"), "")]], "metadata": {}}),
    );
}

#[test]
fn test_metadata() {
    assert_parses(
        ">> sourced: babooshka\n",
        json!({"steps": [], "metadata": {"sourced": "babooshka"}}),
    );
    assert_parses(
        ">>cooking time    :30 mins\n",
        json!({"steps": [], "metadata": {"cooking time": "30 mins"}}),
    );
    assert_parses(
        ">> servings: 1|2|3\n",
        json!({"steps": [], "metadata": {"servings": "1|2|3"}}),
    );
}

#[test]
fn test_metadata_break() {
    assert_parses(
        "hello >> sourced: babooshka\n",
        json!({"steps": [[text("hello >> sourced: babooshka")]], "metadata": {}}),
    );
}

#[test]
fn test_multiple_lines() {
    assert_parses(
        ">> Prep Time: 15 minutes\n>> Cook Time: 30 minutes\n",
        json!({
            "steps": [],
            "metadata": {"Prep Time": "15 minutes", "Cook Time": "30 minutes"}
        }),
    );
    assert_parses(
        "Add a bit of chilli\n\nAdd a bit of hummus\n",
        json!({
            "steps": [[text("Add a bit of chilli")], [text("Add a bit of hummus")]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_slash_in_text() {
    assert_parses(
        "Preheat the oven to 200℃/Fan 180°C.\n",
        json!({"steps": [[text("Preheat the oven to 200℃/Fan 180°C.")]], "metadata": {}}),
    );
}

#[test]
fn test_timers() {
    assert_parses(
        "Fry for ~{1.5%minutes}\n",
        json!({"steps": [[text("Fry for "), timer("", json!(1.5), "minutes")]], "metadata": {}}),
    );
    assert_parses(
        "Fry for ~{1/2%hour}\n",
        json!({"steps": [[text("Fry for "), timer("", json!(0.5), "hour")]], "metadata": {}}),
    );
    assert_parses(
        "Fry for ~potato{42%minutes}\n",
        json!({
            "steps": [[text("Fry for "), timer("potato", json!(42), "minutes")]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_single_word_timer() {
    assert_parses(
        "Let it ~rest after plating\n",
        json!({
            "steps": [[text("Let it "), timer("rest", json!(""), ""), text(" after plating")]],
            "metadata": {}
        }),
    );
    assert_parses(
        "Let it ~rest, then serve\n",
        json!({
            "steps": [[text("Let it "), timer("rest", json!(""), ""), text(", then serve")]],
            "metadata": {}
        }),
    );
    assert_parses(
        "Let it ~rest⸫ then serve\n",
        json!({
            "steps": [[text("Let it "), timer("rest", json!(""), ""), text("⸫ then serve")]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_single_word_with_punctuation() {
    assert_parses(
        "Add some @chilli, then serve\n",
        json!({
            "steps": [[
                text("Add some "),
                ingredient("chilli", json!("some"), ""),
                text(", then serve")
            ]],
            "metadata": {}
        }),
    );
    assert_parses(
        "Add @chilli⸫, then serve\n",
        json!({
            "steps": [[
                text("Add "),
                ingredient("chilli", json!("some"), ""),
                text("⸫, then serve")
            ]],
            "metadata": {}
        }),
    );
    assert_parses(
        "Place in #pot, then boil\n",
        json!({
            "steps": [[text("Place in "), cookware("pot", json!(1)), text(", then boil")]],
            "metadata": {}
        }),
    );
}

#[test]
fn test_invalid_entities_are_text() {
    for source in [
        "It is ~ {5}",
        "It is ~ 5",
        "Message @ example{}",
        "Message me @ example",
        "Recipe # 10{}",
        "Let it ~\u{2009}rest after plating",
        "Add @\u{2009}chilli",
    ] {
        assert_parses(
            source,
            json!({"steps": [[text(source)]], "metadata": {}}),
        );
    }
}

#[test]
fn test_unicode_whitespace_ends_a_word() {
    assert_parses(
        "Add @chilli\u{2009}then bake\n",
        json!({
            "steps": [[
                text("Add "),
                ingredient("chilli", json!("some"), ""),
                text("\u{2009}then bake")
            ]],
            "metadata": {}
        }),
    );
}
