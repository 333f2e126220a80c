use super::{braced, word, Scanned, Scanner, INGREDIENT_MARKER};
use crate::amount;
use crate::error::LineError;
use crate::model::{Amount, Ingredient, Item};
use log::trace;

/// `@salt`, `@sea salt{}` and `@water{533%ml}`
pub struct IngredientScanner;

impl Scanner for IngredientScanner {
    fn opens(&self, rest: &str) -> bool {
        rest.starts_with(INGREDIENT_MARKER)
    }

    fn scan(&self, rest: &str) -> Result<Option<Scanned>, LineError> {
        if let Some(braced) = braced(rest) {
            let name = braced.name.trim();
            if !name.is_empty() {
                return Ok(Some(Scanned {
                    len: braced.len,
                    item: Item::Ingredient(Ingredient {
                        name: name.to_string(),
                        amount: amount::resolve(braced.body, &Amount::ingredient_default()),
                    }),
                }));
            }
        }

        let Some(word) = word(rest) else {
            trace!("no ingredient at {:?}", rest);
            return Ok(None);
        };
        Ok(Some(Scanned {
            len: word.len,
            item: Item::Ingredient(Ingredient {
                name: word.name.to_string(),
                amount: Amount::ingredient_default(),
            }),
        }))
    }
}
