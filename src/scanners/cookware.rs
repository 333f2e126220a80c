use super::{braced, word, Scanned, Scanner, COOKWARE_MARKER};
use crate::amount;
use crate::error::LineError;
use crate::model::{Amount, Cookware, Item};
use log::trace;

/// `#pan`, `#frying pan{}` and `#pot{2}`
pub struct CookwareScanner;

impl Scanner for CookwareScanner {
    fn opens(&self, rest: &str) -> bool {
        rest.starts_with(COOKWARE_MARKER)
    }

    fn scan(&self, rest: &str) -> Result<Option<Scanned>, LineError> {
        if let Some(braced) = braced(rest) {
            let name = braced.name.trim();
            if !name.is_empty() {
                let amount = amount::resolve(braced.body, &Amount::cookware_default());
                return Ok(Some(Scanned {
                    len: braced.len,
                    item: Item::Cookware(Cookware {
                        name: name.to_string(),
                        quantity: amount.quantity,
                    }),
                }));
            }
        }

        let Some(word) = word(rest) else {
            trace!("no cookware at {:?}", rest);
            return Ok(None);
        };
        Ok(Some(Scanned {
            len: word.len,
            item: Item::Cookware(Cookware {
                name: word.name.to_string(),
                quantity: Amount::cookware_default().quantity,
            }),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Quantity;

    fn scan(rest: &str) -> Option<(usize, Cookware)> {
        match CookwareScanner.scan(rest).unwrap() {
            Some(Scanned {
                len,
                item: Item::Cookware(cookware),
            }) => Some((len, cookware)),
            Some(other) => panic!("unexpected item {:?}", other),
            None => None,
        }
    }

    #[test]
    fn test_single_word_defaults_to_one() {
        let (len, cookware) = scan("#pan.").unwrap();
        assert_eq!(len, 4);
        assert_eq!(cookware.name, "pan");
        assert_eq!(cookware.quantity, Quantity::Number(1.0));
    }

    #[test]
    fn test_multi_word_empty_braces() {
        let (len, cookware) = scan("#frying pan{} and").unwrap();
        assert_eq!(len, 13);
        assert_eq!(cookware.name, "frying pan");
        assert_eq!(cookware.quantity, Quantity::Number(1.0));
    }

    #[test]
    fn test_word_quantity_stays_text_and_unit_is_dropped() {
        let (_, cookware) = scan("#pan{three}").unwrap();
        assert_eq!(cookware.quantity, Quantity::Text("three".to_string()));

        let (_, cookware) = scan("#pot{2%large}").unwrap();
        assert_eq!(cookware.quantity, Quantity::Number(2.0));
    }

    #[test]
    fn test_whitespace_after_marker_is_not_cookware() {
        assert!(scan("# pan").is_none());
    }
}
