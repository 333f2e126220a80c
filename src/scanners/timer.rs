use super::{braced, word, Scanned, Scanner, TIMER_MARKER};
use crate::amount;
use crate::error::LineError;
use crate::model::{Amount, Item, Timer};
use log::trace;

/// `~{25%minutes}`, `~eggs{3%minutes}` and `~rest`
///
/// Unlike ingredients and cookware a braced timer may have no name. A
/// single-word timer is only a name; the word is never read as a duration.
pub struct TimerScanner;

impl Scanner for TimerScanner {
    fn opens(&self, rest: &str) -> bool {
        rest.starts_with(TIMER_MARKER)
    }

    fn scan(&self, rest: &str) -> Result<Option<Scanned>, LineError> {
        if let Some(braced) = braced(rest) {
            return Ok(Some(Scanned {
                len: braced.len,
                item: Item::Timer(Timer {
                    name: braced.name.trim().to_string(),
                    amount: amount::resolve(braced.body, &Amount::timer_default()),
                }),
            }));
        }

        let Some(word) = word(rest) else {
            trace!("no timer at {:?}", rest);
            return Ok(None);
        };
        Ok(Some(Scanned {
            len: word.len,
            item: Item::Timer(Timer {
                name: word.name.to_string(),
                amount: Amount::timer_default(),
            }),
        }))
    }
}
