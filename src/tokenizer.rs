use crate::error::LineError;
use crate::model::{Item, Step};
use crate::scanners;
use log::trace;

/// Split one direction line into a step.
///
/// Plain text accumulates until a scanner recognizes a construct. A marker
/// that starts nothing stays in the text, so malformed inline syntax never
/// fails the line; only an unterminated block comment does.
pub fn tokenize(line: &str) -> Result<Step, LineError> {
    let scanners = scanners::all();
    let mut items = Vec::new();
    let mut text = String::new();
    let mut position = 0;

    while let Some(ch) = line[position..].chars().next() {
        let rest = &line[position..];
        if let Some(scanner) = scanners.iter().find(|scanner| scanner.opens(rest)) {
            if let Some(scanned) = scanner.scan(rest)? {
                flush(&mut text, &mut items);
                items.push(scanned.item);
                position += scanned.len;
                continue;
            }
            trace!("literal {:?} at byte {}", ch, position);
        }
        text.push(ch);
        position += ch.len_utf8();
    }
    flush(&mut text, &mut items);

    Ok(Step { items })
}

fn flush(text: &mut String, items: &mut Vec<Item>) {
    if !text.is_empty() {
        items.push(Item::text(std::mem::take(text)));
    }
}
