//! Single-pass template scanner
//!
//! The scanner walks the template left to right. At each delimiter it looks
//! for the next one; the enclosed text is looked up in the map. On a hit the
//! value goes to the output and the scan resumes after the closing delimiter.
//! On a miss (or the empty token `%%`) the opening delimiter is emitted
//! literally and the scan resumes right after it, so the would-be closing
//! delimiter can still open a later token: with only `x` registered,
//! `%nope%x%` expands to `%nopeX`.
//!
//! Output text is never re-scanned. Expansion therefore cannot chain, and the
//! result is independent of map iteration order.

use std::collections::HashMap;

use crate::error::ExpandError;

/// The sentinel delimiter on both sides of a placeholder name.
const DELIMITER: char = '%';

/// Expand `template`, leaving unknown and malformed tokens in place.
pub(crate) fn expand(template: &str, entries: &HashMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(DELIMITER) {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let close = match after_open.find(DELIMITER) {
            Some(close) => close,
            None => {
                // Unbalanced delimiter: the tail is literal text.
                output.push_str(&rest[open..]);
                return output;
            }
        };

        let name = &after_open[..close];
        match entries.get(name) {
            Some(value) if !name.is_empty() => {
                output.push_str(value);
                rest = &after_open[close + 1..];
            }
            _ => {
                output.push(DELIMITER);
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Expand `template`, failing on the first well-formed token whose name has
/// no registered entry. Malformed tokens still pass through.
pub(crate) fn expand_strict(
    template: &str,
    entries: &HashMap<String, String>,
) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(DELIMITER) {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let close = match after_open.find(DELIMITER) {
            Some(close) => close,
            None => {
                output.push_str(&rest[open..]);
                return Ok(output);
            }
        };

        let name = &after_open[..close];
        if name.is_empty() {
            output.push(DELIMITER);
            rest = after_open;
        } else if let Some(value) = entries.get(name) {
            output.push_str(value);
            rest = &after_open[close + 1..];
        } else {
            return Err(ExpandError::UnknownPlaceholder {
                name: name.to_string(),
            });
        }
    }

    output.push_str(rest);
    Ok(output)
}
