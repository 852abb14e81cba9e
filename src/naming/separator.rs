use fancy_regex::Regex;
use crate::dictionary::StyleWordRule;
use crate::error::{Error, Result};

/// Marks a recognized word edge ahead of tokenization.
pub const BOUNDARY_MARKER: char = '\u{1F}';

/// A piece of the name under separation. Claimed pieces were produced by a
/// rule and are not scanned again by later rules.
#[derive(Debug)]
struct Segment {
    text: String,
    claimed: bool,
    /// Byte offset in the original name; only meaningful while unclaimed
    offset: usize,
}

/// Insert boundary markers around every dictionary word found inside `raw_name`.
///
/// Rules are applied in dictionary order and the first rule to claim a
/// stretch of text wins it. A rule's separator never matches right before a
/// lowercase letter, so words inside longer words stay intact. A match at the
/// very start of the name is skipped when `protect_beginning` is set.
pub fn separate(raw_name: &str, rules: &[StyleWordRule], protect_beginning: bool) -> Result<String> {
    let mut segments = vec![Segment {
        text: raw_name.to_string(),
        claimed: false,
        offset: 0,
    }];

    for rule in rules {
        let Some(separator) = rule.separator() else {
            continue;
        };

        let mut next = Vec::with_capacity(segments.len());
        for segment in segments {
            if segment.claimed {
                next.push(segment);
                continue;
            }
            split_segment(segment, rule, separator, protect_beginning, &mut next)?;
        }
        segments = next;
    }

    let mut marked = String::with_capacity(raw_name.len() + 8);
    for segment in segments {
        if segment.claimed {
            marked.push(BOUNDARY_MARKER);
            marked.push_str(&segment.text);
            marked.push(BOUNDARY_MARKER);
        } else {
            marked.push_str(&segment.text);
        }
    }
    Ok(marked)
}

fn split_segment(
    segment: Segment,
    rule: &StyleWordRule,
    separator: &Regex,
    protect_beginning: bool,
    out: &mut Vec<Segment>,
) -> Result<()> {
    let text = segment.text.as_str();
    let base = segment.offset;
    let mut cursor = 0;
    let mut search = 0;

    while search <= text.len() {
        let found = separator
            .find_from_pos(text, search)
            .map_err(|e| Error::dictionary(&rule.text, e.to_string()))?;
        let Some(found) = found else {
            break;
        };

        let skipped = protect_beginning && base + found.start() == 0;
        if skipped || found.as_str().is_empty() {
            search = next_char_boundary(text, found.start());
            continue;
        }

        if found.start() > cursor {
            out.push(Segment {
                text: text[cursor..found.start()].to_string(),
                claimed: false,
                offset: base + cursor,
            });
        }
        out.push(Segment {
            text: rule
                .replacement()
                .map_or_else(|| found.as_str().to_string(), str::to_string),
            claimed: true,
            offset: 0,
        });
        cursor = found.end();
        search = found.end();
    }

    if cursor < text.len() {
        out.push(Segment {
            text: text[cursor..].to_string(),
            claimed: false,
            offset: base + cursor,
        });
    }
    Ok(())
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| index + c.len_utf8())
}
