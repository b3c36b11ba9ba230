//! Length-control algorithms for generated text.
//!
//! The model is instructed with a character budget but its output is never
//! trusted; these pure functions enforce the hard ceiling deterministically.
//! Trimming prefers semantic boundaries in priority order: sentence
//! terminator, then whitespace, then a raw character cut. All positions are
//! char indices, so multi-byte text never splits a code point.

/// Safety buffer subtracted from the ceiling when searching for a cut point.
const TRIM_BUFFER: usize = 100;
/// Marker appended when a cut lands mid-sentence.
const ELLIPSIS: &str = "...";

/// Trim `content` so its char count never exceeds `max_length`.
///
/// Already-compliant input is returned unchanged, which makes the operation
/// idempotent. Oversized input is cut at the rightmost sentence terminator
/// (`.`, `!`, `?`) before `max_length - 100`; failing that, at the last
/// whitespace boundary with an ellipsis appended; failing that, hard-cut at
/// `max_length - 3` with an ellipsis.
///
/// # Examples
///
/// ```
/// use penna_core::trim_to_limit;
///
/// let text = "First sentence. Second sentence that runs long without end";
/// assert_eq!(trim_to_limit(text, 1000), text);
/// ```
pub fn trim_to_limit(content: &str, max_length: usize) -> String {
    let chars: Vec<char> = content.chars().collect();
    if chars.len() <= max_length {
        return content.to_string();
    }

    let trim_position = max_length.saturating_sub(TRIM_BUFFER);
    let window = &chars[..trim_position.min(chars.len())];

    let trimmed = match window
        .iter()
        .rposition(|c| matches!(c, '.' | '!' | '?'))
    {
        // A terminator at index 0 leaves no usable sentence; fall through
        // to the whitespace cut, matching the word-boundary tier.
        Some(cut) if cut > 0 => chars[..=cut].iter().collect::<String>(),
        _ => {
            let mut text: String = match window.iter().rposition(|c| c.is_whitespace()) {
                Some(space) => chars[..space].iter().collect(),
                None => window.iter().collect(),
            };
            text.push_str(ELLIPSIS);
            text
        }
    };

    // Pathological inputs (a single token longer than the buffer) can still
    // be over the ceiling; resolve with a raw cut.
    if trimmed.chars().count() > max_length {
        let keep = max_length.saturating_sub(ELLIPSIS.len());
        let mut text: String = chars[..keep.min(chars.len())].iter().collect();
        text.push_str(ELLIPSIS);
        // Ceilings smaller than the ellipsis itself still have to hold.
        if text.chars().count() > max_length {
            text = text.chars().take(max_length).collect();
        }
        text
    } else {
        trimmed
    }
}

/// Clean a raw title line for storage and article submission.
///
/// Keeps alphanumerics, whitespace, and a small punctuation allowlist
/// (`-`, `:`, `!`, `?`); strips everything else, including emoji and
/// markdown markers, then trims surrounding whitespace.
///
/// # Examples
///
/// ```
/// use penna_core::clean_title;
///
/// assert_eq!(clean_title("## Why Agents Fail! 🚀"), "Why Agents Fail!");
/// assert_eq!(clean_title("**AI: Hype or Help?**"), "AI: Hype or Help?");
/// ```
pub fn clean_title(line: &str) -> String {
    line.chars()
        .filter(|c| {
            c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | ':' | '!' | '?')
        })
        .collect::<String>()
        .trim()
        .to_string()
}
