//! Greedy word wrapping for paragraph text
//!
//! ASCII whitespace (including newlines) separates words; tabs are expanded
//! to eight-column stops first. Other characters, such as the no-break space,
//! belong to the word they sit in. Each output line holds as many whole words as
//! fit in `width` characters. Whitespace is dropped at line boundaries
//! except before the very first word. Words longer than a full line are
//! split, preferring a break just after a hyphen, and hyphenated words may
//! also break after an inner hyphen.

const TAB_SIZE: usize = 8;

/// Wrap `text` to lines of at most `width` characters
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut chunks = split_chunks(&expand_tabs(text));
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut cur_line: Vec<String> = Vec::new();
        let mut cur_len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            let len = char_len(chunk);
            if cur_len + len > width {
                break;
            }
            cur_len += len;
            cur_line.extend(chunks.pop());
        }

        if chunks.last().is_some_and(|c| char_len(c) > width) {
            break_long_word(&mut chunks, &mut cur_line, cur_len, width);
        }

        if cur_line.last().is_some_and(|c| is_space(c)) {
            cur_line.pop();
        }

        if !cur_line.is_empty() {
            lines.push(cur_line.concat());
        }
    }

    lines
}

/// Move as much of the oversized top chunk as fits onto the current line
fn break_long_word(
    chunks: &mut Vec<String>,
    cur_line: &mut Vec<String>,
    cur_len: usize,
    width: usize,
) {
    let Some(chunk) = chunks.pop() else {
        return;
    };
    // A full line takes nothing more; the chunk starts the next one.
    let space_left = if cur_line.is_empty() {
        width.max(1)
    } else {
        width.saturating_sub(cur_len)
    };
    if space_left == 0 {
        chunks.push(chunk);
        return;
    }

    let chars: Vec<char> = chunk.chars().collect();

    let mut end = space_left;
    if let Some(hyphen) = chars[..space_left].iter().rposition(|&c| c == '-') {
        if hyphen > 0 && chars[..hyphen].iter().any(|&c| c != '-') {
            end = hyphen + 1;
        }
    }

    cur_line.push(chars[..end].iter().collect());
    chunks.push(chars[end..].iter().collect());
}

/// Split text into alternating runs of words and single-space whitespace
fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut in_space = false;

    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        let space = is_separator(c);
        if space != in_space && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        in_space = space;
        current.push(if space { ' ' } else { c });

        // Break after an inner hyphen: "well-known" wraps as "well-" + "known".
        let hyphen_break = c == '-'
            && i > 0
            && chars[i - 1].is_alphanumeric()
            && chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
        if hyphen_break {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn expand_tabs(text: &str) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Characters that separate words
pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_space(chunk: &str) -> bool {
    chunk.chars().all(is_separator)
}

fn char_len(chunk: &str) -> usize {
    chunk.chars().count()
}
