//! Text formatting helpers shared by the renderers.


/// Column width used when wrapping descriptions.
pub const WRAP_WIDTH: usize = 79;

/// Uppercases the first character of `s`.
///
/// # Examples
///
/// ```
/// use libjujuquery::format::capitalize;
///
/// assert_eq!(capitalize("trusty"), "Trusty");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Tab stop used when expanding tabs before wrapping.
const TAB_SIZE: usize = 8;

/// Greedily wraps `text` into lines of at most `width` characters.
///
/// Tabs expand to 8-column stops and every other whitespace character becomes
/// a space. Whitespace is dropped at line boundaries but kept between words.
/// Hyphenated words may break after a hyphen, and a word longer than `width`
/// fills the rest of the current line before continuing on the next.
///
/// # Examples
///
/// ```
/// use libjujuquery::format::wrap;
///
/// assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
/// assert_eq!(wrap("charm-tools rock", 12), vec!["charm-tools", "rock"]);
/// assert_eq!(wrap("nova-compute", 8), vec!["nova-", "compute"]);
/// assert!(wrap("   ", 10).is_empty());
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks: Vec<Vec<char>> = split_chunks(&normalize_whitespace(text));
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            if len + chunk.len() > width {
                break;
            }
            len += chunk.len();
            line.extend(chunks.pop());
        }

        if chunks.last().is_some_and(|c| c.len() > width) {
            split_long_chunk(&mut chunks, &mut line, width.saturating_sub(len));
        }

        if line.last().is_some_and(|c| is_space(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.into_iter().flatten().collect());
        }
    }
    lines
}

/// Expands tabs and maps the remaining whitespace to plain spaces.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if is_wrap_space(c) => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

fn is_wrap_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_space(chunk: &[char]) -> bool {
    chunk.iter().all(|c| *c == ' ')
}

fn is_letter(c: Option<&char>) -> bool {
    c.is_some_and(|c| (c.is_alphanumeric() && !c.is_numeric()) || *c == '_')
}

/// Splits text into runs of spaces and words, breaking words after hyphens
/// that join two letter groups (`nova-compute` but not `x-ray` or `py3-2`).
fn split_chunks(text: &str) -> Vec<Vec<char>> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    for i in 0..chars.len() {
        let at_boundary = i + 1 == chars.len() || (chars[i] == ' ') != (chars[i + 1] == ' ');
        if at_boundary || (chars[i] == '-' && breaks_after_hyphen(&chars, i)) {
            chunks.push(chars[start..=i].to_vec());
            start = i + 1;
        }
    }
    chunks
}

fn breaks_after_hyphen(chars: &[char], i: usize) -> bool {
    let at = |offset: isize| -> Option<&char> {
        i.checked_add_signed(offset).and_then(|j| chars.get(j))
    };

    let before = (is_letter(at(-1)) && is_letter(at(-2)))
        || (is_letter(at(-1)) && at(-2) == Some(&'-') && is_letter(at(-3)));
    let after = is_letter(at(1))
        && (is_letter(at(2)) || (at(2) == Some(&'-') && is_letter(at(3))));

    before && after
}

/// Moves as much of the over-long chunk on top of `chunks` into `line` as
/// fits in `space_left`, preferring to break after a hyphen. A full line
/// takes nothing and leaves the chunk for the next one.
fn split_long_chunk(chunks: &mut [Vec<char>], line: &mut Vec<Vec<char>>, space_left: usize) {
    let Some(chunk) = chunks.last_mut() else {
        return;
    };

    let hyphen = chunk[..space_left.min(chunk.len())]
        .iter()
        .rposition(|c| *c == '-')
        .filter(|&h| h > 0 && chunk[..h].iter().any(|c| *c != '-'));
    let end = hyphen.map_or(space_left, |h| h + 1);

    let rest = chunk.split_off(end.min(chunk.len()));
    line.push(std::mem::replace(chunk, rest));
}
