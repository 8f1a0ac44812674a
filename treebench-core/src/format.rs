//! Annotation-block text format parser
//!
//! Each parser under comparison serializes its output as numbered sentence
//! blocks:
//!
//! ```text
//! 1. The dog ran.
//! The\the\DT\DET<TAB>dog\dog\NN\NOUN<TAB>...
//! (ROOT (S (NP (DT The) (NN dog)) (VP (VBD ran)) (. .)))
//! 1<TAB>The<TAB>det<TAB>2
//! 2<TAB>dog<TAB>nsubj<TAB>3
//! ...
//! ```
//!
//! The scanner splits the file on numbering markers (digits, a period, a
//! space, at the start of a line), then reads each block as: sentence text,
//! tab-separated token/tag line, a bracketed constituency tree (possibly
//! spanning several lines), and one tab-separated dependency row per
//! remaining line. A block violating that shape becomes a
//! [`ParsedRecord::Malformed`] with the reason attached; the file-level
//! parse never aborts.

use crate::record::{DependencyRow, ParsedRecord, SentenceRecord, TokenTag};

/// A numbering marker located in the input
struct Marker {
    number: u32,
    /// Byte offset of the marker itself (start of its line)
    start: usize,
    /// Byte offset of the first byte after `N. `
    body_start: usize,
}

/// Parse a whole annotation file into records, in file order
///
/// Input before the first numbering marker is discarded. A file with no
/// markers yields an empty sequence.
pub fn parse_annotations(input: &str) -> Vec<ParsedRecord> {
    let markers = find_markers(input);
    let mut records = Vec::with_capacity(markers.len());

    for (i, marker) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(input.len(), |next| next.start);
        let body = &input[marker.body_start..end];
        records.push(parse_block(marker.number, body));
    }

    tracing::debug!(
        total = records.len(),
        malformed = records.iter().filter(|r| !r.is_parsed()).count(),
        "parsed annotation file"
    );
    records
}

/// Collect the normalized constituency tree of every well-formed record
///
/// One tree per record, in file order, ready to be written one-per-line for
/// the external bracket-scoring tool. Malformed records are skipped.
pub fn extract_constituency(records: &[ParsedRecord]) -> Vec<&str> {
    records
        .iter()
        .filter_map(|record| match record {
            ParsedRecord::Parsed(sentence) => Some(sentence.constituency_parse.as_str()),
            ParsedRecord::Malformed { number, .. } => {
                tracing::warn!(number, "skipping malformed record during tree extraction");
                None
            }
        })
        .collect()
}

fn find_markers(input: &str) -> Vec<Marker> {
    let mut markers = Vec::new();
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        if let Some((number, prefix_len)) = match_marker(line) {
            markers.push(Marker {
                number,
                start: offset,
                body_start: offset + prefix_len,
            });
        }
        offset += line.len();
    }
    markers
}

/// Match `<digits>. ` at the start of a line, returning the sentence number
/// and the byte length of the marker
fn match_marker(line: &str) -> Option<(u32, usize)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !line[digits..].starts_with(". ") {
        return None;
    }
    let number = line[..digits].parse().ok()?;
    Some((number, digits + 2))
}

fn parse_block(number: u32, body: &str) -> ParsedRecord {
    match parse_block_parts(number, body) {
        Ok(record) => ParsedRecord::Parsed(record),
        Err(reason) => ParsedRecord::Malformed { number, reason },
    }
}

fn parse_block_parts(number: u32, body: &str) -> Result<SentenceRecord, String> {
    let mut lines = body.lines();

    let text = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| "missing sentence text".to_string())?;

    let tag_line = lines
        .next()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| "missing token/tag line".to_string())?;
    let tokens_tags: Vec<TokenTag> = tag_line.split('\t').map(TokenTag::from_raw).collect();

    // The tree may be pretty-printed over several lines; it runs until the
    // first line shaped like a dependency row.
    let rest: Vec<&str> = lines.collect();
    let deps_at = rest
        .iter()
        .position(|line| is_dependency_line(line))
        .unwrap_or(rest.len());

    let raw_tree: String = rest[..deps_at].concat();
    let raw_tree = raw_tree.trim();
    if !raw_tree.starts_with('(') || !raw_tree.ends_with(')') {
        return Err("constituency tree is not a bracketed expression".to_string());
    }

    let mut dependency_parse = Vec::new();
    for (i, line) in rest[deps_at..].iter().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            [index, surface, relation, head] => dependency_parse.push(DependencyRow {
                index: index.to_string(),
                surface: surface.to_string(),
                relation: relation.to_string(),
                head: head.to_string(),
            }),
            _ => {
                return Err(format!(
                    "dependency row {} has {} fields (expected 4)",
                    i + 1,
                    fields.len()
                ))
            }
        }
    }
    if dependency_parse.is_empty() {
        return Err("no dependency rows".to_string());
    }

    Ok(SentenceRecord {
        number,
        text: text.to_string(),
        tokens_tags,
        constituency_parse: normalize_constituency(raw_tree),
        dependency_parse,
    })
}

/// A dependency row starts with a 1-based token index followed by a tab
fn is_dependency_line(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('\t')
}

/// Normalize a raw bracketed tree string
///
/// Strips one outer `(TOP ...)` or `(ROOT ...)` wrapper if present, collapses
/// whitespace runs to a single space, and removes the space after `(` and
/// before `)`.
pub fn normalize_constituency(raw: &str) -> String {
    let stripped = strip_wrapper(raw.trim());
    let collapsed: String = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("( ", "(").replace(" )", ")")
}

fn strip_wrapper(tree: &str) -> &str {
    for label in ["(TOP", "(ROOT"] {
        if let Some(rest) = tree.strip_prefix(label) {
            // The label must end here, not be a prefix of a longer one
            if rest.starts_with(char::is_whitespace) {
                if let Some(inner) = rest.strip_suffix(')') {
                    return inner.trim_start();
                }
            }
        }
    }
    tree
}
