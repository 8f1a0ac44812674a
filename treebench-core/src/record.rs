//! In-memory representation of parsed annotation blocks

use serde::{Deserialize, Serialize};

/// One token/tag entry from the tab-separated tag line
///
/// The tag line is lenient at parse time: whatever backslash-delimited
/// fields a token carries are kept verbatim. Consumers that need a specific
/// field go through the accessors and decide what a missing field means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTag {
    /// Backslash-delimited fields in source order: surface, lemma, POS, UPOS
    pub fields: Vec<String>,
}

impl TokenTag {
    /// Build a token from its raw tag-line entry
    pub fn from_raw(raw: &str) -> Self {
        Self {
            fields: raw.split('\\').map(str::to_string).collect(),
        }
    }

    /// Surface form, if present
    pub fn surface(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Lemma, if present
    pub fn lemma(&self) -> Option<&str> {
        self.fields.get(1).map(String::as_str)
    }

    /// Fine-grained (treebank-specific) part-of-speech tag, if present
    pub fn pos(&self) -> Option<&str> {
        self.fields.get(2).map(String::as_str)
    }

    /// Universal part-of-speech tag, if present
    pub fn upos(&self) -> Option<&str> {
        self.fields.get(3).map(String::as_str)
    }

    /// Whether the token carries exactly the four expected fields
    pub fn is_well_formed(&self) -> bool {
        self.fields.len() == 4
    }

    /// The entry as it appeared in the tag line
    pub fn raw(&self) -> String {
        self.fields.join("\\")
    }
}

/// One labeled dependency edge, fields kept as text
///
/// Index fields are not coerced to integers here; the evaluation engine
/// coerces on demand and reports coercion failures with sentence context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRow {
    /// 1-based position of the dependent token
    pub index: String,
    /// Surface form of the dependent token
    pub surface: String,
    /// Relation label (e.g. `nsubj`, `det`, `ROOT`)
    pub relation: String,
    /// 1-based position of the head token, `0` for root attachment
    pub head: String,
}

/// One fully parsed annotation block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Ordinal from the numbering marker, diagnostic only
    pub number: u32,
    /// The raw sentence text
    pub text: String,
    /// Token/tag entries in sentence order
    pub tokens_tags: Vec<TokenTag>,
    /// Normalized bracketed constituency tree
    pub constituency_parse: String,
    /// Labeled dependency rows in file order
    pub dependency_parse: Vec<DependencyRow>,
}

/// Outcome of parsing one annotation block
///
/// Malformed blocks are kept in the output sequence so positional alignment
/// against other files is preserved; consumers decide whether a malformed
/// record is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParsedRecord {
    /// Block matched the expected four-part shape
    Parsed(SentenceRecord),
    /// Block failed the shape check
    Malformed {
        /// Ordinal from the numbering marker
        number: u32,
        /// What part of the shape was violated
        reason: String,
    },
}

impl ParsedRecord {
    /// The record's ordinal from the numbering marker
    pub fn number(&self) -> u32 {
        match self {
            ParsedRecord::Parsed(record) => record.number,
            ParsedRecord::Malformed { number, .. } => *number,
        }
    }

    /// The parsed sentence, if the block was well-formed
    pub fn as_sentence(&self) -> Option<&SentenceRecord> {
        match self {
            ParsedRecord::Parsed(record) => Some(record),
            ParsedRecord::Malformed { .. } => None,
        }
    }

    /// Whether the block parsed cleanly
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedRecord::Parsed(_))
    }
}
