//! Keyword match types
//!
//! A keyword search produces a [`MatchResult`]. Callers that need a single
//! record pass a [`Disambiguation`] alongside the keyword instead of relying
//! on any state left behind by an earlier search.

use super::record::Record;

/// A record matched by a keyword search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 1-based index among the matches (not the line in the store file)
    pub position: usize,

    /// The matched record
    pub record: Record,
}

/// Outcome of a substring search over record names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// No record name contains the keyword
    NoMatch,

    /// Exactly one record name contains the keyword
    Unique(Candidate),

    /// Two or more record names contain the keyword, in store order
    Ambiguous(Vec<Candidate>),
}

impl MatchResult {
    /// Build a result from matched records, numbering them from 1
    pub fn from_matches(records: Vec<Record>) -> Self {
        let mut candidates: Vec<Candidate> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Candidate {
                position: index + 1,
                record,
            })
            .collect();

        match candidates.len() {
            0 => MatchResult::NoMatch,
            1 => MatchResult::Unique(candidates.remove(0)),
            _ => MatchResult::Ambiguous(candidates),
        }
    }

    /// All candidates in match order
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            MatchResult::NoMatch => &[],
            MatchResult::Unique(candidate) => std::slice::from_ref(candidate),
            MatchResult::Ambiguous(candidates) => candidates,
        }
    }

    /// Number of matched records
    pub fn len(&self) -> usize {
        self.candidates().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MatchResult::NoMatch)
    }

    /// The candidate whose full name equals `name`, if any
    pub fn exact(&self, name: &str) -> Option<&Candidate> {
        self.candidates().iter().find(|c| c.record.name == name)
    }

    /// Candidate names in match order
    pub fn names(&self) -> Vec<String> {
        self.candidates()
            .iter()
            .map(|c| c.record.name.clone())
            .collect()
    }
}

/// How a caller resolves a keyword that did not settle on one record
///
/// Target lookups (delete, rename, update) only consult this when the match
/// is ambiguous. Add also consults it when the single match has a different
/// full name than the one being added, since the caller must then choose
/// between merging and creating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Disambiguation {
    /// Report `AmbiguousUnresolved` instead of choosing
    #[default]
    FailOnAmbiguous,

    /// Pick the candidate at this 1-based position
    SelectIndex(usize),

    /// Pick the candidate with this exact name (for add: merge into it)
    MergeInto(String),

    /// Add only: create the keyword as a new, distinct record
    CreateNew,
}
