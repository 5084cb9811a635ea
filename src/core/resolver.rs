//! Keyword resolution
//!
//! Turns a keyword into a [`MatchResult`] by scanning record names for the
//! keyword as a case-sensitive substring, and turns a result plus a caller's
//! choice into a single record.
//!
//! Finding and resolving are separate steps so an interactive caller can show
//! the candidates and prompt in between, while a non-interactive caller can
//! hand over a [`Disambiguation`] up front.

use crate::core::traits::RecordStore;
use crate::types::{Candidate, Disambiguation, LedgerError, MatchResult, Record};

/// Resolves keywords against a record store
pub struct Resolver<'s, S: RecordStore> {
    store: &'s S,
}

impl<'s, S: RecordStore> Resolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Resolver { store }
    }

    /// Scan the store for records whose name contains `keyword`
    ///
    /// Matches are returned in store order and numbered from 1.
    pub fn find(&self, keyword: &str) -> Result<MatchResult, LedgerError> {
        let records = self.store.load()?;
        Ok(match_records(&records, keyword))
    }
}

/// Match `keyword` against an already loaded snapshot of records
pub fn match_records(records: &[Record], keyword: &str) -> MatchResult {
    let matches = records
        .iter()
        .filter(|record| record.name.contains(keyword))
        .cloned()
        .collect();
    MatchResult::from_matches(matches)
}

/// Pick the candidate at 1-based `choice`
///
/// A unique match accepts only `1`.
///
/// # Errors
///
/// Returns `InvalidSelection` if `choice` is outside `1..=len`, which is
/// every choice when nothing matched.
pub fn resolve_ambiguous(result: &MatchResult, choice: usize) -> Result<Record, LedgerError> {
    let candidates = result.candidates();
    if candidates.is_empty() {
        return Err(LedgerError::invalid_selection(choice, "no candidates"));
    }

    choice
        .checked_sub(1)
        .and_then(|index| candidates.get(index))
        .map(|candidate| candidate.record.clone())
        .ok_or_else(|| {
            LedgerError::invalid_selection(choice, format!("1..={}", candidates.len()))
        })
}

/// Settle on the single record a delete, rename, or update should act on
///
/// A unique match is used as is, whatever its full name; the strategy, including
/// any `SelectIndex` position, is not consulted. An ambiguous match needs
/// `SelectIndex` or `MergeInto`; the other strategies leave it unresolved.
pub fn select_target(
    keyword: &str,
    result: &MatchResult,
    how: &Disambiguation,
) -> Result<Record, LedgerError> {
    match result {
        MatchResult::NoMatch => Err(LedgerError::not_found(keyword)),
        MatchResult::Unique(candidate) => Ok(candidate.record.clone()),
        MatchResult::Ambiguous(_) => match how {
            Disambiguation::SelectIndex(choice) => resolve_ambiguous(result, *choice),
            Disambiguation::MergeInto(name) => select_by_name(result, name),
            Disambiguation::FailOnAmbiguous | Disambiguation::CreateNew => {
                Err(LedgerError::ambiguous(keyword, result.names()))
            }
        },
    }
}

/// Pick the candidate whose full name is `name`
pub fn select_by_name(result: &MatchResult, name: &str) -> Result<Record, LedgerError> {
    result
        .exact(name)
        .map(|candidate: &Candidate| candidate.record.clone())
        .ok_or_else(|| LedgerError::invalid_selection(name, result.names().join(" | ")))
}
