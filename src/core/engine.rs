//! Ledger engine
//!
//! This module provides the LedgerEngine that orchestrates validation,
//! keyword resolution, store mutation, and audit logging.
//!
//! The engine enforces business rules such as:
//! - At most one record per name (add, rename, and merge never duplicate a name)
//! - Amounts never go below zero (over-large deletes are rejected up front)
//! - A delete that brings an amount to exactly zero removes the record
//! - Every operation writes exactly one audit entry, success or failure
//!
//! The engine keeps no state between calls. Each operation re-reads the store,
//! so edits made to the store file between calls are picked up.

use crate::core::resolver::{
    match_records, resolve_ambiguous, select_by_name, select_target, Resolver,
};
use crate::core::traits::{AuditLog, RecordStore};
use crate::core::validator::{require_positive, validate_amount, validate_name};
use crate::types::{
    AddOutcome, Amount, Change, DeleteOutcome, Disambiguation, Event, LedgerError, LogEntry,
    MatchResult, Outcome, Record, Report, Total,
};

/// Ledger engine
///
/// Generic over the record store and the audit log so the same rules run
/// against files on disk and in-memory test doubles.
pub struct LedgerEngine<S: RecordStore, A: AuditLog> {
    store: S,
    audit: A,
}

impl<S: RecordStore, A: AuditLog> LedgerEngine<S, A> {
    /// Create a new LedgerEngine over an existing store and audit log
    pub fn new(store: S, audit: A) -> Self {
        LedgerEngine { store, audit }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    /// Give back the store and audit log
    pub fn into_parts(self) -> (S, A) {
        (self.store, self.audit)
    }

    /// Resolver over this engine's store
    ///
    /// Lookups made through the resolver directly are not audited; use
    /// [`LedgerEngine::search`] for an audited search.
    pub fn resolver(&self) -> Resolver<'_, S> {
        Resolver::new(&self.store)
    }

    /// Add `amount` under `name`, creating the record or merging into one
    ///
    /// - No record name contains `name`: a new record is appended.
    /// - The only match is `name` itself: the amounts are summed.
    /// - Otherwise `how` decides between merging into a candidate
    ///   (`SelectIndex`, `MergeInto`) and creating `name` (`CreateNew`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or amount is invalid, or the amount is zero
    /// - A decision is needed and `how` is `FailOnAmbiguous`
    /// - `CreateNew` is chosen while `name` already exists
    /// - The merged amount overflows
    pub fn add(
        &mut self,
        name: &str,
        amount: &str,
        how: &Disambiguation,
    ) -> Result<Report<AddOutcome>, LedgerError> {
        let result = self.try_add(name, amount, how);
        self.finish(Event::Add, result)
    }

    fn try_add(
        &mut self,
        name: &str,
        amount_text: &str,
        how: &Disambiguation,
    ) -> Result<Report<AddOutcome>, LedgerError> {
        validate_name(name)?;
        let amount = require_positive(validate_amount(amount_text)?, amount_text, "nothing to add")?;

        let records = self.store.load()?;
        let matches = match_records(&records, name);

        let merge_target = match &matches {
            MatchResult::NoMatch => None,
            MatchResult::Unique(candidate) if candidate.record.name == name => {
                Some(candidate.record.clone())
            }
            // The keyword hit other records; the caller picks merge or create.
            _ => match how {
                Disambiguation::CreateNew => {
                    if matches.exact(name).is_some() {
                        return Err(LedgerError::duplicate_name(name));
                    }
                    None
                }
                Disambiguation::SelectIndex(choice) => Some(resolve_ambiguous(&matches, *choice)?),
                Disambiguation::MergeInto(target) => Some(select_by_name(&matches, target)?),
                Disambiguation::FailOnAmbiguous => {
                    return Err(LedgerError::ambiguous(name, matches.names()));
                }
            },
        };

        match merge_target {
            None => {
                let record = Record::new(name, amount);
                self.store.append(&record)?;
                tracing::info!(record = %record, "record created");

                Ok(Report::new(
                    Event::Add,
                    format!("Created '{}' with amount {}", record.name, record.amount),
                    AddOutcome::Created(record.clone()),
                )
                .with_detail(record.to_line()))
            }
            Some(existing) => {
                let merged = existing
                    .amount
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::amount_overflow("merge", &existing.name))?;
                let change = self.rewrite(&existing, existing.with_amount(merged))?;

                Ok(Report::new(
                    Event::Add,
                    format!(
                        "Merged {} into '{}': {} -> {}",
                        amount, change.after.name, change.before.amount, change.after.amount
                    ),
                    AddOutcome::Merged(change.clone()),
                )
                .with_detail(format!("{} -> {}", change.before, change.after)))
            }
        }
    }

    /// Remove `amount` from the record `name` resolves to
    ///
    /// The record is rewritten with the remaining amount, or removed when the
    /// remainder is exactly zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or amount is invalid
    /// - No record matches, or an ambiguous match is left unresolved by `how`
    /// - `amount` exceeds the record's amount (the record is left unchanged)
    pub fn delete(
        &mut self,
        name: &str,
        amount: &str,
        how: &Disambiguation,
    ) -> Result<Report<DeleteOutcome>, LedgerError> {
        let result = self.try_delete(name, amount, how);
        self.finish(Event::Delete, result)
    }

    fn try_delete(
        &mut self,
        name: &str,
        amount_text: &str,
        how: &Disambiguation,
    ) -> Result<Report<DeleteOutcome>, LedgerError> {
        validate_name(name)?;
        let amount = validate_amount(amount_text)?;

        let matches = self.resolver().find(name)?;
        let target = select_target(name, &matches, how)?;

        if amount > target.amount {
            return Err(LedgerError::insufficient_amount(
                &target.name,
                target.amount,
                amount,
            ));
        }

        let remaining = target.amount - amount;
        if remaining == 0 {
            self.store.delete_line(&target.name)?;
            tracing::info!(record = %target, "record removed");

            return Ok(Report::new(
                Event::Delete,
                format!("Removed '{}'", target.name),
                DeleteOutcome::Removed(target.clone()),
            )
            .with_detail(format!("{} removed", target)));
        }

        let change = self.rewrite(&target, target.with_amount(remaining))?;
        Ok(Report::new(
            Event::Delete,
            format!(
                "Removed {} from '{}': {} left",
                amount, change.after.name, change.after.amount
            ),
            DeleteOutcome::Reduced(change.clone()),
        )
        .with_detail(format!("{} -> {}", change.before, change.after)))
    }

    /// Rename the record `current` resolves to, keeping its amount
    ///
    /// Renaming a record to its own name succeeds without touching the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either name is invalid
    /// - No record matches, or an ambiguous match is left unresolved by `how`
    /// - Another record is already named `new_name`
    pub fn rename_record(
        &mut self,
        current: &str,
        new_name: &str,
        how: &Disambiguation,
    ) -> Result<Report<Change>, LedgerError> {
        let result = self.try_rename(current, new_name, how);
        self.finish(Event::RenameRecord, result)
    }

    fn try_rename(
        &mut self,
        current: &str,
        new_name: &str,
        how: &Disambiguation,
    ) -> Result<Report<Change>, LedgerError> {
        validate_name(current)?;
        validate_name(new_name)?;

        let records = self.store.load()?;
        let target = select_target(current, &match_records(&records, current), how)?;

        if target.name == new_name {
            let change = Change {
                before: target.clone(),
                after: target,
            };
            return Ok(Report::new(
                Event::RenameRecord,
                format!("'{}' already has that name", new_name),
                change,
            )
            .with_detail(format!("{} unchanged", new_name)));
        }

        if records.iter().any(|record| record.name == new_name) {
            return Err(LedgerError::duplicate_name(new_name));
        }

        let change = self.rewrite(&target, target.renamed(new_name))?;
        Ok(Report::new(
            Event::RenameRecord,
            format!("Renamed '{}' to '{}'", change.before.name, change.after.name),
            change.clone(),
        )
        .with_detail(format!("{} -> {}", change.before.name, change.after.name)))
    }

    /// Set the amount of the record `name` resolves to
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or amount is invalid, or the amount is zero
    /// - No record matches, or an ambiguous match is left unresolved by `how`
    pub fn update_amount(
        &mut self,
        name: &str,
        amount: &str,
        how: &Disambiguation,
    ) -> Result<Report<Change>, LedgerError> {
        let result = self.try_update_amount(name, amount, Some(how));
        self.finish(Event::UpdateAmount, result)
    }

    /// Set the amount of the record named exactly `name`
    ///
    /// Skips keyword resolution entirely, for callers that already settled on
    /// a record.
    ///
    /// # Errors
    ///
    /// Same as [`LedgerEngine::update_amount`], except that `NotFound` is
    /// returned unless a record has exactly this name.
    pub fn update_amount_exact(
        &mut self,
        name: &str,
        amount: &str,
    ) -> Result<Report<Change>, LedgerError> {
        let result = self.try_update_amount(name, amount, None);
        self.finish(Event::UpdateAmount, result)
    }

    fn try_update_amount(
        &mut self,
        name: &str,
        amount_text: &str,
        how: Option<&Disambiguation>,
    ) -> Result<Report<Change>, LedgerError> {
        validate_name(name)?;
        let amount = require_positive(
            validate_amount(amount_text)?,
            amount_text,
            "amount must be at least 1",
        )?;

        let records = self.store.load()?;
        let target = match how {
            Some(how) => select_target(name, &match_records(&records, name), how)?,
            None => records
                .into_iter()
                .find(|record| record.name == name)
                .ok_or_else(|| LedgerError::not_found(name))?,
        };

        let change = self.rewrite(&target, target.with_amount(amount))?;
        Ok(Report::new(
            Event::UpdateAmount,
            format!(
                "Set '{}' to {} (was {})",
                change.after.name, change.after.amount, change.before.amount
            ),
            change.clone(),
        )
        .with_detail(format!("{} -> {}", change.before, change.after)))
    }

    /// Find the records whose name contains `keyword`
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` for a keyword outside the name grammar and
    /// `NotFound` when nothing matches.
    pub fn search(&mut self, keyword: &str) -> Result<Report<MatchResult>, LedgerError> {
        let result = self.try_search(keyword);
        self.finish(Event::Search, result)
    }

    fn try_search(&mut self, keyword: &str) -> Result<Report<MatchResult>, LedgerError> {
        validate_name(keyword)?;

        let matches = self.resolver().find(keyword)?;
        if matches.is_empty() {
            return Err(LedgerError::not_found(keyword));
        }

        let detail = format!("{} -> {}", keyword, matches.names().join(" "));
        Ok(Report::new(
            Event::Search,
            format!("{} record(s) match '{}'", matches.len(), keyword),
            matches,
        )
        .with_detail(detail))
    }

    /// Sum every amount in the store
    ///
    /// # Errors
    ///
    /// Returns `EmptyStore` when there is nothing to sum and `AmountOverflow`
    /// when the sum does not fit in an [`Amount`].
    pub fn total(&mut self) -> Result<Report<Total>, LedgerError> {
        let result = self.try_total();
        self.finish(Event::Total, result)
    }

    fn try_total(&mut self) -> Result<Report<Total>, LedgerError> {
        let records = self.store.load()?;
        if records.is_empty() {
            return Err(LedgerError::EmptyStore);
        }

        let amount = records
            .iter()
            .try_fold(0 as Amount, |sum, record| sum.checked_add(record.amount))
            .ok_or_else(|| LedgerError::amount_overflow("total", "*"))?;

        let total = Total {
            records: records.len(),
            amount,
        };
        Ok(Report::new(
            Event::Total,
            format!("Total of {} record(s): {}", total.records, total.amount),
            total,
        )
        .with_detail(amount.to_string()))
    }

    /// All records ordered by their `name,amount` text
    ///
    /// The order is plain byte-wise string order over the persisted line, so
    /// `Bob,12` sorts before `Bob,5` and uppercase names before lowercase.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStore` when there is nothing to list.
    pub fn list_sorted(&mut self) -> Result<Report<Vec<Record>>, LedgerError> {
        let result = self.try_list_sorted();
        self.finish(Event::ListSorted, result)
    }

    fn try_list_sorted(&mut self) -> Result<Report<Vec<Record>>, LedgerError> {
        let mut records = self.store.load()?;
        if records.is_empty() {
            return Err(LedgerError::EmptyStore);
        }

        records.sort_by_cached_key(Record::to_line);
        let count = records.len();
        Ok(Report::new(
            Event::ListSorted,
            format!("{} record(s)", count),
            records,
        )
        .with_detail(format!("{} record(s)", count)))
    }

    /// Replace `before` with `after`, addressing the line by `before`'s exact name
    fn rewrite(&mut self, before: &Record, after: Record) -> Result<Change, LedgerError> {
        self.store.replace_line(&before.name, &after)?;
        tracing::info!(before = %before, after = %after, "record rewritten");

        Ok(Change {
            before: before.clone(),
            after,
        })
    }

    /// Write the audit entry for an operation and hand its result back
    ///
    /// The store is the system of record: a failed audit write is reported
    /// through tracing and does not turn a completed operation into a failure.
    fn finish<T>(
        &mut self,
        event: Event,
        result: Result<Report<T>, LedgerError>,
    ) -> Result<Report<T>, LedgerError> {
        let entry = match &result {
            Ok(report) => LogEntry::new(event, Outcome::Success, report.detail.clone()),
            Err(error) => {
                tracing::debug!(%event, %error, "operation failed");
                LogEntry::new(event, Outcome::Failure, Some(error.to_string()))
            }
        };

        if let Err(error) = self.audit.append(&entry) {
            tracing::warn!(%event, "failed to write audit entry: {error}");
        }

        result
    }
}
