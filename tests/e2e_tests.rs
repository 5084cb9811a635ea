//! End-to-end integration tests
//!
//! These tests drive the engine over a real store file and audit log. Each
//! test:
//! 1. Seeds a store file in a temporary directory
//! 2. Runs a sequence of operations through `LedgerEngine`
//! 3. Compares the store file with the expected content
//! 4. Checks the audit log lines written along the way
//!
//! Scenarios cover the ledger laws (merge, delete-to-zero, insufficient
//! amount, ambiguity, totals) and file-level behavior (creation on first use,
//! external edits, malformed lines, exact-name rewrites).

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_ledger_engine::{
        Disambiguation, FileAuditLog, FileStore, LedgerEngine, LedgerError, MatchResult, Record,
    };
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    type FileEngine = LedgerEngine<FileStore, FileAuditLog>;

    /// A store and log living in their own temporary directory
    struct Ledger {
        _dir: TempDir,
        store_path: PathBuf,
        log_path: PathBuf,
        engine: FileEngine,
    }

    impl Ledger {
        fn seeded(content: &str) -> Self {
            let dir = TempDir::new().expect("Failed to create temp dir");
            let store_path = dir.path().join("ledger.csv");
            let log_path = dir.path().join("ledger.log");
            fs::write(&store_path, content).expect("Failed to seed store");

            let engine = LedgerEngine::new(
                FileStore::open(&store_path).expect("Failed to open store"),
                FileAuditLog::open(&log_path).expect("Failed to open log"),
            );

            Ledger {
                _dir: dir,
                store_path,
                log_path,
                engine,
            }
        }

        fn store_content(&self) -> String {
            fs::read_to_string(&self.store_path)
                .unwrap_or_else(|e| panic!("Failed to read store: {}", e))
        }

        fn log_lines(&self) -> Vec<String> {
            fs::read_to_string(&self.log_path)
                .unwrap_or_else(|e| panic!("Failed to read log: {}", e))
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    const FAIL: Disambiguation = Disambiguation::FailOnAmbiguous;

    #[test]
    fn test_files_created_on_first_use() {
        let dir = TempDir::new().unwrap();
        let store_path = dir.path().join("fresh.csv");
        let log_path = dir.path().join("fresh.log");

        let mut engine = LedgerEngine::new(
            FileStore::open(&store_path).unwrap(),
            FileAuditLog::open(&log_path).unwrap(),
        );
        assert_eq!(fs::read_to_string(&store_path).unwrap(), "");
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");

        assert_eq!(engine.total(), Err(LedgerError::EmptyStore));
        assert_eq!(engine.list_sorted(), Err(LedgerError::EmptyStore));
    }

    #[test]
    fn test_add_then_search_round_trip() {
        let mut ledger = Ledger::seeded("");

        ledger.engine.add("Alice", "10", &FAIL).unwrap();
        let report = ledger.engine.search("Alice").unwrap();

        match report.data {
            MatchResult::Unique(candidate) => assert_eq!(candidate.record, Record::new("Alice", 10)),
            other => panic!("Expected unique match, got {:?}", other),
        }
        assert_eq!(ledger.store_content(), "Alice,10\n");
    }

    #[test]
    fn test_merge_law() {
        let mut ledger = Ledger::seeded("");

        ledger.engine.add("Bob", "5", &FAIL).unwrap();
        ledger.engine.add("Bob", "7", &FAIL).unwrap();

        assert_eq!(ledger.store_content(), "Bob,12\n");
    }

    #[test]
    fn test_delete_to_zero_law() {
        let mut ledger = Ledger::seeded("Alice,10\nCarol,8\nDan,3\n");

        ledger.engine.delete("Carol", "8", &FAIL).unwrap();

        assert_eq!(ledger.store_content(), "Alice,10\nDan,3\n");
    }

    #[test]
    fn test_insufficient_amount_law() {
        let mut ledger = Ledger::seeded("Dan,3\n");

        assert_eq!(
            ledger.engine.delete("Dan", "5", &FAIL),
            Err(LedgerError::insufficient_amount("Dan", 3, 5))
        );
        assert_eq!(ledger.store_content(), "Dan,3\n");
    }

    #[rstest]
    #[case::first(1, Ok(Record::new("Record1", 1)))]
    #[case::second(2, Ok(Record::new("Record2", 2)))]
    #[case::zero(0, Err(LedgerError::invalid_selection(0, "1..=2")))]
    #[case::past_end(3, Err(LedgerError::invalid_selection(3, "1..=2")))]
    fn test_ambiguity_law(#[case] choice: usize, #[case] expected: Result<Record, LedgerError>) {
        let mut ledger = Ledger::seeded("Record1,1\nRecord2,2\n");

        let report = ledger.engine.search("Record").unwrap();
        assert!(matches!(report.data, MatchResult::Ambiguous(ref c) if c.len() == 2));
        assert_eq!(
            rust_ledger_engine::core::resolve_ambiguous(&report.data, choice),
            expected
        );
    }

    #[rstest]
    #[case::two_records("A,3\nB,4\n", Ok(7))]
    #[case::single_record("A,3\n", Ok(3))]
    #[case::empty("", Err(LedgerError::EmptyStore))]
    fn test_total_law(#[case] content: &str, #[case] expected: Result<u64, LedgerError>) {
        let mut ledger = Ledger::seeded(content);
        let total = ledger.engine.total().map(|report| report.data.amount);
        assert_eq!(total, expected);
    }

    #[test]
    fn test_list_sorted_is_idempotent_and_read_only() {
        let mut ledger = Ledger::seeded("Carol,8\nBob,5\nAlice,10\n");

        let first = ledger.engine.list_sorted().unwrap().data;
        let second = ledger.engine.list_sorted().unwrap().data;

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                Record::new("Alice", 10),
                Record::new("Bob", 5),
                Record::new("Carol", 8),
            ]
        );
        assert_eq!(ledger.store_content(), "Carol,8\nBob,5\nAlice,10\n");
    }

    #[test]
    fn test_rename_does_not_corrupt_longer_names() {
        let mut ledger = Ledger::seeded("Bobby,9\nBob,5\n");

        ledger
            .engine
            .rename_record("Bob", "Rob", &Disambiguation::SelectIndex(2))
            .unwrap();

        assert_eq!(ledger.store_content(), "Bobby,9\nRob,5\n");
    }

    #[test]
    fn test_rename_collision_keeps_names_unique() {
        let mut ledger = Ledger::seeded("Alice,10\nBob,5\n");

        assert_eq!(
            ledger.engine.rename_record("Alice", "Bob", &FAIL),
            Err(LedgerError::duplicate_name("Bob"))
        );
        assert_eq!(ledger.store_content(), "Alice,10\nBob,5\n");
    }

    #[test]
    fn test_external_edit_between_operations() {
        let mut ledger = Ledger::seeded("Alice,10\n");
        ledger.engine.add("Bob", "5", &FAIL).unwrap();

        fs::write(&ledger.store_path, "Alice,10\nBob,5\nZed,4").unwrap();

        ledger.engine.add("Carol", "1", &FAIL).unwrap();
        assert_eq!(ledger.store_content(), "Alice,10\nBob,5\nZed,4\nCarol,1\n");
        assert_eq!(ledger.engine.total().unwrap().data.amount, 20);
    }

    #[test]
    fn test_malformed_store_fails_without_writing() {
        let mut ledger = Ledger::seeded("Alice,10\nBob,lots\n");

        assert_eq!(
            ledger.engine.update_amount("Alice", "11", &FAIL),
            Err(LedgerError::malformed_record(2, "Bob,lots"))
        );
        assert_eq!(ledger.store_content(), "Alice,10\nBob,lots\n");

        let lines = ledger.log_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" - UpdateAmount Failure Malformed record at line 2: 'Bob,lots'"));
    }

    #[test]
    fn test_audit_log_format() {
        let mut ledger = Ledger::seeded("");

        ledger.engine.add("Alice", "10", &FAIL).unwrap();
        ledger.engine.add("Alice", "5", &FAIL).unwrap();
        let _ = ledger.engine.delete("Alice", "100", &FAIL);
        ledger.engine.total().unwrap();

        let lines = ledger.log_lines();
        assert_eq!(lines.len(), 4);

        let suffixes = [
            " - Add Success Alice,10",
            " - Add Success Alice,10 -> Alice,15",
            " - Delete Failure Insufficient amount for 'Alice': available 15, requested 100",
            " - Total Success 15",
        ];
        for (line, suffix) in lines.iter().zip(suffixes) {
            assert!(line.ends_with(suffix), "{:?} should end with {:?}", line, suffix);

            // DD/MM/YYYY HH:MM:SS
            let stamp = &line[..19];
            assert!(
                chrono::NaiveDateTime::parse_from_str(stamp, "%d/%m/%Y %H:%M:%S").is_ok(),
                "bad timestamp in {:?}",
                line
            );
        }
    }
}
