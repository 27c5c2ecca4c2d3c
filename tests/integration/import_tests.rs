//! Bulk import integration tests
//!
//! Runs the whole pipeline against a real in-memory SQLite store.

#[cfg(test)]
mod tests {
    use crate::common::{SpotFactory, TestDatabase, write_csv};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use surf_spots::core::import::{
        CsvEntrySource, ImportControl, ImportError, ImportOptions, SourceError,
        StaticEntrySource, ValidationMode, WriteError, import_spots,
    };
    use surf_spots::core::models::SpotEntry;
    use tokio_util::sync::CancellationToken;

    async fn run(
        db: &TestDatabase,
        entries: Vec<SpotEntry>,
        batch_size: usize,
    ) -> Result<u64, ImportError> {
        let source = StaticEntrySource::new(entries);
        let writer = db.db().bulk_writer(batch_size);
        import_spots(
            &source,
            &writer,
            &ImportOptions::default(),
            &ImportControl::new(),
        )
        .await
    }

    /// Five entries in batches of two all land and keep their order
    #[tokio::test]
    async fn test_import_persists_every_entry() {
        let db = TestDatabase::new().await;

        let count = run(&db, SpotFactory::batch(5), 2).await.unwrap();
        assert_eq!(count, 5);
        assert_eq!(db.db().count_spots().await.unwrap(), 5);

        let names: Vec<String> = db
            .db()
            .list_spots(10, 0)
            .await
            .unwrap()
            .into_iter()
            .map(|spot| spot.name)
            .collect();
        assert_eq!(names, ["Spot 1", "Spot 2", "Spot 3", "Spot 4", "Spot 5"]);
    }

    #[tokio::test]
    async fn test_import_single_batch_larger_than_input() {
        let db = TestDatabase::new().await;
        assert_eq!(run(&db, SpotFactory::batch(3), 500).await.unwrap(), 3);
        assert_eq!(db.db().count_spots().await.unwrap(), 3);
    }

    /// Empty input is reported as nothing to import and writes nothing
    #[tokio::test]
    async fn test_import_empty_source() {
        let db = TestDatabase::new().await;

        let err = run(&db, Vec::new(), 2).await.unwrap_err();
        assert!(err.is_nothing_to_import());
        assert!(matches!(err, ImportError::Write(WriteError::NothingToImport)));
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    /// A failing second batch rolls back the first one too
    #[tokio::test]
    async fn test_import_is_atomic_when_a_batch_fails() {
        let db = TestDatabase::new().await;
        db.fail_inserts_named("Spot 3").await;

        let err = run(&db, SpotFactory::batch(3), 2).await.unwrap_err();
        match err {
            ImportError::Write(WriteError::Exec { batch, .. }) => {
                assert_eq!((batch.start(), batch.end()), (2, 2));
            }
            other => panic!("expected exec failure, got {:?}", other),
        }
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_import_failure_in_later_batch_leaves_store_untouched() {
        let db = TestDatabase::new().await;
        db.db()
            .create_spot(SpotFactory::named("Existing"))
            .await
            .unwrap();
        db.fail_inserts_named("Spot 7").await;

        assert!(run(&db, SpotFactory::batch(8), 3).await.is_err());
        assert_eq!(db.db().count_spots().await.unwrap(), 1);
    }

    /// An out-of-range latitude stops the run before anything is written
    #[tokio::test]
    async fn test_import_rejects_invalid_latitude() {
        let db = TestDatabase::new().await;
        let mut entries = SpotFactory::batch(2);
        entries.push(SpotFactory::bad_latitude());

        let err = run(&db, entries, 2).await.unwrap_err();
        let failures = err.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index, 2);
        assert!(err.to_string().contains("latitude"));
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_import_collect_all_reports_every_failure() {
        let db = TestDatabase::new().await;
        let entries = vec![
            SpotFactory::bad_latitude(),
            SpotFactory::named("Fine"),
            SpotEntry::new("", 0.0, 0.0, "Somewhere", "FR"),
        ];
        let source = StaticEntrySource::new(entries);
        let writer = db.db().bulk_writer(10);
        let options = ImportOptions {
            validation: ValidationMode::CollectAll,
        };

        let err = import_spots(&source, &writer, &options, &ImportControl::new())
            .await
            .unwrap_err();
        let indexes: Vec<usize> = err
            .failures()
            .iter()
            .map(|f| f.index)
            .collect();
        assert_eq!(indexes, [0, 2]);
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    /// Surrounding whitespace is trimmed before the spot is stored
    #[tokio::test]
    async fn test_import_persists_sanitized_values() {
        let db = TestDatabase::new().await;
        let entry = SpotEntry::new("  Spot 1  ", 43.25, 76.95, " Almaty ", " kz ");

        assert_eq!(run(&db, vec![entry], 2).await.unwrap(), 1);

        let spots = db.db().list_spots(10, 0).await.unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].name, "Spot 1");
        assert_eq!(spots[0].locality, "Almaty");
        assert_eq!(spots[0].country_code, "kz");
    }

    #[tokio::test]
    async fn test_import_cancelled_before_start() {
        let db = TestDatabase::new().await;
        let source = StaticEntrySource::new(SpotFactory::batch(4));
        let writer = db.db().bulk_writer(2);
        let control = ImportControl::new();
        control.cancel();

        let err = import_spots(&source, &writer, &ImportOptions::default(), &control)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Write(WriteError::Cancelled)));
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    /// Cancelling after the first batch was inserted rolls that batch back
    #[tokio::test]
    async fn test_import_cancelled_between_batches() {
        let db = TestDatabase::new().await;
        let source = StaticEntrySource::new(SpotFactory::batch(6));
        let writer = db.db().bulk_writer(2);
        let written = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&written);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let control = ImportControl::new()
            .with_cancellation(cancel)
            .on_batch(move |_, total| {
                recorder.lock().unwrap().push(total);
                trigger.cancel();
            });

        let err = import_spots(&source, &writer, &ImportOptions::default(), &control)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Write(WriteError::Cancelled)));
        assert_eq!(*written.lock().unwrap(), [2]);
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_import_expired_deadline() {
        let db = TestDatabase::new().await;
        let source = StaticEntrySource::new(SpotFactory::batch(4));
        let writer = db.db().bulk_writer(2);
        let control = ImportControl::new().with_timeout(Duration::ZERO);

        let err = import_spots(&source, &writer, &ImportOptions::default(), &control)
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Write(WriteError::DeadlineExceeded)));
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_spots_through_store() {
        let db = TestDatabase::new().await;
        let count = db
            .db()
            .create_spots(&SpotFactory::batch(4), 3, &ImportControl::new())
            .await
            .unwrap();
        assert_eq!(count, 4);
        assert_eq!(db.db().count_spots().await.unwrap(), 4);
    }

    /// CSV file to store, end to end
    #[tokio::test]
    async fn test_import_from_csv_file() {
        let db = TestDatabase::new().await;
        let file = write_csv(
            "name,latitude,longitude,locality,country_code\n\
             Supertubos,39.34,-9.36,Peniche,PT\n\
             Jeffreys Bay,-34.05,24.93,Jeffreys Bay,ZA\n\
             \"Mundaka, river mouth\",43.41,-2.70,Mundaka,ES\n",
        );
        let source = CsvEntrySource::new(file.path());
        let writer = db.db().bulk_writer(2);

        let count = import_spots(
            &source,
            &writer,
            &ImportOptions::default(),
            &ImportControl::new(),
        )
        .await
        .unwrap();
        assert_eq!(count, 3);

        let spots = db.db().list_spots(10, 0).await.unwrap();
        assert_eq!(spots[2].name, "Mundaka, river mouth");
        assert_eq!(spots[1].country_code, "ZA");
    }

    #[tokio::test]
    async fn test_import_from_csv_rejects_malformed_row() {
        let db = TestDatabase::new().await;
        let file = write_csv(
            "name,latitude,longitude,locality,country_code\n\
             Supertubos,39.34,-9.36,Peniche,PT\n\
             Broken,north,-9.0,Peniche,PT\n",
        );
        let source = CsvEntrySource::new(file.path());
        let writer = db.db().bulk_writer(2);

        let err = import_spots(
            &source,
            &writer,
            &ImportOptions::default(),
            &ImportControl::new(),
        )
        .await
        .unwrap_err();
        match err {
            ImportError::Read(SourceError::Malformed { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("latitude"));
            }
            other => panic!("expected malformed record, got {:?}", other),
        }
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_import_from_header_only_csv() {
        let db = TestDatabase::new().await;
        let file = write_csv("name,latitude,longitude,locality,country_code\n");
        let source = CsvEntrySource::new(file.path());
        let writer = db.db().bulk_writer(2);

        let err = import_spots(
            &source,
            &writer,
            &ImportOptions::default(),
            &ImportControl::new(),
        )
        .await
        .unwrap_err();
        assert!(err.is_nothing_to_import());
    }
}
