//! Spot store integration tests
//!
//! Single-row operations on a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{SpotFactory, TestDatabase};
    use surf_spots::core::models::{Coordinates, SpotEntry, SpotUpdate};
    use surf_spots::storage::DatabaseBackendType;
    use surf_spots::utils::error::SpotsError;

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().health_check().await);
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

        let stats = assert_ok!(db.db().stats().await);
        assert_eq!(stats.total_spots, 0);
    }

    #[tokio::test]
    async fn test_migration_is_idempotent() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().migrate().await);
    }

    #[tokio::test]
    async fn test_create_and_find_spot() {
        let db = TestDatabase::new().await;

        let spot = assert_ok!(
            db.db()
                .create_spot(SpotEntry::new(" Teahupoo ", -17.85, -149.26, "Tahiti", "PF"))
                .await
        );
        assert!(spot.id > 0);
        assert_eq!(spot.name, "Teahupoo");

        let found = assert_ok!(db.db().find_spot_by_id(spot.id).await).expect("spot exists");
        assert_eq!(found.name, "Teahupoo");
        assert_eq!(found.coordinates, Coordinates::new(-17.85, -149.26));
        assert_eq!(found.locality, "Tahiti");

        assert!(assert_ok!(db.db().find_spot_by_id(spot.id + 100).await).is_none());
    }

    #[tokio::test]
    async fn test_create_spot_rejects_invalid_entry() {
        let db = TestDatabase::new().await;

        let err = db
            .db()
            .create_spot(SpotEntry::new("Spot", 0.0, 0.0, "Somewhere", "XX"))
            .await
            .unwrap_err();
        assert!(matches!(err, SpotsError::Validation(_)));
        assert_eq!(db.db().count_spots().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_spots_pagination() {
        let db = TestDatabase::new().await;
        for entry in SpotFactory::batch(5) {
            assert_ok!(db.db().create_spot(entry).await);
        }

        let first = assert_ok!(db.db().list_spots(2, 0).await);
        let rest = assert_ok!(db.db().list_spots(10, 2).await);
        assert_eq!(first.len(), 2);
        assert_eq!(rest.len(), 3);
        assert_eq!(first[0].name, "Spot 1");
        assert_eq!(rest[0].name, "Spot 3");
    }

    #[tokio::test]
    async fn test_update_spot() {
        let db = TestDatabase::new().await;
        let spot = assert_ok!(db.db().create_spot(SpotFactory::named("Grande Plage")).await);

        let update = SpotUpdate {
            locality: Some(" Anglet ".to_string()),
            coordinates: Some(Coordinates::new(43.5, -1.53)),
            ..Default::default()
        };
        let updated = assert_ok!(db.db().update_spot(spot.id, &update).await);
        assert_eq!(updated.name, "Grande Plage");
        assert_eq!(updated.locality, "Anglet");
        assert_eq!(updated.coordinates.latitude, 43.5);
        assert!(updated.updated_at >= spot.updated_at);

        let invalid = SpotUpdate {
            coordinates: Some(Coordinates::new(0.0, 181.0)),
            ..Default::default()
        };
        let err = db.db().update_spot(spot.id, &invalid).await.unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[tokio::test]
    async fn test_update_missing_spot() {
        let db = TestDatabase::new().await;
        let err = db
            .db()
            .update_spot(42, &SpotUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SpotsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_spot() {
        let db = TestDatabase::new().await;
        let spot = assert_ok!(db.db().create_spot(SpotFactory::named("La Nord")).await);

        assert_ok!(db.db().delete_spot(spot.id).await);
        assert_eq!(db.db().count_spots().await.unwrap(), 0);

        let err = db.db().delete_spot(spot.id).await.unwrap_err();
        assert!(matches!(err, SpotsError::NotFound(_)));
    }
}
