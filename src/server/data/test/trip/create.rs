use super::*;

/// Tests that a trip is stored with its legs and the route survives the JSON column.
///
/// Expected: Ok with legs ordered by start time and decoded routes
#[tokio::test]
async fn stores_trip_with_legs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_asset(db).await?;
    let depot = factory::create_location(db).await?;
    let start = Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap();
    let route = vec![
        Coordinate {
            latitude: 47.6,
            longitude: -122.3,
        },
        Coordinate {
            latitude: 47.7,
            longitude: -122.2,
        },
    ];

    let leg = |offset: i64| CreateTripLegParams {
        start_time_utc: start + Duration::minutes(offset),
        end_time_utc: start + Duration::minutes(offset + 30),
        route: route.clone(),
        average_speed: 40.0,
        start_location_id: None,
        end_location_id: None,
    };

    let repo = TripRepository::new(db);
    let created = repo
        .create(CreateTripParams {
            asset_id: asset.id.clone(),
            start_time_utc: start,
            end_time_utc: start + Duration::hours(2),
            start_location_id: Some(depot.id.clone()),
            end_location_id: None,
            legs: vec![leg(60), leg(0)],
        })
        .await?;

    let fetched = repo.get_by_id(created.trip.id).await?.unwrap();
    let trip = Trip::from_with_legs(fetched).unwrap();

    assert_eq!(trip.asset_id, asset.id);
    assert_eq!(trip.start_location_id, Some(depot.id));
    assert_eq!(trip.legs.len(), 2);
    assert!(trip.legs[0].start_time_utc < trip.legs[1].start_time_utc);
    assert_eq!(trip.legs[0].route, route);

    Ok(())
}
