use super::*;

/// Tests listing sports from an empty store.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn get_all_returns_empty_list_without_sports() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sport_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SportRepository::new(db.clone());
    let sports = repo.get_all().await?;

    assert!(sports.is_empty());

    Ok(())
}

/// Tests listing every stored sport with its schedules decoded.
///
/// Expected: Ok with both sports
#[tokio::test]
async fn get_all_returns_every_sport() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sport_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::sport::SportFactory::new(db)
        .sport_name("soccer")
        .schedule(schedule_document((10, 0), (12, 0), "MONDAY"))
        .build()
        .await?;
    factory::sport::SportFactory::new(db)
        .sport_name("tennis")
        .build()
        .await?;

    let repo = SportRepository::new(db.clone());
    let mut sports = repo.get_all().await?;
    sports.sort_by(|a, b| a.sport_name.cmp(&b.sport_name));

    assert_eq!(
        sports,
        vec![
            Sport::new("soccer", vec![monday_morning()]),
            Sport::new("tennis", vec![]),
        ]
    );

    Ok(())
}

/// Tests finding a single sport by name.
///
/// Expected: Ok(Some) for a stored sport, Ok(None) otherwise
#[tokio::test]
async fn get_sport_finds_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sport_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_sport(db).await?;

    let repo = SportRepository::new(db.clone());

    let found = repo.get_sport(&stored.sport_name).await?;
    assert_eq!(found, Some(Sport::new(stored.sport_name.clone(), vec![])));

    let missing = repo.get_sport("curling").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that a missing sport and a sport without schedules stay distinguishable.
///
/// Expected: NotFound for the missing sport, Found(empty) for the stored one
#[tokio::test]
async fn get_schedules_distinguishes_missing_from_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sport_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::sport::SportFactory::new(db)
        .sport_name("chess")
        .build()
        .await?;

    let repo = SportRepository::new(db.clone());

    assert_eq!(repo.get_schedules("chess").await?, ScheduleLookup::Found(vec![]));
    assert_eq!(repo.get_schedules("polo").await?, ScheduleLookup::NotFound);

    Ok(())
}

/// Tests reading schedules in insertion order.
///
/// Expected: Found with both schedules
#[tokio::test]
async fn get_schedules_returns_stored_schedules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sport_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::sport::SportFactory::new(db)
        .sport_name("soccer")
        .schedule(schedule_document((10, 0), (12, 0), "MONDAY"))
        .schedule(schedule_document((18, 30), (20, 0), "FRIDAY"))
        .build()
        .await?;

    let repo = SportRepository::new(db.clone());

    assert_eq!(
        repo.get_schedules("soccer").await?,
        ScheduleLookup::Found(vec![monday_morning(), friday_evening()])
    );

    Ok(())
}

/// Tests that a stored document with a corrupt schedule array surfaces as an error.
///
/// Expected: Err(JsonErr)
#[tokio::test]
async fn get_sport_fails_on_corrupt_document() -> Result<(), AppError> {
    let test = TestBuilder::new().with_sport_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::sport::SportFactory::new(db)
        .sport_name("soccer")
        .schedule(serde_json::json!({ "day": "SOMEDAY" }))
        .build()
        .await?;

    let repo = SportRepository::new(db.clone());
    let result = repo.get_sport("soccer").await;

    assert!(matches!(result, Err(AppError::JsonErr(_))));

    Ok(())
}
