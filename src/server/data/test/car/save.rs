use super::*;

/// Tests inserting a car without an id.
///
/// Verifies that the database assigns an id and every submitted field is stored.
///
/// Expected: Ok with the stored car
#[tokio::test]
async fn inserts_car_without_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo.save(car_params("BMW", "4H44444")).await?;

    assert!(car.id > 0);

    let stored = entity::prelude::Car::find_by_id(car.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.brand, "BMW");
    assert_eq!(stored.year, 1999);
    assert_eq!(stored.licence_plate, "4H44444");
    assert_eq!(stored.color, CarColor::Black);
    assert_eq!(stored.car_type, CarType::Hatchback);

    Ok(())
}

/// Tests saving with an existing id overwrites the row in place.
///
/// Expected: Ok with the same id and the new values, row count unchanged
#[tokio::test]
async fn overwrites_car_with_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let mut params = car_params("Audi", &existing.licence_plate).with_id(Some(existing.id));
    params.color = CarColor::Pink;
    params.car_type = CarType::Combi;
    let car = repo.save(params).await?;

    assert_eq!(car.id, existing.id);
    assert_eq!(car.brand, "Audi");
    assert_eq!(car.color, CarColor::Pink);
    assert_eq!(car.car_type, CarType::Combi);

    let all = entity::prelude::Car::find().all(db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

/// Tests saving the same params twice with the same id.
///
/// Expected: Ok both times with identical results
#[tokio::test]
async fn is_idempotent_per_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_car(db).await?;

    let repo = CarRepository::new(db);
    let params = car_params("Audi", "5H55555").with_id(Some(existing.id));
    let first = repo.save(params.clone()).await?;
    let second = repo.save(params).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests saving with an id that has no row.
///
/// Expected: Err(DbErr::RecordNotUpdated) and nothing inserted
#[tokio::test]
async fn fails_for_nonexistent_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo.save(car_params("BMW", "4H44444").with_id(Some(999))).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    assert!(entity::prelude::Car::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests the unique index on the licence plate.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_licence_plate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    repo.save(car_params("BMW", "4H44444")).await?;

    let result = repo.save(car_params("Audi", "4H44444")).await;

    assert!(result.is_err());

    Ok(())
}
