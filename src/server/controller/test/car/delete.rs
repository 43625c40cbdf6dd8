use super::*;

/// Tests deleting one of two cars.
///
/// Expected: 200 and only the other car remaining
#[tokio::test]
async fn deletes_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_admin(db).await?;
    let bmw = create_bmw(db).await?;
    let audi = create_audi(db).await?;

    let auth = admin_auth();
    let (status, _) = send(
        app(db),
        request(Method::DELETE, &format!("/cars/{}", bmw.id), Some(&auth), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(entity::prelude::Car::find().all(db).await?, vec![audi]);

    Ok(())
}

/// Tests deleting an id with no car.
///
/// Expected: 200
#[tokio::test]
async fn succeeds_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_admin(db).await?;

    let auth = admin_auth();
    let (status, _) = send(app(db), request(Method::DELETE, "/cars/999", Some(&auth), None)).await;

    assert_eq!(status, StatusCode::OK);

    Ok(())
}

/// Tests deleting as a non-admin user.
///
/// Expected: 403 and the car still stored
#[tokio::test]
async fn rejects_non_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_user(db).await?;
    let existing = create_bmw(db).await?;

    let auth = user_auth();
    let (status, _) = send(
        app(db),
        request(Method::DELETE, &format!("/cars/{}", existing.id), Some(&auth), None),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(entity::prelude::Car::find().all(db).await?, vec![existing]);

    Ok(())
}

/// Tests deleting without credentials.
///
/// Expected: 401 and the car still stored
#[tokio::test]
async fn rejects_missing_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = create_bmw(db).await?;

    let (status, _) = send(
        app(db),
        request(Method::DELETE, &format!("/cars/{}", existing.id), None, None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(entity::prelude::Car::find().all(db).await?, vec![existing]);

    Ok(())
}

/// Tests credentials are checked before the path id is parsed.
///
/// Expected: 401 rather than a path rejection
#[tokio::test]
async fn rejects_missing_credentials_before_parsing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(app(db), request(Method::DELETE, "/cars/abc", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}
