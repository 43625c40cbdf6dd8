use super::*;

/// Tests fetching a car as admin.
///
/// Expected: 200 with the car
#[tokio::test]
async fn gets_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_admin(db).await?;
    let existing = create_bmw(db).await?;

    let auth = admin_auth();
    let (status, body) = send(
        app(db),
        request(Method::GET, &format!("/cars/{}", existing.id), Some(&auth), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": existing.id,
            "brand": "BMW",
            "year": 1999,
            "licencePlate": "4H44444",
            "color": "BLACK",
            "type": "HATCHBACK"
        })
    );

    Ok(())
}

/// Tests fetching an id with no car.
///
/// Expected: 404
#[tokio::test]
async fn returns_not_found_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_admin(db).await?;

    let auth = admin_auth();
    let (status, body) = send(app(db), request(Method::GET, "/cars/999", Some(&auth), None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests fetching without credentials.
///
/// Expected: 401
#[tokio::test]
async fn rejects_missing_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = create_bmw(db).await?;

    let (status, _) = send(
        app(db),
        request(Method::GET, &format!("/cars/{}", existing.id), None, None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests fetching as a non-admin user.
///
/// Expected: 403
#[tokio::test]
async fn rejects_non_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_user(db).await?;
    let existing = create_bmw(db).await?;

    let auth = user_auth();
    let (status, body) = send(
        app(db),
        request(Method::GET, &format!("/cars/{}", existing.id), Some(&auth), None),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());

    Ok(())
}
