use super::*;

/// Tests creating a user and the username uniqueness conflict.
///
/// Expected: 201, then 409
#[tokio::test]
async fn creates_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let server = test_server(test.db.as_ref().unwrap());

    let body = json!({ "username": "road_runner" });

    let response = server.post("/api/users").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    let user: Value = response.json();
    assert_eq!(user["username"], json!("road_runner"));
    assert_eq!(user["favoriteCarIds"], json!([]));
    assert_eq!(user["orderIds"], json!([]));

    let response = server.post("/api/users").json(&body).await;
    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({ "status": 409, "message": "Username already exists" }));

    Ok(())
}

/// Tests the favorite-car endpoints end to end.
///
/// Expected: 201, 409 on repeat, 204, then 404 on repeat
#[tokio::test]
async fn manages_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = test_server(db);

    let (_, car) = factory::helpers::create_car_with_dealer(db).await?;
    let user = factory::create_user(db).await?;
    let path = format!("/api/users/{}/favorite-cars/{}", user.id, car.id);

    server.post(&path).await.assert_status(StatusCode::CREATED);
    server.post(&path).await.assert_status(StatusCode::CONFLICT);

    let fetched: Value = server.get(&format!("/api/users/{}", user.id)).await.json();
    assert_eq!(fetched["favoriteCarIds"], json!([car.id]));

    let car_body: Value = server.get(&format!("/api/cars/{}", car.id)).await.json();
    assert_eq!(car_body["userIdsWhoFavorited"], json!([user.id]));

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);

    let response = server.delete(&path).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({
        "status": 404,
        "message": "Car is not in user's favorites"
    }));

    Ok(())
}

/// Tests deleting a user with an order.
///
/// Expected: 204 and the order is gone
#[tokio::test]
async fn delete_removes_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_dealership_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let server = test_server(db);

    let (user, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    server
        .delete(&format!("/api/users/{}", user.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/orders/{}", order.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    Ok(())
}
