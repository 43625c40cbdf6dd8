use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, car::CarDto},
    server::{
        controller::extract::{JsonBody, PathParam, QueryParams},
        error::AppError,
        middleware::auth::AdminUser,
        model::car::SaveCarParams,
        service::car::CarService,
        state::AppState,
    },
};

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BrandFilterQuery {
    /// Brand to match exactly, case-sensitive
    pub brand_name: String,
}

/// POST /cars - Add a car to the catalog
///
/// # Authentication
/// Requires Basic credentials of an admin user
///
/// # Returns
/// - `200 OK`: The stored car with its assigned id
/// - `401 Unauthorized` / `403 Forbidden`: Missing credentials or non-admin user
/// - `409 Conflict`: Licence plate already registered
#[utoipa::path(
    post,
    path = "/cars",
    tag = "cars",
    request_body = CarDto,
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Car created", body = CarDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Licence plate already registered", body = ErrorDto)
    )
)]
pub async fn create_car(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    JsonBody(dto): JsonBody<CarDto>,
) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db);
    let car = car_service.create(SaveCarParams::from_dto(dto)).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// PATCH /cars/{id} - Overwrite a car
///
/// Also routed for PUT. The path id wins over any id in the body. A missing car is a
/// 400, not a 404.
///
/// # Authentication
/// Requires Basic credentials of an admin user
///
/// # Returns
/// - `200 OK`: The updated car
/// - `400 Bad Request`: No car with that id
/// - `409 Conflict`: Licence plate belongs to another car
#[utoipa::path(
    patch,
    path = "/cars/{id}",
    tag = "cars",
    params(("id" = i32, Path, description = "Car id")),
    request_body = CarDto,
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Car updated", body = CarDto),
        (status = 400, description = "Car does not exist", body = ErrorDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Licence plate already registered", body = ErrorDto)
    )
)]
pub async fn update_car(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    PathParam(id): PathParam<i32>,
    JsonBody(dto): JsonBody<CarDto>,
) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db);
    let car = car_service
        .update(id, SaveCarParams::from_dto(dto))
        .await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// GET /cars - List every car
///
/// # Authentication
/// None
#[utoipa::path(
    get,
    path = "/cars",
    tag = "cars",
    responses((status = 200, description = "All cars", body = [CarDto]))
)]
pub async fn get_all_cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db);
    let cars: Vec<CarDto> = car_service
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(cars)))
}

/// GET /cars/{id} - Get a single car
///
/// # Authentication
/// Requires Basic credentials of an admin user
///
/// # Returns
/// - `200 OK`: The car
/// - `404 Not Found`: No car with that id
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = "cars",
    params(("id" = i32, Path, description = "Car id")),
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Car found", body = CarDto),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto)
    )
)]
pub async fn get_car_by_id(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db);
    let car = car_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(car.into_dto())))
}

/// GET /cars/filter?brandName= - List cars of one brand
///
/// # Authentication
/// None
///
/// # Returns
/// - `200 OK`: Matching cars, possibly empty
/// - `400 Bad Request`: `brandName` query parameter missing
#[utoipa::path(
    get,
    path = "/cars/filter",
    tag = "cars",
    params(BrandFilterQuery),
    responses(
        (status = 200, description = "Cars of the brand", body = [CarDto]),
        (status = 400, description = "brandName missing", body = ErrorDto)
    )
)]
pub async fn filter_cars_by_brand(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BrandFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db);
    let cars: Vec<CarDto> = car_service
        .filter_by_brand(&query.brand_name)
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(cars)))
}

/// DELETE /cars/{id} - Remove a car
///
/// Deleting an unknown id still answers 200.
///
/// # Authentication
/// Requires Basic credentials of an admin user
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = "cars",
    params(("id" = i32, Path, description = "Car id")),
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Car removed"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto)
    )
)]
pub async fn delete_car(
    State(state): State<AppState>,
    AdminUser(_user): AdminUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car_service = CarService::new(&state.db);
    car_service.delete(id).await?;

    Ok(StatusCode::OK)
}
