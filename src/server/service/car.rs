//! Car service for business logic.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::car::CarRepository,
    error::AppError,
    model::car::{Car, SaveCarParams},
};

/// Service providing business logic for the car catalog.
pub struct CarService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    /// Creates a new CarService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a car to the catalog.
    ///
    /// Any id carried by `params` is discarded; the store assigns a fresh one.
    ///
    /// # Returns
    /// - `Ok(Car)` - The stored car with its assigned id
    /// - `Err(AppError::Conflict)` - Another car already uses the licence plate
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: SaveCarParams) -> Result<Car, AppError> {
        let car_repo = CarRepository::new(self.db);

        let licence_plate = params.licence_plate.clone();
        let car = car_repo
            .save(params.with_id(None))
            .await
            .map_err(|e| map_save_error(e, &licence_plate))?;

        tracing::info!("Created car {} ({})", car.id, car.licence_plate);

        Ok(car)
    }

    /// Overwrites the car with the given id.
    ///
    /// The `id` argument is authoritative; any id inside `params` is ignored. A missing
    /// target is a bad request rather than a not-found, unlike `get_by_id`.
    ///
    /// # Returns
    /// - `Ok(Car)` - The updated car
    /// - `Err(AppError::BadRequest)` - No car with that id exists
    /// - `Err(AppError::Conflict)` - Another car already uses the licence plate
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, params: SaveCarParams) -> Result<Car, AppError> {
        let car_repo = CarRepository::new(self.db);

        if car_repo.find_by_id(id).await?.is_none() {
            return Err(car_does_not_exist(id));
        }

        let licence_plate = params.licence_plate.clone();
        let car = car_repo
            .save(params.with_id(Some(id)))
            .await
            .map_err(|e| match e {
                // Deleted between the existence check and the write
                DbErr::RecordNotUpdated => car_does_not_exist(id),
                e => map_save_error(e, &licence_plate),
            })?;

        tracing::info!("Updated car {} ({})", car.id, car.licence_plate);

        Ok(car)
    }

    /// Gets every car in the catalog.
    pub async fn get_all(&self) -> Result<Vec<Car>, AppError> {
        let car_repo = CarRepository::new(self.db);
        Ok(car_repo.find_all().await?)
    }

    /// Gets a car by id.
    ///
    /// # Returns
    /// - `Ok(Car)` - The car
    /// - `Err(AppError::NotFound)` - No car with that id exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Car, AppError> {
        let car_repo = CarRepository::new(self.db);

        car_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car {} not found", id)))
    }

    /// Gets the cars whose brand matches `brand` exactly (case-sensitive).
    pub async fn filter_by_brand(&self, brand: &str) -> Result<Vec<Car>, AppError> {
        let car_repo = CarRepository::new(self.db);
        Ok(car_repo.find_by_brand(brand).await?)
    }

    /// Removes a car from the catalog. Removing an unknown id is a no-op.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let car_repo = CarRepository::new(self.db);
        car_repo.delete_by_id(id).await?;

        tracing::info!("Deleted car {}", id);

        Ok(())
    }
}

fn car_does_not_exist(id: i32) -> AppError {
    AppError::BadRequest(format!("Car {} does not exist", id))
}

/// Maps a unique violation on the licence plate to `Conflict`, passing other errors through.
fn map_save_error(err: DbErr, licence_plate: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(format!(
            "A car with licence plate {} already exists",
            licence_plate
        )),
        _ => AppError::DbErr(err),
    }
}
