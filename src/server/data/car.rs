//! Car data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::car::{Car, SaveCarParams};

/// Repository providing database operations for the car catalog.
pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    /// Creates a new CarRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or overwrites a car.
    ///
    /// Inserts a new row when `params.id` is `None`, letting the database assign the id.
    /// Otherwise every column except the id is overwritten on the row with that id.
    ///
    /// # Arguments
    /// - `params` - Car fields and optional target id
    ///
    /// # Returns
    /// - `Ok(Car)` - The stored car, including its id
    /// - `Err(DbErr::RecordNotUpdated)` - `params.id` matches no row
    /// - `Err(DbErr)` - Other database error, including unique violations on the plate
    pub async fn save(&self, params: SaveCarParams) -> Result<Car, DbErr> {
        let mut active_model = entity::car::ActiveModel {
            brand: ActiveValue::Set(params.brand),
            year: ActiveValue::Set(params.year),
            licence_plate: ActiveValue::Set(params.licence_plate),
            color: ActiveValue::Set(params.color),
            car_type: ActiveValue::Set(params.car_type),
            ..Default::default()
        };

        let entity = match params.id {
            None => active_model.insert(self.db).await?,
            Some(id) => {
                active_model.id = ActiveValue::Unchanged(id);
                active_model.update(self.db).await?
            }
        };

        Ok(Car::from_entity(entity))
    }

    /// Gets every car ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Car>, DbErr> {
        let entities = entity::prelude::Car::find()
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Finds a car by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Car found
    /// - `Ok(None)` - No car with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Gets all cars whose brand equals `brand` exactly, ordered by id.
    ///
    /// The comparison is case-sensitive: `"bmw"` does not match `"BMW"`.
    pub async fn find_by_brand(&self, brand: &str) -> Result<Vec<Car>, DbErr> {
        let entities = entity::prelude::Car::find()
            .filter(entity::car::Column::Brand.eq(brand))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Deletes a car by id. Deleting an id that does not exist succeeds.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Car::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Deletes every car. Used to reset the catalog between tests.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    /// - `Err(DbErr)` - Database error
    #[cfg(test)]
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Car::delete_many().exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
