//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{CarColor, CarType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db)
///     .brand("BMW")
///     .licence_plate("4H44444")
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    brand: String,
    year: i16,
    licence_plate: String,
    color: CarColor,
    car_type: CarType,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - brand: `"Skoda"`
    /// - year: `2015`
    /// - licence_plate: `"T{id:06}"` where id is auto-incremented
    /// - color: `CarColor::Black`
    /// - car_type: `CarType::Hatchback`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            brand: "Skoda".to_string(),
            year: 2015,
            licence_plate: format!("T{:06}", id),
            color: CarColor::Black,
            car_type: CarType::Hatchback,
        }
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn year(mut self, year: i16) -> Self {
        self.year = year;
        self
    }

    pub fn licence_plate(mut self, licence_plate: impl Into<String>) -> Self {
        self.licence_plate = licence_plate.into();
        self
    }

    pub fn color(mut self, color: CarColor) -> Self {
        self.color = color;
        self
    }

    pub fn car_type(mut self, car_type: CarType) -> Self {
        self.car_type = car_type;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            brand: ActiveValue::Set(self.brand),
            year: ActiveValue::Set(self.year),
            licence_plate: ActiveValue::Set(self.licence_plate),
            color: ActiveValue::Set(self.color),
            car_type: ActiveValue::Set(self.car_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
