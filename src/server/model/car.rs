//! Car domain model and save parameters.

use entity::sea_orm_active_enums::{CarColor, CarType};

use crate::model::car::CarDto;

/// A persisted car in the rental catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    /// Store-assigned identifier, immutable once assigned.
    pub id: i32,
    pub brand: String,
    pub year: i16,
    /// Registration plate, unique across the catalog.
    pub licence_plate: String,
    pub color: CarColor,
    pub car_type: CarType,
}

impl Car {
    /// Converts the car domain model to a DTO for API responses.
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: Some(self.id),
            brand: self.brand,
            year: self.year,
            licence_plate: self.licence_plate,
            color: self.color,
            car_type: self.car_type,
        }
    }

    /// Converts an entity model to a car domain model at the repository boundary.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.id,
            brand: entity.brand,
            year: entity.year,
            licence_plate: entity.licence_plate,
            color: entity.color,
            car_type: entity.car_type,
        }
    }
}

/// Parameters for persisting a car.
///
/// `id: None` inserts a new row and lets the store assign the id; `Some(id)` overwrites
/// every other column of the row with that id.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveCarParams {
    pub id: Option<i32>,
    pub brand: String,
    pub year: i16,
    pub licence_plate: String,
    pub color: CarColor,
    pub car_type: CarType,
}

impl SaveCarParams {
    /// Builds save parameters from a request body.
    ///
    /// The body id is dropped: creates get a store-assigned id and updates take the id
    /// from the request path.
    pub fn from_dto(dto: CarDto) -> Self {
        Self {
            id: None,
            brand: dto.brand,
            year: dto.year,
            licence_plate: dto.licence_plate,
            color: dto.color,
            car_type: dto.car_type,
        }
    }

    /// Returns the same parameters targeting the given id.
    pub fn with_id(mut self, id: Option<i32>) -> Self {
        self.id = id;
        self
    }
}
