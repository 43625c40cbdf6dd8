use crate::server::{data::car::CarRepository, model::car::SaveCarParams};
use entity::sea_orm_active_enums::{CarColor, CarType};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod save;

fn car_params(brand: &str, licence_plate: &str) -> SaveCarParams {
    SaveCarParams {
        id: None,
        brand: brand.to_string(),
        year: 1999,
        licence_plate: licence_plate.to_string(),
        color: CarColor::Black,
        car_type: CarType::Hatchback,
    }
}
