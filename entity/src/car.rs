use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{CarColor, CarType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand: String,
    pub year: i16,
    #[sea_orm(unique)]
    pub licence_plate: String,
    pub color: CarColor,
    #[sea_orm(column_name = "type")]
    pub car_type: CarType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
