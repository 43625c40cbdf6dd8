use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarColor {
    #[sea_orm(string_value = "BLACK")]
    Black,
    #[sea_orm(string_value = "WHITE")]
    White,
    #[sea_orm(string_value = "SILVER")]
    Silver,
    #[sea_orm(string_value = "GREY")]
    Grey,
    #[sea_orm(string_value = "RED")]
    Red,
    #[sea_orm(string_value = "BLUE")]
    Blue,
    #[sea_orm(string_value = "GREEN")]
    Green,
    #[sea_orm(string_value = "YELLOW")]
    Yellow,
    #[sea_orm(string_value = "PINK")]
    Pink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarType {
    #[sea_orm(string_value = "HATCHBACK")]
    Hatchback,
    #[sea_orm(string_value = "SEDAN")]
    Sedan,
    #[sea_orm(string_value = "COMBI")]
    Combi,
    #[sea_orm(string_value = "SUV")]
    Suv,
    #[sea_orm(string_value = "COUPE")]
    Coupe,
    #[sea_orm(string_value = "CABRIO")]
    Cabrio,
    #[sea_orm(string_value = "VAN")]
    Van,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "USER")]
    User,
}
