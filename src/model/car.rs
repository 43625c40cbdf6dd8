use entity::sea_orm_active_enums::{CarColor, CarType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Car as sent and received over the API.
///
/// `id` is ignored on create and update requests, where the store or the request path
/// decides it, and is always present in responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: Option<i32>,
    pub brand: String,
    pub year: i16,
    pub licence_plate: String,
    #[schema(value_type = String, example = "BLACK")]
    pub color: CarColor,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "HATCHBACK")]
    pub car_type: CarType,
}
