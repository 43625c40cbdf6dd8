use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        car::CarDto,
    },
    server::{
        controller::{
            car::{
                self, create_car, delete_car, filter_cars_by_brand, get_all_cars, get_car_by_id,
                update_car,
            },
            health,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        car::create_car,
        car::update_car,
        car::get_all_cars,
        car::get_car_by_id,
        car::filter_cars_by_brand,
        car::delete_car,
    ),
    components(schemas(CarDto, ErrorDto, HealthDto)),
    modifiers(&BasicAuthScheme),
    tags(
        (name = "cars", description = "Car rental catalog"),
        (name = "system", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;

struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/cars", get(get_all_cars).post(create_car))
        .route("/cars/filter", get(filter_cars_by_brand))
        .route(
            "/cars/{id}",
            get(get_car_by_id)
                .patch(update_car)
                .put(update_car)
                .delete(delete_car),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
