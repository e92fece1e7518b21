use crate::handlers::client_api_handler::*;
use crate::handlers::common_handler::*;
use actix_web::{HttpResponse, get, web};
use biz_service::entitys::client_entity::{ClientAddDto, ClientInfo};
use biz_service::entitys::meal_entity::{MealInfo, NutrientEntry};
use common::errors::AppError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        status,
        client_list,
        client_detail,
        client_add,
    ),
    components(schemas(
        ClientInfo,
        ClientAddDto,
        ClientIdDto,
        MealInfo,
        NutrientEntry,
    )),
    tags(
        (name = "Common", description = "Service endpoints"),
        (name = "Client", description = "Client registry")
    )
)]
struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
#[get("/openapi.json")]
async fn openapi_json() -> Result<HttpResponse, AppError> {
    let doc = ApiDoc::openapi().to_json()?;
    Ok(HttpResponse::Ok().content_type("application/json").body(doc))
}
