use crate::result::{result_data, result_list};
use actix_web::{Responder, get, post, web};
use biz_service::biz_services::client_service::ClientService;
use biz_service::entitys::client_entity::{ClientAddDto, ClientInfo};
use common::ClientId;
use common::errors::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(client_list);
    cfg.service(client_add);
    cfg.service(client_detail);
}

#[derive(Deserialize, Debug)]
pub struct ClientQueryDto {
    pub query: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone)]
pub struct ClientIdDto {
    #[schema(value_type = u64)]
    pub id: ClientId,
}

#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Client",
    summary = "List clients, optionally filtered by name",
    params(
        ("query" = Option<String>, Query, description = "Case-insensitive name filter")
    ),
    responses(
        (status = 200, description = "Clients in registration order", body = Vec<ClientInfo>)
    )
)]
#[get("/api/clients")]
pub async fn client_list(dto: web::Query<ClientQueryDto>, client_service: web::Data<ClientService>) -> Result<impl Responder, AppError> {
    let clients = client_service.search(dto.query.as_deref().unwrap_or_default()).await?;
    Ok(web::Json(result_list(clients)))
}

#[utoipa::path(
    get,
    path = "/api/clients/{client_id}",
    tag = "Client",
    summary = "Client detail with meal history",
    params(
        ("client_id" = u64, Path, description = "Client id")
    ),
    responses(
        (status = 200, description = "Client found", body = ClientInfo),
        (status = 404, description = "Client not found")
    )
)]
#[get("/api/clients/{client_id}")]
pub async fn client_detail(client_id: web::Path<ClientId>, client_service: web::Data<ClientService>) -> Result<impl Responder, AppError> {
    let client = client_service.find_by_id(client_id.into_inner()).await?.ok_or_else(AppError::client_not_found)?;
    Ok(web::Json(result_data(client)))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Client",
    summary = "Register a client",
    request_body = ClientAddDto,
    responses(
        (status = 200, description = "Id of the new client", body = ClientIdDto)
    )
)]
#[post("/api/clients")]
pub async fn client_add(dto: web::Json<ClientAddDto>, client_service: web::Data<ClientService>) -> Result<impl Responder, AppError> {
    let id = client_service.add(dto.into_inner()).await?;
    Ok(web::Json(result_data(ClientIdDto { id })))
}
