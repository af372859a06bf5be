use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder};
use actix_web_lab::respond::Html;
use chrono::{DateTime, Local};
use database::{
    consts::consts::EntityId,
    model::person::{NumberUpdate, PersonFields},
    store::PersonStore,
    validation::{require_fields, require_number},
};

use crate::error::ApiError;

/// Registers every route and the JSON body error handler
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Bodies are read as JSON whatever content type the client declared
    let json_config = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req: &HttpRequest| ApiError::MalformedBody(err.to_string()).into());

    cfg.app_data(json_config)
        .service(banner)
        .service(info)
        .service(list_persons)
        .service(get_person)
        .service(create_person)
        .service(update_person)
        .service(delete_person);
}

#[get("/")]
async fn banner() -> impl Responder {
    Html("<h1>Phonebook Backend App</h1>".to_string())
}

#[get("/info")]
async fn info(store: web::Data<PersonStore>) -> Result<impl Responder, ApiError> {
    let count = store.count().await?;

    Ok(Html(info_page(count, Local::now())))
}

fn info_page(count: usize, now: DateTime<Local>) -> String {
    format!(
        "<div>Phonebook has info for {} people</div>\n<div>{}</div>",
        count,
        now.format("%a %b %d %Y %H:%M:%S GMT%z")
    )
}

#[get("/api/persons")]
async fn list_persons(store: web::Data<PersonStore>) -> Result<HttpResponse, ApiError> {
    let persons = store.list().await?;

    Ok(HttpResponse::Ok().json(persons))
}

#[get("/api/persons/{id}")]
async fn get_person(
    store: web::Data<PersonStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    match store.get_by_id(EntityId(id.into_inner())).await? {
        Some(person) => Ok(HttpResponse::Ok().json(person)),
        None => Err(ApiError::NotFound),
    }
}

#[post("/api/persons")]
async fn create_person(
    store: web::Data<PersonStore>,
    body: web::Json<PersonFields>,
) -> Result<HttpResponse, ApiError> {
    let fields = body.into_inner();

    log::info!(
        "POST /api/persons {}",
        serde_json::to_string(&fields).unwrap_or_default()
    );

    let new_person = require_fields(fields)?;

    let person = store.create(new_person).await?;

    Ok(HttpResponse::Ok().json(person))
}

#[put("/api/persons/{id}")]
async fn update_person(
    store: web::Data<PersonStore>,
    id: web::Path<String>,
    body: web::Json<NumberUpdate>,
) -> Result<HttpResponse, ApiError> {
    let number = require_number(body.into_inner())?;

    match store
        .update_number(EntityId(id.into_inner()), number)
        .await?
    {
        Some(person) => Ok(HttpResponse::Ok().json(person)),
        None => Err(ApiError::NotFound),
    }
}

#[delete("/api/persons/{id}")]
async fn delete_person(
    store: web::Data<PersonStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    store.delete_by_id(EntityId(id.into_inner())).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Fallback for anything no route matched
pub async fn unknown_endpoint() -> Result<HttpResponse, ApiError> {
    Err(ApiError::UnknownEndpoint)
}
