use actix_web::error::BlockingError;
use actix_web::web::{self, Data, Json};
use actix_web::{HttpResponse, ResponseError};
use err_derive::Error;
use serde::Serialize;

use super::models::{Product, Sku};
use super::ProductStore;

/// Errors crossing the HTTP boundary. There is no domain taxonomy:
/// everything renders as the framework-default 500.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(display = "storage error: {}", _0)]
    Storage(anyhow::Error),
    #[error(display = "handler canceled")]
    Canceled,
}

impl From<anyhow::Error> for ResourceError {
    fn from(e: anyhow::Error) -> Self {
        ResourceError::Storage(e)
    }
}

impl From<BlockingError> for ResourceError {
    fn from(_: BlockingError) -> Self {
        ResourceError::Canceled
    }
}

impl ResponseError for ResourceError {}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

/// Mounts the catalog resources under `/api`.
pub fn configure<S>(store: S, cfg: &mut web::ServiceConfig)
where
    S: ProductStore + Send + Sync + 'static,
{
    cfg.app_data(Data::new(store)).service(
        web::scope("/api")
            .service(
                web::scope("/products")
                    .route("", web::get().to(index::<S>))
                    .route("", web::post().to(create::<S>))
                    .route("/{sku}", web::get().to(detail::<S>))
                    .route("/{sku}", web::delete().to(remove::<S>)),
            )
            .route("/health", web::get().to(health::<S>)),
    );
}

async fn index<S>(store: Data<S>) -> Result<HttpResponse, ResourceError>
where
    S: ProductStore + Send + Sync + 'static,
{
    let store = store.into_inner();
    let products = web::block(move || store.find_all()).await??;
    Ok(HttpResponse::Ok().json(products))
}

async fn detail<S>(store: Data<S>, path: web::Path<Sku>) -> Result<HttpResponse, ResourceError>
where
    S: ProductStore + Send + Sync + 'static,
{
    let sku = path.into_inner();
    let store = store.into_inner();
    match web::block(move || store.find(&sku)).await?? {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        // An absent record answers with a 200 and a JSON null, not a 404.
        None => Ok(HttpResponse::Ok().json(serde_json::Value::Null)),
    }
}

async fn create<S>(store: Data<S>, body: Json<Product>) -> Result<HttpResponse, ResourceError>
where
    S: ProductStore + Send + Sync + 'static,
{
    let product = body.into_inner();
    let store = store.into_inner();
    let saved = web::block(move || store.save(product)).await??;
    Ok(HttpResponse::Ok().json(saved))
}

async fn remove<S>(store: Data<S>, path: web::Path<Sku>) -> Result<HttpResponse, ResourceError>
where
    S: ProductStore + Send + Sync + 'static,
{
    let sku = path.into_inner();
    let store = store.into_inner();
    web::block(move || store.delete(&sku)).await??;
    Ok(HttpResponse::Ok().finish())
}

async fn health<S>(store: Data<S>) -> Result<HttpResponse, ResourceError>
where
    S: ProductStore + Send + Sync + 'static,
{
    let store = store.into_inner();
    web::block(move || store.find_all()).await??;
    Ok(HttpResponse::Ok().json(Health { status: "success" }))
}
