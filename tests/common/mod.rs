//! Helpers for integration tests.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::error::Error as WebError;
use actix_web::{App, test, web};

use product_service::repository::InMemoryRepository;
use product_service::routes;

pub const SAMPLE_BODY: &str = r#"{"product_id":5,"sku":"X1","manufacturer":"Acme","category_id":2,"weight":10,"some_other_id":3}"#;

/// Build the application service backed by the given repository.
pub async fn init_app(
    repo: InMemoryRepository,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = WebError> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(routes::configure),
    )
    .await
}
