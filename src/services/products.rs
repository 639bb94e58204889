use crate::domain::product::Product;
use crate::forms::products::{decode_payload, parse_product_id};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads a single product addressed by the raw `product_id` path segment.
pub fn get_product<R>(repo: &R, raw_id: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let product_id = parse_product_id(raw_id)?;

    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates or replaces the product addressed by the raw `product_id` path
/// segment using the JSON request body.
pub fn upsert_product<R>(repo: &R, raw_id: &str, body: &[u8]) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let product_id = parse_product_id(raw_id)?;
    let product = decode_payload(body)?.into_product(product_id)?;

    repo.upsert_product(&product).map_err(ServiceError::from)?;
    log::debug!("Stored product {product_id}");

    Ok(())
}
