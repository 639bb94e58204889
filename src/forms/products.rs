use serde::Deserialize;
use thiserror::Error;
use validator::{ValidateLength, ValidateRange};

use crate::domain::product::Product;

/// Maximum allowed length for a SKU.
const SKU_MAX_LEN: u64 = 100;

/// Maximum allowed length for a manufacturer name.
const MANUFACTURER_MAX_LEN: u64 = 200;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product requests.
///
/// Messages are returned to API clients verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductFormError {
    #[error("productId path parameter is required")]
    MissingProductId,
    #[error("productId must be an integer")]
    NonIntegerProductId,
    #[error("productId must be a positive integer")]
    NonPositiveProductId,
    /// The request body is not a JSON product object.
    #[error("Invalid JSON payload")]
    InvalidPayload,
    #[error("product_id in the body must match the productId path parameter")]
    ProductIdMismatch,
    #[error("sku is required")]
    MissingSku,
    #[error("sku must be 100 characters or fewer")]
    SkuTooLong,
    #[error("manufacturer is required")]
    MissingManufacturer,
    #[error("manufacturer must be 200 characters or fewer")]
    ManufacturerTooLong,
    #[error("category_id must be a positive integer")]
    InvalidCategoryId,
    #[error("weight must be zero or a positive integer")]
    InvalidWeight,
    #[error("some_other_id must be a positive integer")]
    InvalidSomeOtherId,
}

/// Body of `POST /products/{product_id}/details`.
///
/// Absent fields decode to their zero value so that they fail validation
/// with a field-specific message instead of a generic decoding error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    pub product_id: i64,
    pub sku: String,
    pub manufacturer: String,
    pub category_id: i64,
    pub weight: i64,
    pub some_other_id: i64,
}

impl ProductPayload {
    /// Validates the payload against the identifier taken from the path and
    /// converts it into a domain `Product`.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn into_product(self, path_id: i64) -> ProductFormResult<Product> {
        if self.product_id != path_id {
            return Err(ProductFormError::ProductIdMismatch);
        }

        if self.sku.is_empty() {
            return Err(ProductFormError::MissingSku);
        }
        if !self.sku.validate_length(None, Some(SKU_MAX_LEN), None) {
            return Err(ProductFormError::SkuTooLong);
        }

        if self.manufacturer.is_empty() {
            return Err(ProductFormError::MissingManufacturer);
        }
        if !self
            .manufacturer
            .validate_length(None, Some(MANUFACTURER_MAX_LEN), None)
        {
            return Err(ProductFormError::ManufacturerTooLong);
        }

        if !self.category_id.validate_range(Some(1), None, None, None) {
            return Err(ProductFormError::InvalidCategoryId);
        }

        if !self.weight.validate_range(Some(0), None, None, None) {
            return Err(ProductFormError::InvalidWeight);
        }

        if !self.some_other_id.validate_range(Some(1), None, None, None) {
            return Err(ProductFormError::InvalidSomeOtherId);
        }

        Ok(Product {
            product_id: self.product_id,
            sku: self.sku,
            manufacturer: self.manufacturer,
            category_id: self.category_id,
            weight: self.weight,
            some_other_id: self.some_other_id,
        })
    }
}

/// Decode the first JSON value of a raw request body into a `ProductPayload`.
///
/// Data following that value is ignored and a `null` body decodes to an
/// all-zero payload, which then fails validation.
pub fn decode_payload(body: &[u8]) -> ProductFormResult<ProductPayload> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<ProductPayload>>();

    match values.next() {
        Some(Ok(payload)) => Ok(payload.unwrap_or_default()),
        Some(Err(err)) => {
            log::debug!("Rejected product payload: {err}");
            Err(ProductFormError::InvalidPayload)
        }
        None => Err(ProductFormError::InvalidPayload),
    }
}

/// Parse the `product_id` path segment into a positive identifier.
pub fn parse_product_id(raw: &str) -> ProductFormResult<i64> {
    if raw.is_empty() {
        return Err(ProductFormError::MissingProductId);
    }

    let id = raw
        .parse::<i64>()
        .map_err(|_| ProductFormError::NonIntegerProductId)?;

    if id < 1 {
        return Err(ProductFormError::NonPositiveProductId);
    }

    Ok(id)
}
