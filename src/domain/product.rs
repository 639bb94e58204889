use serde::{Deserialize, Serialize};

/// Domain representation of a product held by the service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub product_id: i64,
    /// Stock keeping unit identifier.
    pub sku: String,
    /// Name of the company producing the product.
    pub manufacturer: String,
    /// Identifier of the category the product belongs to.
    pub category_id: i64,
    /// Product weight in whole units.
    pub weight: i64,
    /// Auxiliary reference carried along with the product.
    pub some_other_id: i64,
}

impl Product {
    /// Build a product with the supplied identity and details.
    pub fn new(
        product_id: i64,
        sku: impl Into<String>,
        manufacturer: impl Into<String>,
        category_id: i64,
        weight: i64,
        some_other_id: i64,
    ) -> Self {
        Self {
            product_id,
            sku: sku.into(),
            manufacturer: manufacturer.into(),
            category_id,
            weight,
            some_other_id,
        }
    }
}
