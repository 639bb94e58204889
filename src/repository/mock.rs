use mockall::mock;

use super::{ProductReader, ProductWriter, RepositoryResult};
use crate::domain::product::Product;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn upsert_product(&self, product: &Product) -> RepositoryResult<()>;
    }
}
