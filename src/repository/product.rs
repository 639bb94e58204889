use crate::{
    domain::product::Product,
    repository::{
        InMemoryRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
    },
};

impl ProductReader for InMemoryRepository {
    fn get_product_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        Ok(products.get(&id).cloned())
    }
}

impl ProductWriter for InMemoryRepository {
    fn upsert_product(&self, product: &Product) -> RepositoryResult<()> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;

        products.insert(product.product_id, product.clone());
        Ok(())
    }
}

impl InMemoryRepository {
    /// Number of products currently stored.
    pub fn len(&self) -> RepositoryResult<usize> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(products.len())
    }

    /// Whether the repository holds no products.
    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
impl InMemoryRepository {
    /// Poison the store lock by panicking while the write guard is held.
    pub(crate) fn poison_lock(&self) {
        let products = self.products.clone();
        let _ = std::thread::spawn(move || {
            let _guard = products.write();
            panic!("poisoning the product store lock");
        })
        .join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    fn sample_product(id: i64, sku: &str) -> Product {
        Product::new(id, sku, "Acme", 2, 10, 3)
    }

    #[test]
    fn upsert_then_get_returns_same_product() {
        let repo = InMemoryRepository::new();
        let product = sample_product(1, "SKU-1");

        repo.upsert_product(&product).expect("upsert");

        let stored = repo.get_product_by_id(1).expect("get");
        assert_eq!(stored, Some(product));
    }

    #[test]
    fn get_unknown_product_returns_none() {
        let repo = InMemoryRepository::new();

        assert!(repo.get_product_by_id(42).expect("get").is_none());
        assert!(repo.is_empty().expect("is_empty"));
    }

    #[test]
    fn upsert_replaces_whole_record() {
        let repo = InMemoryRepository::new();
        repo.upsert_product(&sample_product(1, "A")).expect("first upsert");

        let replacement = Product::new(1, "B", "Globex", 7, 0, 9);
        repo.upsert_product(&replacement).expect("second upsert");

        let stored = repo
            .get_product_by_id(1)
            .expect("get")
            .expect("product should exist");
        assert_eq!(stored.sku, "B");
        assert_eq!(stored, replacement);
        assert_eq!(repo.len().expect("len"), 1);
    }

    #[test]
    fn clones_share_the_same_store() {
        let repo = InMemoryRepository::new();
        let handle = repo.clone();

        handle.upsert_product(&sample_product(3, "C")).expect("upsert");

        assert!(repo.get_product_by_id(3).expect("get").is_some());
    }

    #[test]
    fn concurrent_upserts_to_distinct_ids_are_not_lost() {
        let repo = InMemoryRepository::new();
        let writers = 64;

        thread::scope(|scope| {
            for id in 1..=writers {
                let repo = repo.clone();
                scope.spawn(move || {
                    let product = sample_product(id, &format!("SKU-{id}"));
                    repo.upsert_product(&product).expect("upsert");
                    let stored = repo.get_product_by_id(id).expect("get");
                    assert_eq!(stored, Some(product));
                });
            }
        });

        assert_eq!(repo.len().expect("len"), writers as usize);
        for id in 1..=writers {
            let stored = repo
                .get_product_by_id(id)
                .expect("get")
                .expect("product should exist");
            assert_eq!(stored.sku, format!("SKU-{id}"));
        }
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let repo = InMemoryRepository::new();
        repo.poison_lock();

        assert!(matches!(
            repo.get_product_by_id(1),
            Err(RepositoryError::LockPoisoned("read"))
        ));
        assert!(matches!(
            repo.upsert_product(&sample_product(1, "A")),
            Err(RepositoryError::LockPoisoned("write"))
        ));
    }
}
