//! In-memory repository double shared by use case and handler tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::{ProductRepository, RatingRepository};
use crate::domain::models::{
    Page, Product, ProductData, ProductId, Rating, RatingData, RatingId,
};
use crate::shared::errors::RepositoryError;

const RATINGS_PRODUCT_FKEY: &str = "ratings_product_id_fkey";

#[derive(Default)]
struct Tables {
    products: BTreeMap<ProductId, Product>,
    ratings: BTreeMap<RatingId, Rating>,
    product_seq: i32,
    rating_seq: i32,
}

/// Implements both gateways over two ordered maps, enforcing the
/// ratings -> products reference like the real schema does.
#[derive(Default)]
pub(crate) struct InMemoryRepository {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl InMemoryRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the pool were exhausted
    pub(crate) fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    pub(crate) fn with_products(self, count: usize) -> Self {
        for i in 0..count {
            let price = rust_decimal::Decimal::from((i + 1) * 10);
            let data = ProductData::new(format!("Product {i}"), price);
            self.insert_product(&data);
        }
        self
    }

    pub(crate) fn with_ratings(self, product_id: i32, count: usize) -> Self {
        for i in 0..count {
            let data = RatingData {
                product_id: ProductId::new(product_id),
                rating: i32::try_from(i).unwrap(),
                text: Some("Static rating text...".to_string()),
            };
            self.insert_rating(&data).unwrap();
        }
        self
    }

    pub(crate) fn product_count(&self) -> usize {
        self.tables.lock().unwrap().products.len()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn insert_product(&self, data: &ProductData) -> Product {
        let mut tables = self.tables.lock().unwrap();
        tables.product_seq += 1;
        let product = Product::restore(ProductId::new(tables.product_seq), data.clone());
        tables.products.insert(product.id(), product.clone());
        product
    }

    fn insert_rating(&self, data: &RatingData) -> Result<Rating, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.products.contains_key(&data.product_id) {
            return Err(RepositoryError::ForeignKeyViolation(
                RATINGS_PRODUCT_FKEY.to_string(),
            ));
        }
        tables.rating_seq += 1;
        let rating = Rating::restore(RatingId::new(tables.rating_seq), data.clone());
        tables.ratings.insert(rating.id(), rating.clone());
        Ok(rating)
    }
}

fn window<T: Clone>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    let start = usize::try_from(page.start()).unwrap_or(usize::MAX);
    let count = usize::try_from(page.count()).unwrap_or(0);
    items.skip(start).take(count).collect()
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn create(&self, data: &ProductData) -> Result<Product, RepositoryError> {
        self.check_available()?;
        Ok(self.insert_product(data))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        self.check_available()?;
        Ok(self.tables.lock().unwrap().products.get(&id).cloned())
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Product>, RepositoryError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(window(tables.products.values().cloned(), page))
    }

    async fn update(&self, product: &Product) -> Result<bool, RepositoryError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        match tables.products.get_mut(&product.id()) {
            Some(existing) => {
                *existing = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.ratings.values().any(|r| r.product_id() == id) {
            return Err(RepositoryError::ForeignKeyViolation(
                RATINGS_PRODUCT_FKEY.to_string(),
            ));
        }
        Ok(tables.products.remove(&id).is_some())
    }
}

#[async_trait]
impl RatingRepository for InMemoryRepository {
    async fn create(&self, data: &RatingData) -> Result<Rating, RepositoryError> {
        self.check_available()?;
        self.insert_rating(data)
    }

    async fn find_by_id(&self, id: RatingId) -> Result<Option<Rating>, RepositoryError> {
        self.check_available()?;
        Ok(self.tables.lock().unwrap().ratings.get(&id).cloned())
    }

    async fn find_page_for_product(
        &self,
        product_id: ProductId,
        page: Page,
    ) -> Result<Vec<Rating>, RepositoryError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        let matching = tables
            .ratings
            .values()
            .filter(|r| r.product_id() == product_id)
            .cloned();
        Ok(window(matching, page))
    }

    async fn update(&self, rating: &Rating) -> Result<bool, RepositoryError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();
        // An update that matches no row never reaches the constraint
        if !tables.ratings.contains_key(&rating.id()) {
            return Ok(false);
        }
        if !tables.products.contains_key(&rating.product_id()) {
            return Err(RepositoryError::ForeignKeyViolation(
                RATINGS_PRODUCT_FKEY.to_string(),
            ));
        }
        tables.ratings.insert(rating.id(), rating.clone());
        Ok(true)
    }

    async fn delete(&self, id: RatingId) -> Result<bool, RepositoryError> {
        self.check_available()?;
        Ok(self.tables.lock().unwrap().ratings.remove(&id).is_some())
    }
}
