//! Product read interface and the in-memory catalog.

use crate::catalog::{Product, ProductCategory, ProductDraft};
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;
use async_trait::async_trait;

/// Longest accepted search query.
pub const MAX_QUERY_LEN: usize = 100;

/// Read interface the storefront consumes.
///
/// The hosted backend sits behind this trait; [`MemoryCatalog`] is the
/// in-process implementation used by demos and tests.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// All listed products.
    async fn all(&self) -> Result<Vec<Product>, CatalogError>;

    /// Products in one storefront section.
    async fn by_category(&self, category: ProductCategory) -> Result<Vec<Product>, CatalogError>;

    /// Products whose title or brand contains the query, case-insensitive.
    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError>;

    /// A single product, if it exists.
    async fn by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;
}

/// One page of an admin product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// Products on this page, newest first.
    pub items: Vec<Product>,
    /// Total number of matching products across all pages.
    pub total: usize,
}

/// In-memory product catalog.
///
/// Carries both the storefront read surface (via [`ProductSource`]) and the
/// admin surface: paginated listing, insert, update, remove.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    next_id: u32,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// A catalog seeded with the demo inventory.
    pub fn with_demo_inventory() -> Self {
        let products = demo_inventory();
        let next_id = products.iter().map(|p| p.id.get()).max().unwrap_or(0) + 1;
        Self { products, next_id }
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Admin listing: newest first, optionally filtered by a title/brand
    /// substring, paged with an exact total count. Pages are 1-indexed.
    pub fn list(&self, page: usize, per_page: usize, search: Option<&str>) -> ProductPage {
        let mut matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| search.map_or(true, |q| matches_query(p, q)))
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));

        let total = matching.len();
        let start = page.saturating_sub(1).saturating_mul(per_page);
        let items = matching
            .into_iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();
        ProductPage { items, total }
    }

    /// Insert a product from an admin draft, assigning the next id.
    pub fn insert(&mut self, draft: ProductDraft) -> Result<Product, CatalogError> {
        draft.validate()?;
        let id = ProductId::new(self.next_id);
        self.next_id += 1;

        let mut product = Product::new(id, draft.title, draft.price, ProductCategory::Regular);
        product.rating = draft.rating;
        product.reviews = draft.reviews;
        product.image = draft.image;
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace the draft-editable fields of an existing product.
    pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> Result<(), CatalogError> {
        draft.validate()?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        product.title = draft.title;
        product.price = draft.price;
        product.rating = draft.rating;
        product.reviews = draft.reviews;
        if draft.image.is_some() {
            product.image = draft.image;
        }
        Ok(())
    }

    /// Remove a product.
    pub fn remove(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() < before {
            Ok(())
        } else {
            Err(CatalogError::ProductNotFound(id))
        }
    }
}

#[async_trait]
impl ProductSource for MemoryCatalog {
    async fn all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn by_category(&self, category: ProductCategory) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        validate_query(query)?;
        Ok(self
            .products
            .iter()
            .filter(|p| matches_query(p, query))
            .cloned()
            .collect())
    }

    async fn by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

fn validate_query(query: &str) -> Result<(), CatalogError> {
    if query.trim().is_empty() {
        return Err(CatalogError::InvalidQuery(
            "Please enter a search term".into(),
        ));
    }
    if query.chars().count() > MAX_QUERY_LEN {
        return Err(CatalogError::InvalidQuery("Search term is too long".into()));
    }
    Ok(())
}

fn matches_query(product: &Product, query: &str) -> bool {
    let query = query.to_lowercase();
    product.title.to_lowercase().contains(&query)
        || product
            .brand
            .as_ref()
            .is_some_and(|b| b.to_lowercase().contains(&query))
}

/// The storefront's demo inventory.
pub(crate) fn demo_inventory() -> Vec<Product> {
    fn entry(
        id: u32,
        title: &str,
        brand: &str,
        price: f64,
        original_price: Option<f64>,
        rating: f64,
        reviews: u32,
        badge: Option<&str>,
        category: ProductCategory,
    ) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.into(),
            brand: Some(brand.into()),
            price: Money::from_decimal(price),
            original_price: original_price.map(Money::from_decimal),
            rating,
            reviews,
            image: None,
            badge: badge.map(Into::into),
            category,
        }
    }

    use ProductCategory::{Discount, Latest, Regular};
    vec![
        entry(1, "Air Max Pro", "Nike", 89.99, Some(159.99), 4.8, 324, Some("44% OFF"), Discount),
        entry(2, "Classic Leather", "Adidas", 59.99, Some(99.99), 4.6, 189, Some("40% OFF"), Discount),
        entry(3, "Urban Runner", "Puma", 69.99, Some(119.99), 4.7, 256, Some("42% OFF"), Discount),
        entry(4, "Street Style", "Converse", 49.99, Some(79.99), 4.5, 412, Some("38% OFF"), Discount),
        entry(5, "Future Boost 2024", "Adidas", 179.99, None, 4.9, 89, Some("NEW"), Latest),
        entry(6, "Quantum Leap", "Nike", 199.99, None, 4.8, 156, Some("NEW"), Latest),
        entry(7, "Neo Sport", "Puma", 149.99, None, 4.7, 203, Some("NEW"), Latest),
        entry(8, "Elite Runner Pro", "Under Armour", 189.99, None, 4.9, 127, Some("NEW"), Latest),
        entry(9, "Comfort Max", "Sketchers", 119.99, None, 4.6, 298, Some("NEW"), Latest),
        entry(10, "Urban Flex", "Converse", 99.99, None, 4.5, 412, Some("NEW"), Latest),
        entry(11, "Classic Stan Smith", "Adidas", 85.99, None, 4.7, 567, None, Regular),
        entry(12, "Air Force 1", "Nike", 110.99, None, 4.8, 789, None, Regular),
        entry(13, "Chuck Taylor All Star", "Converse", 65.99, None, 4.6, 345, None, Regular),
        entry(14, "Suede Classic", "Puma", 75.99, None, 4.5, 234, None, Regular),
        entry(15, "Fresh Foam X", "New Balance", 139.99, None, 4.7, 156, None, Regular),
        entry(16, "Gel-Kayano 30", "ASICS", 159.99, None, 4.8, 278, None, Regular),
    ]
}
