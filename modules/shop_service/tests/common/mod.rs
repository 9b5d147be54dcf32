//! Shared fixtures: in-memory repositories and sample inputs

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;
use shop_service::contract::*;
use shop_service::domain::draft::{LocationRef, PriceDraft, ProductDraft};
use shop_service::domain::repository::{CategoryRepository, PageRepository, ProductRepository};
use shop_service::domain::Service;
use shop_service::Config;
use std::collections::HashMap;
use std::sync::Arc;

/// Hands out ids the way an identity column would
#[derive(Default)]
pub struct IdSeq(Mutex<i32>);

impl IdSeq {
    pub fn next(&self) -> i32 {
        let mut last = self.0.lock();
        *last += 1;
        *last
    }
}

#[derive(Default)]
pub struct MockProductRepo {
    products: RwLock<HashMap<i32, Product>>,
    locations: RwLock<HashMap<i32, Location>>,
    ids: IdSeq,
}

impl MockProductRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.products.read().len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.read().len()
    }

    fn price(&self, draft: &PriceDraft) -> Price {
        Price {
            id: draft.id.unwrap_or_else(|| self.ids.next()),
            amount: draft.amount,
        }
    }

    fn materialize(&self, draft: &ProductDraft) -> anyhow::Result<Product> {
        let id = draft.id.unwrap_or_else(|| self.ids.next());

        let variations = draft
            .variations
            .iter()
            .map(|v| Variation {
                id: v.id.unwrap_or_else(|| self.ids.next()),
                product_id: id,
                name: v.name.clone(),
                price: self.price(&v.price),
            })
            .collect();

        let attributes = draft
            .attributes
            .iter()
            .map(|a| ProductAttribute {
                id: a.id.unwrap_or_else(|| self.ids.next()),
                product_id: id,
                name: a.name.clone(),
                price: self.price(&a.price),
            })
            .collect();

        let mut location_inventories = Vec::new();
        for inv in &draft.location_inventories {
            let location = match &inv.location {
                LocationRef::New { name } => {
                    let location = Location {
                        id: self.ids.next(),
                        name: name.clone(),
                    };
                    self.locations.write().insert(location.id, location.clone());
                    location
                }
                LocationRef::Existing(location_id) => self
                    .locations
                    .read()
                    .get(location_id)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("foreign key violation: location {location_id}"))?,
            };
            location_inventories.push(ProductLocationInventory {
                id: inv.id.unwrap_or_else(|| self.ids.next()),
                product_id: id,
                location_id: location.id,
                count: inv.count,
                location,
            });
        }

        Ok(Product {
            id,
            name: draft.name.clone(),
            category_id: draft.category_id,
            page_id: draft.page_id,
            price: self.price(&draft.price),
            variations,
            attributes,
            location_inventories,
        })
    }
}

#[async_trait]
impl ProductRepository for MockProductRepo {
    async fn find_by_category(&self, category_id: i32) -> anyhow::Result<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .read()
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn find_by_key(&self, category_id: i32, product_id: i32) -> anyhow::Result<Option<Product>> {
        Ok(self
            .products
            .read()
            .get(&product_id)
            .filter(|p| p.category_id == category_id)
            .cloned())
    }

    async fn find_by_id(&self, product_id: i32) -> anyhow::Result<Option<Product>> {
        Ok(self.products.read().get(&product_id).cloned())
    }

    async fn upsert(&self, draft: &ProductDraft) -> anyhow::Result<Product> {
        let product = self.materialize(draft)?;
        self.products.write().insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, product_id: i32) -> anyhow::Result<()> {
        self.products.write().remove(&product_id);
        Ok(())
    }
}

/// Category or page table
#[derive(Default)]
pub struct MockNamedRepo {
    rows: RwLock<HashMap<i32, String>>,
    ids: IdSeq,
}

impl MockNamedRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&self, name: &str) -> i32 {
        let id = self.ids.next();
        self.rows.write().insert(id, name.to_string());
        id
    }
}

#[async_trait]
impl CategoryRepository for MockNamedRepo {
    async fn create(&self, name: &str) -> anyhow::Result<Category> {
        let id = self.insert(name);
        Ok(Category {
            id,
            name: name.to_string(),
        })
    }

    async fn find_by_id(&self, category_id: i32) -> anyhow::Result<Option<Category>> {
        Ok(self.rows.read().get(&category_id).map(|name| Category {
            id: category_id,
            name: name.clone(),
        }))
    }

    async fn exists(&self, category_id: i32) -> anyhow::Result<bool> {
        Ok(self.rows.read().contains_key(&category_id))
    }
}

#[async_trait]
impl PageRepository for MockNamedRepo {
    async fn create(&self, name: &str) -> anyhow::Result<Page> {
        let id = self.insert(name);
        Ok(Page {
            id,
            name: name.to_string(),
        })
    }

    async fn find_by_id(&self, page_id: i32) -> anyhow::Result<Option<Page>> {
        Ok(self.rows.read().get(&page_id).map(|name| Page {
            id: page_id,
            name: name.clone(),
        }))
    }

    async fn exists(&self, page_id: i32) -> anyhow::Result<bool> {
        Ok(self.rows.read().contains_key(&page_id))
    }
}

pub struct TestShop {
    pub service: Arc<Service>,
    pub products: Arc<MockProductRepo>,
    pub category_id: i32,
    pub page_id: i32,
}

/// Service over mock repositories with one category and one page registered
pub async fn test_shop() -> TestShop {
    let products = Arc::new(MockProductRepo::new());
    let categories = Arc::new(MockNamedRepo::new());
    let pages = Arc::new(MockNamedRepo::new());

    let service = Arc::new(Service::new(
        products.clone(),
        categories,
        pages,
        Config::default(),
    ));

    let category_id = service.register_category("Kitchen").await.unwrap().id;
    let page_id = service.register_page("Corner Cafe").await.unwrap().id;

    TestShop {
        service,
        products,
        category_id,
        page_id,
    }
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// A mug in red with ten units in stock
pub fn mug(category_id: i32, page_id: i32) -> ProductCreate {
    ProductCreate {
        name: "Mug".to_string(),
        category_id,
        page_id,
        price: dec("9.99"),
        variations: vec![VariationCreate {
            name: "Red".to_string(),
            price: dec("9.99"),
        }],
        attributes: vec![],
        location_inventories: vec![LocationInventoryCreate { count: 10 }],
    }
}

/// Edit input that keeps every child of `product` unchanged
pub fn edit_of(product: &Product) -> ProductEdit {
    ProductEdit {
        id: product.id,
        name: product.name.clone(),
        category_id: product.category_id,
        page_id: product.page_id,
        price: product.price.amount,
        variations: product
            .variations
            .iter()
            .map(|v| VariationEdit {
                id: Some(v.id),
                name: v.name.clone(),
                price_id: Some(v.price.id),
                price: v.price.amount,
            })
            .collect(),
        attributes: product
            .attributes
            .iter()
            .map(|a| ProductAttributeEdit {
                id: Some(a.id),
                name: a.name.clone(),
                price_id: Some(a.price.id),
                price: a.price.amount,
            })
            .collect(),
        location_inventories: product
            .location_inventories
            .iter()
            .map(|inv| LocationInventoryEdit {
                id: Some(inv.id),
                location_id: inv.location_id,
                count: inv.count,
            })
            .collect(),
    }
}
