//! SeaORM repository implementations

use crate::contract::{Category, Page, Product};
use crate::domain::draft::{LocationRef, PriceDraft, ProductDraft};
use crate::domain::repository::{CategoryRepository, PageRepository, ProductRepository};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::entity::{
    category, location, page, price, product, product_attribute, product_location_inventory,
    variation,
};
use super::mapper::AggregateRows;

// ===== Product Repository =====

pub struct SeaOrmProductRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>> {
        let products = product::Entity::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .order_by_asc(product::Column::Id)
            .all(&*self.db)
            .await?;

        load_aggregates(&*self.db, products).await
    }

    async fn find_by_key(&self, category_id: i32, product_id: i32) -> Result<Option<Product>> {
        let found = product::Entity::find()
            .filter(product::Column::Id.eq(product_id))
            .filter(product::Column::CategoryId.eq(category_id))
            .one(&*self.db)
            .await?;

        load_one(&*self.db, found).await
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>> {
        let found = product::Entity::find_by_id(product_id)
            .one(&*self.db)
            .await?;

        load_one(&*self.db, found).await
    }

    async fn upsert(&self, draft: &ProductDraft) -> Result<Product> {
        let txn = self.db.begin().await?;

        let product_id = match draft.id {
            None => insert_product(&txn, draft).await?,
            Some(id) => {
                replace_product(&txn, id, draft).await?;
                id
            }
        };

        txn.commit().await?;

        self.find_by_id(product_id)
            .await?
            .ok_or_else(|| anyhow!("product {product_id} missing right after save"))
    }

    async fn delete(&self, product_id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        let Some(root) = product::Entity::find_by_id(product_id).one(&txn).await? else {
            return Ok(());
        };

        let mut owned_prices = vec![root.price_id];
        owned_prices.extend(
            variation::Entity::find()
                .filter(variation::Column::ProductId.eq(product_id))
                .all(&txn)
                .await?
                .into_iter()
                .map(|v| v.price_id),
        );
        owned_prices.extend(
            product_attribute::Entity::find()
                .filter(product_attribute::Column::ProductId.eq(product_id))
                .all(&txn)
                .await?
                .into_iter()
                .map(|a| a.price_id),
        );

        variation::Entity::delete_many()
            .filter(variation::Column::ProductId.eq(product_id))
            .exec(&txn)
            .await?;
        product_attribute::Entity::delete_many()
            .filter(product_attribute::Column::ProductId.eq(product_id))
            .exec(&txn)
            .await?;
        product_location_inventory::Entity::delete_many()
            .filter(product_location_inventory::Column::ProductId.eq(product_id))
            .exec(&txn)
            .await?;
        product::Entity::delete_by_id(product_id).exec(&txn).await?;
        price::Entity::delete_many()
            .filter(price::Column::Id.is_in(owned_prices))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}

async fn load_one<C: ConnectionTrait>(
    conn: &C,
    found: Option<product::Model>,
) -> Result<Option<Product>> {
    match found {
        Some(root) => Ok(load_aggregates(conn, vec![root]).await?.pop()),
        None => Ok(None),
    }
}

/// Eager-load everything the given products own or reference
async fn load_aggregates<C: ConnectionTrait>(
    conn: &C,
    products: Vec<product::Model>,
) -> Result<Vec<Product>> {
    if products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();

    let variations = variation::Entity::find()
        .filter(variation::Column::ProductId.is_in(product_ids.clone()))
        .order_by_asc(variation::Column::Id)
        .all(conn)
        .await?;

    let attributes = product_attribute::Entity::find()
        .filter(product_attribute::Column::ProductId.is_in(product_ids.clone()))
        .order_by_asc(product_attribute::Column::Id)
        .all(conn)
        .await?;

    let inventories = product_location_inventory::Entity::find()
        .filter(product_location_inventory::Column::ProductId.is_in(product_ids))
        .order_by_asc(product_location_inventory::Column::Id)
        .all(conn)
        .await?;

    let price_ids: Vec<i32> = products
        .iter()
        .map(|p| p.price_id)
        .chain(variations.iter().map(|v| v.price_id))
        .chain(attributes.iter().map(|a| a.price_id))
        .collect();
    let prices = price::Entity::find()
        .filter(price::Column::Id.is_in(price_ids))
        .all(conn)
        .await?;

    let mut location_ids: Vec<i32> = inventories.iter().map(|i| i.location_id).collect();
    location_ids.sort_unstable();
    location_ids.dedup();
    let locations = location::Entity::find()
        .filter(location::Column::Id.is_in(location_ids))
        .all(conn)
        .await?;

    AggregateRows {
        products,
        variations,
        attributes,
        inventories,
        prices,
        locations,
    }
    .into_products()
}

async fn insert_product<C: ConnectionTrait>(conn: &C, draft: &ProductDraft) -> Result<i32> {
    let price_id = save_price(conn, &draft.price).await?;

    let root = product::ActiveModel {
        name: Set(draft.name.clone()),
        category_id: Set(draft.category_id),
        page_id: Set(draft.page_id),
        price_id: Set(price_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    save_children(conn, root.id, draft).await?;
    Ok(root.id)
}

/// Overwrite the root row and swap the child collections for the draft's.
async fn replace_product<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
    draft: &ProductDraft,
) -> Result<()> {
    let price_id = save_price(conn, &draft.price).await?;

    product::ActiveModel {
        id: Set(product_id),
        name: Set(draft.name.clone()),
        category_id: Set(draft.category_id),
        page_id: Set(draft.page_id),
        price_id: Set(price_id),
    }
    .update(conn)
    .await?;

    let mut orphaned_prices = Vec::new();

    let kept: Vec<i32> = draft.variations.iter().filter_map(|v| v.id).collect();
    let dropped = variation::Entity::find()
        .filter(variation::Column::ProductId.eq(product_id))
        .filter(variation::Column::Id.is_not_in(kept))
        .all(conn)
        .await?;
    orphaned_prices.extend(dropped.iter().map(|v| v.price_id));
    if !dropped.is_empty() {
        variation::Entity::delete_many()
            .filter(variation::Column::Id.is_in(dropped.iter().map(|v| v.id)))
            .exec(conn)
            .await?;
    }

    let kept: Vec<i32> = draft.attributes.iter().filter_map(|a| a.id).collect();
    let dropped = product_attribute::Entity::find()
        .filter(product_attribute::Column::ProductId.eq(product_id))
        .filter(product_attribute::Column::Id.is_not_in(kept))
        .all(conn)
        .await?;
    orphaned_prices.extend(dropped.iter().map(|a| a.price_id));
    if !dropped.is_empty() {
        product_attribute::Entity::delete_many()
            .filter(product_attribute::Column::Id.is_in(dropped.iter().map(|a| a.id)))
            .exec(conn)
            .await?;
    }

    let kept: Vec<i32> = draft
        .location_inventories
        .iter()
        .filter_map(|i| i.id)
        .collect();
    product_location_inventory::Entity::delete_many()
        .filter(product_location_inventory::Column::ProductId.eq(product_id))
        .filter(product_location_inventory::Column::Id.is_not_in(kept))
        .exec(conn)
        .await?;

    if !orphaned_prices.is_empty() {
        price::Entity::delete_many()
            .filter(price::Column::Id.is_in(orphaned_prices))
            .exec(conn)
            .await?;
    }

    save_children(conn, product_id, draft).await
}

async fn save_children<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
    draft: &ProductDraft,
) -> Result<()> {
    for v in &draft.variations {
        let price_id = save_price(conn, &v.price).await?;
        let mut row = variation::ActiveModel {
            product_id: Set(product_id),
            name: Set(v.name.clone()),
            price_id: Set(price_id),
            ..Default::default()
        };
        match v.id {
            Some(id) => {
                row.id = Set(id);
                row.update(conn).await?;
            }
            None => {
                row.insert(conn).await?;
            }
        }
    }

    for a in &draft.attributes {
        let price_id = save_price(conn, &a.price).await?;
        let mut row = product_attribute::ActiveModel {
            product_id: Set(product_id),
            name: Set(a.name.clone()),
            price_id: Set(price_id),
            ..Default::default()
        };
        match a.id {
            Some(id) => {
                row.id = Set(id);
                row.update(conn).await?;
            }
            None => {
                row.insert(conn).await?;
            }
        }
    }

    for inv in &draft.location_inventories {
        let location_id = match &inv.location {
            LocationRef::Existing(id) => *id,
            LocationRef::New { name } => {
                location::ActiveModel {
                    name: Set(name.clone()),
                    ..Default::default()
                }
                .insert(conn)
                .await?
                .id
            }
        };
        let mut row = product_location_inventory::ActiveModel {
            product_id: Set(product_id),
            location_id: Set(location_id),
            count: Set(inv.count),
            ..Default::default()
        };
        match inv.id {
            Some(id) => {
                row.id = Set(id);
                row.update(conn).await?;
            }
            None => {
                row.insert(conn).await?;
            }
        }
    }

    Ok(())
}

async fn save_price<C: ConnectionTrait>(conn: &C, draft: &PriceDraft) -> Result<i32> {
    let saved = match draft.id {
        Some(id) => {
            price::ActiveModel {
                id: Set(id),
                amount: Set(draft.amount),
            }
            .update(conn)
            .await?
        }
        None => {
            price::ActiveModel {
                amount: Set(draft.amount),
                ..Default::default()
            }
            .insert(conn)
            .await?
        }
    };
    Ok(saved.id)
}

// ===== Category Repository =====

pub struct SeaOrmCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn create(&self, name: &str) -> Result<Category> {
        let saved = category::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        Ok(saved.into())
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>> {
        let result = category::Entity::find_by_id(category_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn exists(&self, category_id: i32) -> Result<bool> {
        let count = category::Entity::find_by_id(category_id)
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }
}

// ===== Page Repository =====

pub struct SeaOrmPageRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPageRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PageRepository for SeaOrmPageRepository {
    async fn create(&self, name: &str) -> Result<Page> {
        let saved = page::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        Ok(saved.into())
    }

    async fn find_by_id(&self, page_id: i32) -> Result<Option<Page>> {
        let result = page::Entity::find_by_id(page_id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn exists(&self, page_id: i32) -> Result<bool> {
        let count = page::Entity::find_by_id(page_id).count(&*self.db).await?;

        Ok(count > 0)
    }
}
