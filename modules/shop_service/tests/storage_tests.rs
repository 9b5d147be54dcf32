//! Repository tests against SQLite in memory with migrations applied

mod common;

use axum::{body::Body, Router};
use common::{dec, edit_of};
use http::{Request, StatusCode};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use shop_service::contract::*;
use shop_service::domain::draft::ProductDraft;
use shop_service::domain::repository::{CategoryRepository, PageRepository, ProductRepository};
use shop_service::domain::Service;
use shop_service::infra::storage::entity::{location, price, variation};
use shop_service::infra::storage::{
    SeaOrmCategoryRepository, SeaOrmPageRepository, SeaOrmProductRepository,
};
use shop_service::{Config, ShopServiceModule};
use std::sync::Arc;
use tower::ServiceExt;

struct Db {
    conn: Arc<DatabaseConnection>,
    products: SeaOrmProductRepository,
    category_id: i32,
    page_id: i32,
}

async fn setup() -> Db {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await.unwrap();

    ShopServiceModule::new().migrate(&conn).await.unwrap();
    let conn = Arc::new(conn);

    let category = SeaOrmCategoryRepository::new(conn.clone())
        .create("Kitchen")
        .await
        .unwrap();
    let page = SeaOrmPageRepository::new(conn.clone())
        .create("Corner Cafe")
        .await
        .unwrap();

    Db {
        products: SeaOrmProductRepository::new(conn.clone()),
        conn,
        category_id: category.id,
        page_id: page.id,
    }
}

fn mug(category_id: i32, page_id: i32) -> ProductCreate {
    ProductCreate {
        name: "Mug".to_string(),
        category_id,
        page_id,
        price: dec("9.5"),
        variations: vec![
            VariationCreate {
                name: "Red".to_string(),
                price: dec("9.5"),
            },
            VariationCreate {
                name: "Blue".to_string(),
                price: dec("10.25"),
            },
        ],
        attributes: vec![ProductAttributeCreate {
            name: "Gift wrap".to_string(),
            price: dec("1.5"),
        }],
        location_inventories: vec![LocationInventoryCreate { count: 10 }],
    }
}

async fn price_rows(conn: &DatabaseConnection) -> u64 {
    price::Entity::find().count(conn).await.unwrap()
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = setup().await;

    ShopServiceModule::new().migrate(&db.conn).await.unwrap();
}

#[tokio::test]
async fn test_insert_and_load_aggregate() {
    let db = setup().await;

    let draft = ProductDraft::from_create(&mug(db.category_id, db.page_id));
    let saved = db.products.upsert(&draft).await.unwrap();

    assert_eq!(saved.name, "Mug");
    assert_eq!(saved.price.amount, dec("9.5"));
    assert_eq!(saved.variations.len(), 2);
    assert_eq!(saved.variations[0].name, "Red");
    assert_eq!(saved.variations[1].price.amount, dec("10.25"));
    assert_eq!(saved.attributes[0].price.amount, dec("1.5"));
    assert_eq!(saved.location_inventories[0].count, 10);
    assert_eq!(saved.location_inventories[0].location.name, "Mug");

    let by_key = db
        .products
        .find_by_key(db.category_id, saved.id)
        .await
        .unwrap();
    assert_eq!(by_key.as_ref(), Some(&saved));

    let listed = db.products.find_by_category(db.category_id).await.unwrap();
    assert_eq!(listed, vec![saved.clone()]);

    // base price plus one per variation and attribute
    assert_eq!(price_rows(&db.conn).await, 4);
}

#[tokio::test]
async fn test_find_by_key_respects_category() {
    let db = setup().await;
    let saved = db
        .products
        .upsert(&ProductDraft::from_create(&mug(db.category_id, db.page_id)))
        .await
        .unwrap();

    let found = db
        .products
        .find_by_key(db.category_id + 1, saved.id)
        .await
        .unwrap();

    assert!(found.is_none());
    assert!(db.products.find_by_id(saved.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_replace_drops_unlisted_children_and_their_prices() {
    let db = setup().await;
    let saved = db
        .products
        .upsert(&ProductDraft::from_create(&mug(db.category_id, db.page_id)))
        .await
        .unwrap();

    let mut edit = edit_of(&saved);
    edit.price = dec("12.25");
    edit.variations.clear();
    edit.attributes[0].price = dec("2.75");

    let mut draft = ProductDraft::from_edit(&edit);
    draft.bind_to(&saved).unwrap();
    let replaced = db.products.upsert(&draft).await.unwrap();

    assert_eq!(replaced.id, saved.id);
    assert_eq!(replaced.price.id, saved.price.id);
    assert_eq!(replaced.price.amount, dec("12.25"));
    assert!(replaced.variations.is_empty());
    assert_eq!(replaced.attributes[0].id, saved.attributes[0].id);
    assert_eq!(replaced.attributes[0].price.amount, dec("2.75"));
    assert_eq!(replaced.location_inventories, saved.location_inventories);

    assert_eq!(variation::Entity::find().count(&*db.conn).await.unwrap(), 0);
    assert_eq!(price_rows(&db.conn).await, 2);
}

#[tokio::test]
async fn test_replace_with_unknown_location_rolls_back() {
    let db = setup().await;
    let saved = db
        .products
        .upsert(&ProductDraft::from_create(&mug(db.category_id, db.page_id)))
        .await
        .unwrap();

    let mut edit = edit_of(&saved);
    edit.name = "Cup".to_string();
    edit.location_inventories.push(LocationInventoryEdit {
        id: None,
        location_id: 4242,
        count: 1,
    });
    let mut draft = ProductDraft::from_edit(&edit);
    draft.bind_to(&saved).unwrap();

    assert!(db.products.upsert(&draft).await.is_err());

    let reloaded = db.products.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(reloaded, saved);
}

#[tokio::test]
async fn test_delete_removes_prices_but_keeps_locations() {
    let db = setup().await;
    let saved = db
        .products
        .upsert(&ProductDraft::from_create(&mug(db.category_id, db.page_id)))
        .await
        .unwrap();

    db.products.delete(saved.id).await.unwrap();

    assert!(db.products.find_by_id(saved.id).await.unwrap().is_none());
    assert_eq!(price_rows(&db.conn).await, 0);
    assert_eq!(location::Entity::find().count(&*db.conn).await.unwrap(), 1);

    // deleting again is a no-op at this layer
    db.products.delete(saved.id).await.unwrap();
}

#[tokio::test]
async fn test_category_and_page_exists() {
    let db = setup().await;
    let categories = SeaOrmCategoryRepository::new(db.conn.clone());
    let pages = SeaOrmPageRepository::new(db.conn.clone());

    assert!(categories.exists(db.category_id).await.unwrap());
    assert!(!categories.exists(db.category_id + 10).await.unwrap());
    assert!(pages.exists(db.page_id).await.unwrap());
    assert_eq!(
        pages.find_by_id(db.page_id).await.unwrap().map(|p| p.name),
        Some("Corner Cafe".to_string())
    );
}

#[tokio::test]
async fn test_service_over_sqlite_end_to_end() {
    let db = setup().await;
    let service = Service::new(
        Arc::new(SeaOrmProductRepository::new(db.conn.clone())),
        Arc::new(SeaOrmCategoryRepository::new(db.conn.clone())),
        Arc::new(SeaOrmPageRepository::new(db.conn.clone())),
        Config::default(),
    );

    let mut bad = mug(db.category_id, db.page_id);
    bad.variations[1].name = String::new();
    assert!(matches!(
        service.create_product(bad).await,
        Err(ShopError::InvalidAction { .. })
    ));
    assert_eq!(price_rows(&db.conn).await, 0);

    let created = service
        .create_product(mug(db.category_id, db.page_id))
        .await
        .unwrap();
    service
        .delete_product(db.category_id, created.id)
        .await
        .unwrap();

    assert!(matches!(
        service.get_product(db.category_id, created.id).await,
        Err(ShopError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_module_boots_on_sqlite_like_the_server() {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await.unwrap();

    let module = ShopServiceModule::new();
    module.migrate(&conn).await.unwrap();
    module.init(Arc::new(conn), Config::default()).unwrap();
    let router = module.register_rest(Router::new()).unwrap();

    let post = |uri: &str, body: serde_json::Value| {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    };

    let response = router
        .clone()
        .oneshot(post("/shop/categories", serde_json::json!({ "name": "Kitchen" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(post("/shop/pages", serde_json::json!({ "name": "Corner Cafe" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(post(
            "/shop/categories/1/products",
            serde_json::json!({
                "name": "Mug",
                "page_id": 1,
                "price": "9.5",
                "variations": [{ "name": "Red", "price": "9.5" }],
                "location_inventories": [{ "count": 3 }]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/shop/categories/1/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let list: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(list["total"], 1);
    assert_eq!(list["items"][0]["variations"][0]["name"], "Red");
}
