//! PostgreSQL repository tests. Require Docker: `cargo test -- --ignored`.

use domain_products::{
    PgProductRepository, ProductError, ProductFields, ProductRepository, ProductService,
};
use sea_orm::ConnectionTrait;
use test_utils::{TestDataBuilder, TestDatabase, assertions};

fn input(builder: &TestDataBuilder, suffix: &str) -> ProductFields {
    ProductFields {
        name: builder.name("product", suffix),
        price: builder.price(),
        availability: true,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_fetch() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_create_and_fetch");

    let created = repo.create(input(&builder, "main")).await.unwrap();
    assert!(created.id > 0);
    assert!(created.availability);

    let fetched = assertions::assert_some(repo.get_by_id(created.id).await.unwrap(), "fetch");
    assert_eq!(fetched.name, created.name);
    assertions::assert_price_eq(fetched.price, builder.price(), "price");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_orders_by_id_desc() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_list_orders_by_id_desc");

    for suffix in ["a", "b", "c"] {
        repo.create(input(&builder, suffix)).await.unwrap();
    }

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids.len(), 3);
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_toggle_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("test_update_toggle_and_delete");
    let created = repo.create(input(&builder, "main")).await.unwrap();

    let updated = repo
        .update(
            created.id,
            ProductFields {
                name: "Renamed".to_string(),
                price: 12.5,
                availability: false,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert!(!updated.availability);

    let toggled = repo.toggle_availability(created.id).await.unwrap().unwrap();
    assert!(toggled.availability);
    let toggled = repo.toggle_availability(created.id).await.unwrap().unwrap();
    assert!(!toggled.availability);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_rows_return_none() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
    assert_eq!(repo.toggle_availability(9999).await.unwrap(), None);
    let update = ProductFields {
        name: "x".to_string(),
        price: 1.0,
        availability: true,
    };
    assert_eq!(repo.update(9999, update).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_check_constraint_rejects_non_positive_price() {
    let db = TestDatabase::new().await;

    let result = db
        .connection
        .execute_unprepared(
            "INSERT INTO products (name, price, availability) VALUES ('Broken', 0, true)",
        )
        .await;

    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_over_postgres_reports_not_found() {
    let db = TestDatabase::new().await;
    db.truncate_products().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let result = service.delete_product(1).await;
    assert!(matches!(result, Err(ProductError::NotFound(1))));
}
