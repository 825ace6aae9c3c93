use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use shop::cart_service::{AddItemOutcome, CartError, CartService};
use shop::clients::{CartClient, ProductClient};
use shop::model::{Cart, CartId, Product, ProductCreate, ProductId, ProductUpdate, UserId};
use shop::{cart_actor, product_actor};

// --- Helpers ---

type Service = CartService<CartClient, ProductClient>;

fn start() -> (Service, ProductClient) {
    let (cart_actor, cart_client) = cart_actor::new(32);
    let (product_actor, product_client) = product_actor::new(32);
    tokio::spawn(cart_actor.run(()));
    tokio::spawn(product_actor.run(()));
    (
        CartService::new(cart_client, product_client.clone()),
        product_client,
    )
}

async fn seed(products: &ProductClient, name: &str, price: i64, stock: u32) -> ProductId {
    products
        .create_product(ProductCreate {
            name: name.to_string(),
            price: Decimal::from(price),
            weight: 1.0,
            stock,
            images: vec![],
        })
        .await
        .unwrap()
}

// --- Real actors ---

#[tokio::test]
async fn test_total_tracks_catalog_prices_across_operations() {
    let (service, products) = start();
    let user = UserId(1);
    let tea = seed(&products, "Tea", 4, 10).await;
    let jam = seed(&products, "Jam", 6, 10).await;
    let honey = seed(&products, "Honey", 9, 10).await;

    for product in [&tea, &jam, &honey] {
        service.add_item(&user, product).await.unwrap();
    }
    service.increment(&user, &tea).await.unwrap();
    service.increment(&user, &tea).await.unwrap();
    service.increment(&user, &jam).await.unwrap();
    service.decrement(&user, &tea).await.unwrap();
    let cart = service.remove_line(&user, &honey).await.unwrap();

    // tea x2 + jam x2
    assert_eq!(cart.total_price, Decimal::from(20));
    assert_eq!(cart.total_price, cart.snapshot_total());
    let order: Vec<_> = cart.line_items.iter().map(|l| l.product_id.clone()).collect();
    assert_eq!(order, vec![tea, jam]);
}

#[tokio::test]
async fn test_increment_uses_current_catalog_price() {
    let (service, products) = start();
    let user = UserId(1);
    let tea = seed(&products, "Tea", 4, 10).await;

    service.add_item(&user, &tea).await.unwrap();
    products
        .update_product(
            tea.clone(),
            ProductUpdate {
                price: Some(Decimal::from(5)),
                stock: None,
            },
        )
        .await
        .unwrap();

    let cart = service.increment(&user, &tea).await.unwrap();
    assert_eq!(cart.total_price, Decimal::from(9));
    // The line keeps the price it was added at.
    assert_eq!(cart.line(&tea).unwrap().price, Decimal::from(4));
}

#[tokio::test]
async fn test_removing_only_line_after_price_rise_empties_total() {
    let (service, products) = start();
    let user = UserId(1);
    let tea = seed(&products, "Tea", 10, 10).await;

    service.add_item(&user, &tea).await.unwrap();
    products
        .update_product(
            tea.clone(),
            ProductUpdate {
                price: Some(Decimal::from(50)),
                stock: None,
            },
        )
        .await
        .unwrap();

    let cart = service.remove_line(&user, &tea).await.unwrap();
    assert!(cart.line_items.is_empty());
    assert_eq!(cart.total_price, Decimal::ZERO);
    assert_eq!(service.list_all(&user).await.unwrap(), vec![cart]);
}

#[tokio::test]
async fn test_concurrent_adds_of_distinct_products_all_land() {
    let (service, products) = start();
    let user = UserId(1);

    let mut ids = Vec::new();
    for n in 1..=10 {
        ids.push(seed(&products, &format!("Product {n}"), n, 3).await);
    }

    let mut handles = Vec::new();
    for id in ids.clone() {
        let service = service.clone();
        let user = user.clone();
        handles.push(tokio::spawn(async move { service.add_item(&user, &id).await }));
    }
    for handle in handles {
        assert!(matches!(
            handle.await.unwrap(),
            Ok(AddItemOutcome::Added(_))
        ));
    }

    let carts = service.list_all(&user).await.unwrap();
    assert_eq!(carts.len(), 1);
    assert_eq!(carts[0].line_items.len(), 10);
    assert_eq!(carts[0].total_price, Decimal::from(55));
}

#[tokio::test]
async fn test_concurrent_adds_of_one_product_yield_one_line() {
    let (service, products) = start();
    let user = UserId(1);
    let tea = seed(&products, "Tea", 4, 10).await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let service = service.clone();
        let user = user.clone();
        let tea = tea.clone();
        handles.push(tokio::spawn(async move { service.add_item(&user, &tea).await }));
    }

    let mut added = 0;
    for handle in handles {
        if let AddItemOutcome::Added(_) = handle.await.unwrap().unwrap() {
            added += 1;
        }
    }
    assert_eq!(added, 1);

    let cart = service.get_or_create(&user).await.unwrap();
    assert_eq!(cart.line_items.len(), 1);
    assert_eq!(cart.total_price, Decimal::from(4));
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let (service, products) = start();
    let tea = seed(&products, "Tea", 4, 10).await;

    service.add_item(&UserId(1), &tea).await.unwrap();
    let other = service.get_or_create(&UserId(2)).await.unwrap();

    assert!(other.line_items.is_empty());
    assert_ne!(other.id, service.get_or_create(&UserId(1)).await.unwrap().id);
}

// --- Mocked store ---

fn teapot() -> Product {
    Product {
        id: ProductId(1),
        name: "Teapot".to_string(),
        price: Decimal::from(20),
        weight: 0.8,
        stock: 5,
        images: vec![],
    }
}

#[tokio::test]
async fn test_store_failure_on_save_is_a_store_error() {
    let mut carts = MockClient::<Cart>::new();
    carts.expect_find().return_ok(vec![]);
    carts.expect_create().return_ok(CartId(1));
    carts
        .expect_get(CartId(1))
        .return_ok(Some(Cart::new(CartId(1), UserId(1))));
    carts
        .expect_update(CartId(1))
        .return_err(FrameworkError::ActorClosed);

    let mut products = MockClient::<Product>::new();
    products.expect_get(ProductId(1)).return_ok(Some(teapot()));

    let service = CartService::new(
        CartClient::new(carts.client()),
        ProductClient::new(products.client()),
    );
    let result = service.add_item(&UserId(1), &ProductId(1)).await;

    let error = result.unwrap_err();
    assert!(matches!(error, CartError::StoreError(_)));
    assert_eq!(error.status_code(), 500);
    carts.verify();
    products.verify();
}

#[tokio::test]
async fn test_unknown_product_touches_no_cart() {
    let carts = MockClient::<Cart>::new();
    let mut products = MockClient::<Product>::new();
    products.expect_get(ProductId(7)).return_ok(None);

    let service = CartService::new(
        CartClient::new(carts.client()),
        ProductClient::new(products.client()),
    );
    let result = service.add_item(&UserId(1), &ProductId(7)).await;

    assert_eq!(result, Err(CartError::ItemNotFound(ProductId(7))));
    assert_eq!(CartError::ItemNotFound(ProductId(7)).status_code(), 400);
    products.verify();
}
