use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct StockItem {
    id: u32,
    sku: String,
    on_hand: u32,
}

#[derive(Debug)]
struct StockItemCreate {
    sku: String,
    on_hand: u32,
}

#[derive(Debug)]
struct StockItemUpdate {
    sku: Option<String>,
    on_hand: Option<u32>,
}

#[derive(Debug)]
enum StockAction {
    /// Take one unit off the shelf, returning what is left.
    Pick,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum StockError {
    #[error("SKU must not be empty")]
    EmptySku,
    #[error("Out of stock")]
    Empty,
}

#[async_trait]
impl ActorEntity for StockItem {
    type Id = u32;
    type Create = StockItemCreate;
    type Update = StockItemUpdate;
    type Action = StockAction;
    type ActionResult = u32;
    type Context = ();
    type Error = StockError;

    fn from_create_params(id: u32, params: StockItemCreate) -> Result<Self, Self::Error> {
        if params.sku.is_empty() {
            return Err(StockError::EmptySku);
        }
        Ok(Self {
            id,
            sku: params.sku,
            on_hand: params.on_hand,
        })
    }

    async fn on_update(
        &mut self,
        update: StockItemUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        // on_hand is applied first so a rejected sku shows whether the
        // half-applied draft leaked into the store.
        if let Some(on_hand) = update.on_hand {
            self.on_hand = on_hand;
        }
        if let Some(sku) = update.sku {
            if sku.is_empty() {
                return Err(StockError::EmptySku);
            }
            self.sku = sku;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: StockAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            StockAction::Pick => {
                if self.on_hand == 0 {
                    return Err(StockError::Empty);
                }
                self.on_hand -= 1;
                Ok(self.on_hand)
            }
        }
    }
}

fn create(sku: &str, on_hand: u32) -> StockItemCreate {
    StockItemCreate {
        sku: sku.into(),
        on_hand,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(create("TEA-01", 2)).await.unwrap();
    assert_eq!(id, 1);

    // 2. Action
    let left = client.perform_action(id, StockAction::Pick).await.unwrap();
    assert_eq!(left, 1);

    let item: StockItem = client.get(id).await.unwrap().unwrap();
    assert_eq!(item.on_hand, 1);

    // 3. Update
    let updated = client
        .update(
            id,
            StockItemUpdate {
                sku: Some("TEA-02".into()),
                on_hand: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.sku, "TEA-02");

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_filters_inside_actor() {
    let (actor, client) = ResourceActor::<StockItem>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create("TEA-01", 0)).await.unwrap();
    client.create(create("TEA-02", 5)).await.unwrap();
    client.create(create("COF-01", 3)).await.unwrap();

    let mut in_stock = client
        .find(|item: &StockItem| item.on_hand > 0)
        .await
        .unwrap();
    in_stock.sort_by_key(|item| item.id);
    let skus: Vec<_> = in_stock.iter().map(|item| item.sku.as_str()).collect();
    assert_eq!(skus, vec!["TEA-02", "COF-01"]);

    let none = client.find(|item: &StockItem| item.sku == "JAM").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_failed_update_keeps_previous_state() {
    let (actor, client) = ResourceActor::<StockItem>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("TEA-01", 4)).await.unwrap();

    let result = client
        .update(
            id,
            StockItemUpdate {
                sku: Some(String::new()),
                on_hand: Some(99),
            },
        )
        .await;
    let error = result.unwrap_err().into_entity_error::<StockError>().unwrap();
    assert_eq!(error, StockError::EmptySku);

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.on_hand, 4);
    assert_eq!(stored.sku, "TEA-01");
}

#[tokio::test]
async fn test_failed_action_keeps_previous_state() {
    let (actor, client) = ResourceActor::<StockItem>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("TEA-01", 1)).await.unwrap();
    assert_eq!(client.perform_action(id, StockAction::Pick).await.unwrap(), 0);

    let result = client.perform_action(id, StockAction::Pick).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert_eq!(client.get(id).await.unwrap().unwrap().on_hand, 0);
}

#[tokio::test]
async fn test_rejected_create_consumes_no_entity() {
    let (actor, client) = ResourceActor::<StockItem>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.create(create("", 1)).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(client.find(|_: &StockItem| true).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<StockItem>::new(10);
    tokio::spawn(actor.run(()));

    assert!(client.get(42).await.unwrap().is_none());
    assert!(matches!(
        client.delete(42).await,
        Err(FrameworkError::NotFound(id)) if id == "42"
    ));
    assert!(matches!(
        client.perform_action(42, StockAction::Pick).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_concurrent_actions_are_serialized() {
    let (actor, client) = ResourceActor::<StockItem>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(create("TEA-01", 10)).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..15 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.perform_action(id, StockAction::Pick).await
        }));
    }

    let mut picked = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            picked += 1;
        }
    }
    assert_eq!(picked, 10);
    assert_eq!(client.get(id).await.unwrap().unwrap().on_hand, 0);
}
