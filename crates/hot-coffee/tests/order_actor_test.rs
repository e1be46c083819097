use hot_coffee::clients::{InventoryClient, MenuClient, OrderClient};
use hot_coffee::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use hot_coffee::model::{
    InventoryItem, MenuItem, MenuItemIngredient, Order, OrderCreate, OrderLine, OrderStatus,
};
use hot_coffee::order_actor::{self, OrderContext, OrderError};
use hot_coffee::storage::ORDERS_KEY;
use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError, MemoryBackend};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn menu() -> Vec<MenuItem> {
    vec![MenuItem::new(
        "latte",
        "Caffe Latte",
        "Espresso with steamed milk",
        dec!(3.5),
        vec![
            MenuItemIngredient::new("espresso_shot", dec!(1.0)),
            MenuItemIngredient::new("milk", dec!(200.0)),
        ],
    )]
}

/// Real Order actor over a memory backend, with mocked Menu and Inventory dependencies.
struct Harness {
    backend: Arc<MemoryBackend>,
    orders: OrderClient,
    menu_mock: MockClient<MenuItem>,
    inventory_mock: MockClient<InventoryItem>,
    handle: tokio::task::JoinHandle<()>,
}

impl Harness {
    async fn start() -> Self {
        let backend = Arc::new(MemoryBackend::new());
        let menu_mock = MockClient::<MenuItem>::new();
        let inventory_mock = MockClient::<InventoryItem>::new();

        let (actor, orders) = order_actor::open(backend.clone(), 8)
            .await
            .expect("Failed to open order store");
        let context = OrderContext::new(
            MenuClient::new(menu_mock.client()),
            InventoryClient::new(inventory_mock.client()),
        );
        let handle = tokio::spawn(actor.run(context));

        Self {
            backend,
            orders,
            menu_mock,
            inventory_mock,
            handle,
        }
    }

    async fn latte_order(&self, quantity: u32) -> Order {
        self.orders
            .create_order(OrderCreate::new(
                "Alice",
                vec![OrderLine::new("latte", quantity), OrderLine::new("latte", 1)],
            ))
            .await
            .expect("Failed to create order")
    }

    async fn stop(self) {
        self.menu_mock.verify();
        self.inventory_mock.verify();
        drop(self.orders);
        self.handle.await.unwrap();
    }
}

/// Pattern 2: Actor + Mocks. Closing sends exactly one transaction carrying the summed demand
/// and the staged orders file.
#[tokio::test]
async fn test_close_sends_demand_with_staged_orders() {
    let mut h = Harness::start().await;
    let order = h.latte_order(2).await;
    let commits_after_create = h.backend.commit_count();

    h.menu_mock.expect_list().return_ok(menu());
    h.inventory_mock.expect_transact().return_ok(vec![
        InventoryActionResult::Deducted { remaining: dec!(7.0) },
        InventoryActionResult::Deducted { remaining: dec!(400.0) },
    ]);

    let closed = h.orders.close_order(order.id).await.expect("Failed to close order");
    assert_eq!(closed.status, OrderStatus::Closed);

    let transactions = h.inventory_mock.take_transactions();
    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transactions[0].actions,
        vec![
            ("espresso_shot".to_string(), InventoryAction::Deduct(dec!(3.0))),
            ("milk".to_string(), InventoryAction::Deduct(dec!(600.0))),
        ]
    );
    let companions = &transactions[0].companions;
    assert_eq!(companions.len(), 1);
    assert_eq!(companions[0].key, ORDERS_KEY);
    let staged: Vec<Order> = serde_json::from_slice(&companions[0].bytes).unwrap();
    assert_eq!(staged[0].status, OrderStatus::Closed);

    // Publishing the orders file is left to the inventory side of the transaction.
    assert_eq!(h.backend.commit_count(), commits_after_create);
    let cached = h.orders.get(order.id).await.unwrap().unwrap();
    assert!(cached.is_closed());

    h.stop().await;
}

#[tokio::test]
async fn test_rejected_deduction_keeps_order_open() {
    let mut h = Harness::start().await;
    let order = h.latte_order(1).await;

    h.menu_mock.expect_list().return_ok(menu());
    h.inventory_mock
        .expect_transact()
        .return_err(FrameworkError::entity(InventoryError::InsufficientStock {
            ingredient_id: "milk".into(),
            required: dec!(400.0),
            available: dec!(150.0),
        }));

    let err = h.orders.close_order(order.id).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::InsufficientStock {
            ingredient_id: "milk".into(),
            required: dec!(400.0),
            available: dec!(150.0),
        }
    );
    let order = h.orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Open);
    assert!(order.closed_at.is_none());

    h.stop().await;
}

#[tokio::test]
async fn test_unknown_product_never_reaches_inventory() {
    let mut h = Harness::start().await;
    let order = h
        .orders
        .create_order(OrderCreate::new("Bob", vec![OrderLine::new("cortado", 1)]))
        .await
        .unwrap();

    h.menu_mock.expect_list().return_ok(menu());

    assert_eq!(
        h.orders.close_order(order.id).await.unwrap_err(),
        OrderError::ProductNotInMenu("cortado".into())
    );
    assert!(h.inventory_mock.take_transactions().is_empty());

    h.stop().await;
}

#[tokio::test]
async fn test_unreachable_menu_is_reported() {
    let mut h = Harness::start().await;
    let order = h.latte_order(1).await;

    h.menu_mock.expect_list().return_err(FrameworkError::ActorClosed);

    let err = h.orders.close_order(order.id).await.unwrap_err();
    assert!(
        matches!(err, OrderError::ActorCommunicationError(_)),
        "unexpected error: {err:?}"
    );

    h.stop().await;
}
