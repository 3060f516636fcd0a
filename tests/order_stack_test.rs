use order_board::model::{OrderCreate, OrderNumber, OrderStatus};
use order_board::order_stack::{display_all, NumberingPolicy, OrderStack, OrderStackError, StackConfig};

fn order(customer: &str, item: &str) -> OrderCreate {
    OrderCreate::new(customer, item, 1)
}

fn render_all(stack: &OrderStack) -> String {
    let mut out = Vec::new();
    display_all(&mut out, stack).expect("Failed to render stack");
    String::from_utf8(out).expect("Rendered text is not UTF-8")
}

/// Pops come back in exact reverse order of the pushes.
#[test]
fn test_pop_returns_reverse_insertion_order() {
    let mut stack = OrderStack::new();
    let customers = ["Ana", "Bruno", "Carla", "Davi", "Elisa"];
    for customer in customers {
        stack.insert(order(customer, "Soup")).expect("Failed to insert order");
    }

    let popped: Vec<String> = std::iter::from_fn(|| stack.pop().ok())
        .map(|order| order.customer_name().to_string())
        .collect();

    let mut expected: Vec<String> = customers.iter().map(|c| c.to_string()).collect();
    expected.reverse();
    assert_eq!(popped, expected);
    assert!(stack.is_empty());
}

/// Popping an empty stack reports it and leaves the stack as it was.
#[test]
fn test_pop_on_empty_stack() {
    let mut stack = OrderStack::new();

    assert_eq!(stack.pop(), Err(OrderStackError::Empty));
    assert_eq!(stack.pop(), Err(OrderStackError::Empty));
    assert!(stack.is_empty());
    assert!(stack.peek().is_none());

    // Numbering is unaffected by the failed pops
    let number = stack.insert(order("Ana", "Tea")).expect("Failed to insert order");
    assert_eq!(number, OrderNumber(1));
}

/// Lookups see the topmost order when several share a number.
#[test]
fn test_find_returns_topmost_duplicate() {
    let mut stack = OrderStack::new();
    let older = stack.create(OrderNumber(4), order("older", "Rice")).unwrap();
    let newer = stack.create(OrderNumber(4), order("newer", "Beans")).unwrap();
    stack.push(older);
    stack.push(newer);

    let found = stack.find_by_number(OrderNumber(4)).expect("Order not found");
    assert_eq!(found.customer_name(), "newer");
    assert!(stack.find_by_number(OrderNumber(5)).is_none());
}

/// Advancing walks every stage once, then refuses without changing anything.
#[test]
fn test_status_progression_stops_at_delivered() {
    let mut stack = OrderStack::new();
    let number = stack.insert(order("Ana", "Pizza")).unwrap();

    let mut reached = Vec::new();
    for _ in 0..5 {
        reached.push(stack.advance_status(number));
    }

    assert_eq!(
        reached,
        vec![
            Ok(OrderStatus::Preparing),
            Ok(OrderStatus::Ready),
            Ok(OrderStatus::Delivered),
            Err(OrderStackError::AlreadyDelivered(number)),
            Err(OrderStackError::AlreadyDelivered(number)),
        ]
    );
    assert_eq!(
        stack.find_by_number(number).unwrap().status(),
        OrderStatus::Delivered
    );
}

/// Clearing releases every order; clearing again is a successful no-op.
#[test]
fn test_clear_releases_every_order() {
    let mut stack = OrderStack::new();
    for i in 0..4 {
        stack.insert(OrderCreate::new("Ana", "Juice", i + 1)).unwrap();
    }

    assert_eq!(stack.clear(), 4);
    assert!(stack.is_empty());
    assert_eq!(render_all(&stack), "No orders registered.\n");

    assert_eq!(stack.clear(), 0);
    assert!(stack.is_empty());
}

/// Full walk-through: list, pop, look up the new top and deliver it.
#[test]
fn test_order_board_scenario() {
    let mut stack = OrderStack::new();
    for (customer, item) in [("Ana", "Pizza"), ("Bruno", "Salad"), ("Carla", "Pasta")] {
        stack.insert(order(customer, item)).unwrap();
    }

    // Listing starts at the top
    let listing = render_all(&stack);
    let positions: Vec<usize> = ["Order No.: 003", "Order No.: 002", "Order No.: 001"]
        .iter()
        .map(|needle| listing.find(needle).expect("Order missing from listing"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // Pop hands back order 3
    let popped = stack.pop().expect("Failed to pop");
    assert_eq!(popped.number(), OrderNumber(3));
    assert_eq!(popped.customer_name(), "Carla");
    drop(popped);

    // Order 2 is now the top
    let top = stack.find_by_number(OrderNumber(2)).expect("Order not found");
    assert_eq!(top.customer_name(), "Bruno");
    assert_eq!(stack.peek(), Some(top));

    // Deliver it, then try once more
    for _ in 0..3 {
        stack.advance_status(OrderNumber(2)).expect("Failed to advance");
    }
    assert_eq!(
        stack.advance_status(OrderNumber(2)),
        Err(OrderStackError::AlreadyDelivered(OrderNumber(2)))
    );
    assert_eq!(stack.peek().unwrap().status(), OrderStatus::Delivered);
    assert_eq!(
        stack.find_by_number(OrderNumber(1)).unwrap().status(),
        OrderStatus::Pending
    );
}

/// Orders, statuses and configuration serialize with plain field and variant names.
#[test]
fn test_model_serialization() {
    let mut stack = OrderStack::with_config(StackConfig {
        numbering: NumberingPolicy::StackDepth,
        ..StackConfig::default()
    });
    stack.insert(OrderCreate::new("Ana", "Pizza", 2)).unwrap();
    stack.advance_status(OrderNumber(1)).unwrap();

    let json = serde_json::to_value(stack.peek().unwrap()).expect("Failed to serialize order");
    assert_eq!(
        json,
        serde_json::json!({
            "number": 1,
            "customer_name": "Ana",
            "item_description": "Pizza",
            "quantity": 2,
            "status": "Preparing"
        })
    );

    let config: StackConfig = serde_json::from_value(serde_json::json!({
        "numbering": "ChainLength",
        "max_customer_len": 10,
        "max_item_len": 20,
        "overflow": "Truncate"
    }))
    .expect("Failed to deserialize config");
    assert_eq!(config.numbering, NumberingPolicy::ChainLength);
    assert_eq!(config.max_item_len, 20);
}
