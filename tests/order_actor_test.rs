use std::collections::HashSet;
use std::sync::Arc;

use warung_order::clients::OrderSink;
use warung_order::model::{MenuCatalog, MenuItem, OrderLine};
use warung_order::order_actor::{self, OrderError, OrderRequest};

fn line(name: &str, quantity: u32) -> OrderLine {
    OrderLine::new(&MenuItem::new(name, 12.5), quantity).unwrap()
}

fn catalog(size: usize) -> Arc<MenuCatalog> {
    Arc::new(MenuCatalog::new(
        (0..size).map(|i| MenuItem::new(format!("item_{}", i), 12.5)).collect(),
    ))
}

/// Many concurrent appenders: every line lands exactly once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends() {
    for n in [0usize, 1, 7, 250] {
        let (actor, client) = order_actor::new(4, catalog(n));
        let actor_handle = tokio::spawn(actor.run());

        let mut handles = vec![];
        for i in 0..n {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client.append(line(&format!("item_{}", i), 1)).await
            }));
        }

        let mut sizes = HashSet::new();
        for handle in handles {
            let size = handle.await.unwrap().expect("Append failed");
            assert!(sizes.insert(size), "Length {} acknowledged twice", size);
        }
        assert_eq!(sizes, (1..=n).collect::<HashSet<_>>());

        let list = client.snapshot().await.unwrap();
        let names: HashSet<_> = list.iter().map(|l| l.name.clone()).collect();
        assert_eq!(list.len(), n);
        assert_eq!(names.len(), n);

        drop(client);
        assert_eq!(actor_handle.await.unwrap().len(), n);
    }
}

/// Lines built outside the collector still cannot carry a zero quantity
/// or name something that is not on the menu.
#[tokio::test]
async fn test_invalid_lines_rejected_by_actor() {
    let (actor, client) = order_actor::new(4, Arc::new(MenuCatalog::default()));
    let actor_handle = tokio::spawn(actor.run());

    let mut zero = line("Mie Kuah", 1);
    zero.quantity = 0;
    let result = client.append(zero).await;
    assert!(matches!(result, Err(OrderError::InvalidLine(_))));

    let unknown = OrderLine::new(&MenuItem::new("Es Teh", 5.0), 1).unwrap();
    let result = client.append(unknown).await;
    assert!(matches!(result, Err(OrderError::InvalidLine(_))));
    assert!(client.snapshot().await.unwrap().is_empty());

    assert_eq!(client.append(line("Mie Kuah", 2)).await, Ok(1));

    drop(client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_actor() {
    let (actor, client) = order_actor::new(4, catalog(1));
    drop(actor);
    assert_eq!(client.append(line("Nasi Goreng", 1)).await, Err(OrderError::ActorClosed));
}

/// A hand-driven actor stand-in that drops the response channel.
#[tokio::test]
async fn test_dropped_response() {
    let (sender, mut receiver) = tokio::sync::mpsc::channel(4);
    let client = warung_order::clients::OrderClient::new(sender);
    tokio::spawn(async move {
        while let Some(request) = receiver.recv().await {
            match request {
                OrderRequest::Append { respond_to, .. } => drop(respond_to),
                OrderRequest::Snapshot { respond_to } => drop(respond_to),
            }
        }
    });
    assert_eq!(client.append(line("Nasi Goreng", 1)).await, Err(OrderError::ActorDropped));
    assert_eq!(client.snapshot().await, Err(OrderError::ActorDropped));
}
