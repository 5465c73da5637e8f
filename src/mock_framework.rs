//! # Mock Framework
//!
//! Utilities for testing store consumers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_save`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// No `ResourceActor` runs behind the client. The test reads each request off
/// `receiver` and answers through its responder, so success, failure and the
/// exact sequence of store calls are under the test's control.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Asserts that nothing is queued on the receiver.
///
/// Only meaningful once the code under test has finished, e.g. after its
/// task has been awaited.
pub fn expect_no_request<T: Entity>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) {
    if let Ok(request) = receiver.try_recv() {
        panic!("Unexpected store request: {:?}", request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let get_task = tokio::spawn(async move {
            client.get("Tea".to_string()).await
        });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "Tea");
        responder.send(Ok(Some(Product::new("Tea", 4)))).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result, Ok(Some(Product::new("Tea", 4))));
        expect_no_request(&mut receiver);
    }
}
