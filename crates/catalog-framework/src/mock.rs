//! # Mock Clients
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running actor. Use it
//! to test code that *talks to* an actor (a member borrowing from a mocked
//! library) without standing up the actor it talks to.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | scripted replies | real store |
//! | **Error injection** | `return_err` | needs matching state |
//! | **Use case** | logic around a client | the actor itself, full system |
//!
//! ```rust
//! use catalog_framework::mock::MockClient;
//! use catalog_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Volume { barcode: String }
//! #[derive(Debug)] struct VolumeCreate { barcode: String }
//! #[derive(Debug)] struct VolumeUpdate;
//! #[derive(Debug)] enum VolumeAction {}
//! #[derive(Debug, thiserror::Error)] #[error("copy error")] struct VolumeError;
//!
//! #[async_trait]
//! impl ActorEntity for Volume {
//!     type Id = String; type Create = VolumeCreate; type Update = VolumeUpdate;
//!     type Action = VolumeAction; type ActionResult = (); type Context = (); type Error = VolumeError;
//!     fn key_of(params: &VolumeCreate) -> String { params.barcode.clone() }
//!     fn from_create_params(id: String, _: VolumeCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { barcode: id })
//!     }
//!     async fn on_update(&mut self, _: VolumeUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: VolumeAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Volume>::new();
//!     mock.expect_get("B-7".to_string()).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let result = client.get("B-7".to_string()).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next queued expectation (wrong kind or
//! wrong key) makes the mock drop the reply channel, so the caller sees
//! [`FrameworkError::ActorDropped`] and the mismatch is logged at `error`.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A queued reply, tagged with the request it answers.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        reply(respond_to, response)
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        reply(respond_to, response)
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        reply(respond_to, response)
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response }))
                        if id == want =>
                    {
                        reply(respond_to, response)
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) if id == want => reply(respond_to, response),
                    (request, _) => {
                        tracing::error!(
                            operation = request.operation(),
                            "Unexpected request or expectation mismatch"
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .push_back(expectation);
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> Expect<'_, T, Option<T>> {
        Expect::new(self, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> Expect<'_, T, T::Id> {
        Expect::new(self, |response| Expectation::Create { response })
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> Expect<'_, T, Vec<T>> {
        Expect::new(self, |response| Expectation::List { response })
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> Expect<'_, T, ()> {
        Expect::new(self, move |response| Expectation::Delete { id, response })
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> Expect<'_, T, T::ActionResult> {
        Expect::new(self, move |response| Expectation::Action { id, response })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods; finish with `return_ok` or `return_err`.
pub struct Expect<'a, T: ActorEntity, R> {
    mock: &'a MockClient<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: ActorEntity, R> Expect<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            make: Box::new(make),
        }
    }

    /// Queues a successful reply.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.make)(Ok(value)));
    }

    /// Queues an error reply.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.make)(Err(error)));
    }
}

/// Creates a client together with the receiver its requests land on.
///
/// For tests that want to inspect each request by hand rather than queue
/// replies up front. See [`expect_action`].
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Desk {
        code: String,
    }

    #[derive(Debug)]
    struct DeskCreate {
        code: String,
    }

    #[derive(Debug)]
    struct DeskUpdate;

    #[derive(Debug)]
    enum DeskAction {
        Reserve,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("desk error")]
    struct DeskError;

    #[async_trait]
    impl ActorEntity for Desk {
        type Id = String;
        type Create = DeskCreate;
        type Update = DeskUpdate;
        type Action = DeskAction;
        type ActionResult = bool;
        type Context = ();
        type Error = DeskError;

        fn key_of(params: &DeskCreate) -> String {
            params.code.clone()
        }

        fn from_create_params(id: String, _params: DeskCreate) -> Result<Self, Self::Error> {
            Ok(Self { code: id })
        }

        async fn on_update(&mut self, _update: DeskUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: DeskAction, _ctx: &()) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Desk>::new();
        mock.expect_create().return_ok("D1".to_string());
        mock.expect_get("D1".to_string())
            .return_ok(Some(Desk { code: "D1".into() }));
        mock.expect_list().return_ok(vec![Desk { code: "D1".into() }]);

        let client = mock.client();
        let id = client.create(DeskCreate { code: "D1".into() }).await.unwrap();
        assert_eq!(id, "D1");
        assert!(client.get("D1".to_string()).await.unwrap().is_some());
        assert_eq!(client.list().await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_key_drops_reply() {
        let mut mock = MockClient::<Desk>::new();
        mock.expect_delete("D1".to_string()).return_ok(());

        let result = mock.client().delete("D2".to_string()).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    async fn test_manual_receiver() {
        let (client, mut receiver) = create_mock_client::<Desk>(10);

        let task = tokio::spawn(async move {
            client.perform_action("D9".to_string(), DeskAction::Reserve).await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "D9");
        assert!(matches!(action, DeskAction::Reserve));
        responder.send(Ok(false)).unwrap();

        assert!(!task.await.unwrap().unwrap());
    }
}
