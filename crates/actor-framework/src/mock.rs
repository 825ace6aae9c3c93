//! # Mocks for testing code that talks to actors
//!
//! Two styles are supported:
//!
//! - **Scripted** ([`MockClient`]): queue the responses you expect, in order,
//!   then hand `mock.client()` to the code under test. Any request that does not
//!   match the next queued expectation panics the mock task, which surfaces as
//!   [`FrameworkError::ActorDropped`] at the call site.
//! - **Manual** ([`create_mock_client`] plus [`expect_create`], [`expect_get`],
//!   [`expect_find`], [`expect_update`], [`expect_action`]): receive raw requests
//!   from the channel, assert on their payloads and answer them yourself.
//!
//! Scripted mocks are the quickest way to inject failures that a real actor
//! never produces, such as a store that goes away mid-request:
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Wishlist { id: u32 }
//! #[derive(Debug)] struct WishlistCreate;
//! #[derive(Debug)] struct WishlistUpdate;
//! #[derive(Debug)] enum WishlistAction {}
//! #[derive(Debug, thiserror::Error)] #[error("wishlist error")] struct WishlistError;
//!
//! #[async_trait]
//! impl ActorEntity for Wishlist {
//!     type Id = u32; type Create = WishlistCreate; type Update = WishlistUpdate;
//!     type Action = WishlistAction; type ActionResult = (); type Context = (); type Error = WishlistError;
//!     fn from_create_params(id: u32, _: WishlistCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: WishlistUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: WishlistAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Wishlist>::new();
//!     mock.expect_find().return_ok(vec![Wishlist { id: 7 }]);
//!     mock.expect_update(7).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.find(|_| true).await.unwrap().len(), 1);
//!     assert!(matches!(
//!         client.update(7, WishlistUpdate).await,
//!         Err(FrameworkError::ActorClosed)
//!     ));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Filter, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Find(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client answering from a queue of scripted responses.
///
/// Requests carrying an id are checked against the id given to the
/// corresponding `expect_*` call.
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
                let next = queue.lock().unwrap().pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> Expect<T, T::Id> {
        self.expect(Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        self.expect(move |response| Expectation::Get(id, response))
    }

    pub fn expect_find(&mut self) -> Expect<T, Vec<T>> {
        self.expect(Expectation::Find)
    }

    pub fn expect_update(&mut self, id: T::Id) -> Expect<T, T> {
        self.expect(move |response| Expectation::Update(id, response))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> Expect<T, ()> {
        self.expect(move |response| Expectation::Delete(id, response))
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<T, T::ActionResult> {
        self.expect(move |response| Expectation::Action(id, response))
    }

    /// Panics unless every queued expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn expect<R>(
        &mut self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Expect<T, R> {
        Expect {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Pending expectation; finish it with `return_ok` or `return_err`.
pub struct Expect<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> Expect<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, next: Option<Expectation<T>>) {
    fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
        let _ = respond_to.send(response);
    }

    match (request, next) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
            reply(respond_to, response)
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response))) => {
            assert_eq!(id, expected, "get called with unexpected id");
            reply(respond_to, response)
        }
        (ResourceRequest::Find { respond_to, .. }, Some(Expectation::Find(response))) => {
            reply(respond_to, response)
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update(expected, response)),
        ) => {
            assert_eq!(id, expected, "update called with unexpected id");
            reply(respond_to, response)
        }
        (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete(expected, response))) => {
            assert_eq!(id, expected, "delete called with unexpected id");
            reply(respond_to, response)
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action(expected, response)),
        ) => {
            assert_eq!(id, expected, "action called with unexpected id");
            reply(respond_to, response)
        }
        (request, _) => panic!(
            "Unexpected request or expectation mismatch: {}",
            request_kind(&request)
        ),
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Find { .. } => "Find",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

/// Creates a client whose requests arrive on the returned receiver.
///
/// Use this when the test needs to inspect request payloads, which the
/// scripted [`MockClient`] discards.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Find. The filter is returned so the test can
/// probe it against sample entities.
pub async fn expect_find<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
