//! # Generic Registry Actor
//!
//! This module defines the `RegistryActor`, the server half of a registry. It owns one
//! named store and processes requests for it sequentially.

use crate::client::RegistryClient;
use crate::entity::RecordEntity;
use crate::error::{RegistryError, StoreError};
use crate::message::RegistryRequest;
use crate::store::{Document, Record, RecordStore};
use serde_json::Value;
use std::marker::PhantomData;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages one store of entities.
///
/// # Persistence Model
/// The actor keeps no records in memory. Every request loads the store from the
/// [`RecordStore`], applies the entity hooks and, if anything changed, saves the whole
/// document back. The file on disk is the single source of truth, and edits made to
/// it between requests are picked up by the next request.
///
/// # Concurrency Model
/// Requests are handled one at a time in the actor's task, so a load-mutate-save
/// cycle on its store is never interleaved with another one from the same process.
/// Two clients reserving the last room of a hotel are serialized: one wins, the
/// other sees zero availability. Nothing guards against other processes writing
/// the same file.
///
/// # Usage Pattern
///
/// 1.  **Create**: `RegistryActor::new()` returns the `actor` (server) and `client` (interface).
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use record_actor::{RecordEntity, RecordStore, RegistryActor};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// record_actor::record_id!(Note);
///
/// #[derive(Clone, Debug, Serialize, Deserialize)] struct Note { text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl RecordEntity for Note {
///     type Id = NoteId;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(_: NoteId, p: NoteCreate) -> Result<Self, NoteError> { Ok(Self { text: p.text }) }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), NoteError> { Ok(()) }
///     async fn handle_action(&mut self, a: NoteAction, _: &()) -> Result<(), NoteError> { match a {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let dir = std::env::temp_dir().join("record-actor-doc");
///     let (actor, client) = RegistryActor::<Note>::new(10, RecordStore::new(&dir), "notes.json");
///     tokio::spawn(actor.run(()));
///
///     let _ = client.create(NoteId::from("n1"), NoteCreate { text: "hello".into() }).await;
///     let note = client.get(NoteId::from("n1")).await.unwrap();
///     assert!(note.is_some());
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: refuses an existing id (unless [`RecordEntity::REPLACE_ON_CREATE`]), builds
///   the entity, runs `on_create`, then reloads the store, inserts and saves.
/// * **Get**: returns the decoded record, or `None`.
/// * **Contains**: reports whether the key is present without decoding the record.
/// * **List**: returns every decodable record in key order.
/// * **Update**: runs `on_update` on the decoded record and saves the result.
/// * **Delete**: runs `on_delete`, then reloads the store, removes and saves.
/// * **Action**: runs `handle_action` and saves only if the record changed.
pub struct RegistryActor<T: RecordEntity> {
    receiver: mpsc::Receiver<RegistryRequest<T>>,
    table: Table<T>,
}

impl<T: RecordEntity> RegistryActor<T> {
    /// Creates a new `RegistryActor` for `store` and its associated `RegistryClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    /// * `records` - The record store holding the document.
    /// * `store` - Name of the document inside `records` (e.g. `"hotels.json"`).
    pub fn new(
        buffer_size: usize,
        records: RecordStore,
        store: impl Into<String>,
    ) -> (Self, RegistryClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            table: Table {
                records,
                store: store.into(),
                entity_type: entity_type_name::<T>(),
                _entity: PhantomData,
            },
        };
        (actor, RegistryClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook, which is how a registry reaches the
    /// clients of the registries it depends on.
    pub async fn run(self, context: T::Context) {
        let Self {
            mut receiver,
            table,
        } = self;
        let entity_type = table.entity_type;
        info!(entity_type, store = %table.store, "Registry started");

        while let Some(msg) = receiver.recv().await {
            match msg {
                RegistryRequest::Create {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Create");
                    let result = table.create(id.clone(), params, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Created"),
                        Err(e) => table.report("create", &id, e),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Get { id, respond_to } => {
                    let result = table.get(&id).await;
                    match &result {
                        Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                        Err(e) => table.report("get", &id, e),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Contains { id, respond_to } => {
                    let result = table.contains(&id).await;
                    match &result {
                        Ok(found) => debug!(entity_type, %id, found, "Contains"),
                        Err(e) => table.report("contains", &id, e),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::List { respond_to } => {
                    let result = table.list().await;
                    match &result {
                        Ok(items) => debug!(entity_type, size = items.len(), "List"),
                        Err(e) => error!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = table.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => table.report("update", &id, e),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = table.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, "Deleted"),
                        Err(e) => table.report("delete", &id, e),
                    }
                    let _ = respond_to.send(result);
                }
                RegistryRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = table.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => table.report("action", &id, e),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, store = %table.store, "Shutdown");
    }
}

/// One named store plus the codec between its records and `T`.
struct Table<T> {
    records: RecordStore,
    store: String,
    entity_type: &'static str,
    _entity: PhantomData<fn() -> T>,
}

impl<T: RecordEntity> Table<T> {
    async fn create(
        &self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, RegistryError> {
        let key = id.to_string();
        if !T::REPLACE_ON_CREATE && self.load().await?.contains_key(&key) {
            return Err(RegistryError::AlreadyExists(key));
        }

        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;

        let mut document = self.load().await?;
        if document.contains_key(&key) {
            warn!(entity_type = self.entity_type, id = %key, "Replacing existing record");
        }
        document.insert(key, self.encode(&item)?);
        self.save(&document).await?;
        Ok(id)
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>, RegistryError> {
        let key = id.to_string();
        let mut document = self.load().await?;
        document
            .remove(&key)
            .map(|record| decode(&key, record))
            .transpose()
    }

    async fn contains(&self, id: &T::Id) -> Result<bool, RegistryError> {
        Ok(self.load().await?.contains_key(&id.to_string()))
    }

    async fn list(&self) -> Result<Vec<(T::Id, T)>, RegistryError> {
        let document = self.load().await?;
        let mut items = Vec::with_capacity(document.len());
        for (key, record) in document {
            match decode::<T>(&key, record) {
                Ok(item) => items.push((T::Id::from(key), item)),
                Err(e) => warn!(entity_type = self.entity_type, error = %e, "Skipping record"),
            }
        }
        Ok(items)
    }

    async fn update(
        &self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, RegistryError> {
        let key = id.to_string();
        let mut document = self.load().await?;
        let record = document
            .remove(&key)
            .ok_or_else(|| RegistryError::NotFound(key.clone()))?;
        let mut item = decode::<T>(&key, record)?;

        item.on_update(update, context).await.map_err(entity_error)?;

        document.insert(key, self.encode(&item)?);
        self.save(&document).await?;
        Ok(item)
    }

    async fn delete(&self, id: &T::Id, context: &T::Context) -> Result<(), RegistryError> {
        let key = id.to_string();
        let record = self
            .load()
            .await?
            .remove(&key)
            .ok_or_else(|| RegistryError::NotFound(key.clone()))?;
        let item = decode::<T>(&key, record)?;

        item.on_delete(context).await.map_err(entity_error)?;

        let mut document = self.load().await?;
        document.remove(&key);
        self.save(&document).await
    }

    async fn action(
        &self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, RegistryError> {
        let key = id.to_string();
        let mut document = self.load().await?;
        let before = document
            .remove(&key)
            .ok_or_else(|| RegistryError::NotFound(key.clone()))?;
        let mut item = decode::<T>(&key, before.clone())?;

        let result = item
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;

        let after = self.encode(&item)?;
        if after != before {
            document.insert(key, after);
            self.save(&document).await?;
        }
        Ok(result)
    }

    async fn load(&self) -> Result<Document, RegistryError> {
        Ok(self.records.load(&self.store).await?)
    }

    async fn save(&self, document: &Document) -> Result<(), RegistryError> {
        Ok(self.records.save(&self.store, document).await?)
    }

    fn encode(&self, item: &T) -> Result<Record, RegistryError> {
        let encode_error = |source| StoreError::Encode {
            store: self.store.clone(),
            source,
        };
        match serde_json::to_value(item).map_err(encode_error)? {
            Value::Object(record) => Ok(record),
            _ => Err(encode_error(serde::ser::Error::custom(
                "record must serialize to a JSON object",
            ))
            .into()),
        }
    }

    fn report(&self, op: &'static str, id: &T::Id, e: &RegistryError) {
        let entity_type = self.entity_type;
        match e {
            RegistryError::NotFound(_)
            | RegistryError::AlreadyExists(_)
            | RegistryError::EntityError(_) => {
                warn!(entity_type, %id, op, error = %e, "Request refused")
            }
            _ => error!(entity_type, %id, op, store = %self.store, error = %e, "Request failed"),
        }
    }
}

fn decode<T: RecordEntity>(key: &str, record: Record) -> Result<T, RegistryError> {
    serde_json::from_value(Value::Object(record)).map_err(|source| RegistryError::CorruptRecord {
        id: key.to_string(),
        source,
    })
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> RegistryError {
    RegistryError::EntityError(Box::new(e))
}

/// Just the type name (e.g. "Hotel" instead of "hotel_reservations::model::hotel::Hotel").
fn entity_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
