//! Typed CRUD wrappers for platform resources
//!
//! Every resource gets identical auth, error, and pagination handling by
//! construction: each operation is a thin, statically-typed call into
//! [`ApiClient::request`] that fixes the path, the verb, and the result
//! shape. [`ClassBridgeApi`] groups the wrappers for the endpoints this SDK
//! covers.

use std::marker::PhantomData;
use std::sync::Arc;

use classbridge_domain::constants::{
    ASSIGNMENTS_PATH, LESSON_PLANS_PATH, SCOPE_SEQUENCES_PATH, UNIT_PLANS_PATH,
};
use classbridge_domain::{Assignment, LessonPlan, ScopeAndSequence, UnitPlan};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::{ApiClient, RequestDescriptor};
use super::errors::ApiError;

/// Typed client for one resource collection.
///
/// `T` is the wire shape returned by the backend for this resource. Write
/// payloads are any `Serialize` value; their keys are snake-cased at the
/// write boundary.
pub struct ResourceClient<T> {
    client: Arc<ApiClient>,
    collection_path: &'static str,
    requires_auth: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResourceClient<T> {
    /// Wrapper for an authenticated resource collection.
    ///
    /// `collection_path` is the fixed, versioned path with trailing slash,
    /// e.g. `/plans/unit-plans/`.
    pub fn new(client: Arc<ApiClient>, collection_path: &'static str) -> Self {
        Self { client, collection_path, requires_auth: true, _marker: PhantomData }
    }

    /// Allow unauthenticated calls (public endpoints).
    pub fn unauthenticated(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    fn descriptor(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        if self.requires_auth {
            descriptor.authenticated()
        } else {
            descriptor
        }
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}{}/", self.collection_path, encode(id))
    }

    /// List all resources in the collection.
    #[instrument(skip(self, access_token), fields(path = %self.collection_path))]
    pub async fn list(
        &self,
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Vec<T>, ApiError> {
        let descriptor = self.descriptor(RequestDescriptor::get(self.collection_path));
        let items = self.client.request_list(&descriptor, tenant_domain, access_token).await?;

        debug!(count = items.len(), "resources listed");
        Ok(items)
    }

    /// List with filter/pagination query parameters.
    #[instrument(skip(self, access_token), fields(path = %self.collection_path))]
    pub async fn list_with_query(
        &self,
        query: &[(&str, &str)],
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Vec<T>, ApiError> {
        let mut descriptor = RequestDescriptor::get(self.collection_path);
        for (key, value) in query {
            descriptor = descriptor.with_query(*key, *value);
        }
        let descriptor = self.descriptor(descriptor);
        let items = self.client.request_list(&descriptor, tenant_domain, access_token).await?;

        debug!(count = items.len(), "resources listed");
        Ok(items)
    }

    /// Fetch a single resource by id.
    #[instrument(skip(self, access_token), fields(path = %self.collection_path))]
    pub async fn get(
        &self,
        id: &str,
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let descriptor = self.descriptor(RequestDescriptor::get(self.item_path(id)));
        self.client.request(&descriptor, tenant_domain, access_token).await
    }

    /// Create a resource from `body` and return the created row.
    #[instrument(skip(self, body, access_token), fields(path = %self.collection_path))]
    pub async fn create<B: Serialize>(
        &self,
        body: &B,
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let descriptor =
            self.descriptor(RequestDescriptor::post(self.collection_path).with_body(body)?);
        let created: T = self.client.request(&descriptor, tenant_domain, access_token).await?;

        debug!("resource created");
        Ok(created)
    }

    /// Replace a resource by id and return the updated row.
    #[instrument(skip(self, body, access_token), fields(path = %self.collection_path))]
    pub async fn update<B: Serialize>(
        &self,
        id: &str,
        body: &B,
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let descriptor =
            self.descriptor(RequestDescriptor::put(self.item_path(id)).with_body(body)?);
        self.client.request(&descriptor, tenant_domain, access_token).await
    }

    /// Delete a resource by id. Success returns no body.
    #[instrument(skip(self, access_token), fields(path = %self.collection_path))]
    pub async fn delete(
        &self,
        id: &str,
        tenant_domain: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<(), ApiError> {
        let descriptor = self.descriptor(RequestDescriptor::delete(self.item_path(id)));
        self.client.request::<()>(&descriptor, tenant_domain, access_token).await?;

        debug!("resource deleted");
        Ok(())
    }
}

/// Typed wrappers for the platform endpoints covered by this SDK.
pub struct ClassBridgeApi {
    pub scope_sequences: ResourceClient<ScopeAndSequence>,
    pub unit_plans: ResourceClient<UnitPlan>,
    pub lesson_plans: ResourceClient<LessonPlan>,
    pub assignments: ResourceClient<Assignment>,
}

impl ClassBridgeApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            scope_sequences: ResourceClient::new(client.clone(), SCOPE_SEQUENCES_PATH),
            unit_plans: ResourceClient::new(client.clone(), UNIT_PLANS_PATH),
            lesson_plans: ResourceClient::new(client.clone(), LESSON_PLANS_PATH),
            assignments: ResourceClient::new(client, ASSIGNMENTS_PATH),
        }
    }
}
