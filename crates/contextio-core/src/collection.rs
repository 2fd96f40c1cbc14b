//! Query and creation scopes over one resource kind

use crate::resource::CollectionKind;
use crate::{Api, CoreError, CoreResult, Link, Owners, Resource, Routable, UrlError, Variant};
use contextio_http::{Method, Params};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// A scope over many resources of one kind, optionally owned by a parent and
/// narrowed by filter constraints.
pub struct Collection<K: CollectionKind> {
    api: Api,
    owners: Owners,
    constraints: Params,
    _kind: PhantomData<fn() -> K>,
}

impl<K: CollectionKind> Collection<K> {
    pub fn new(api: Api, owners: Owners) -> Self {
        Self {
            api,
            owners,
            constraints: Params::new(),
            _kind: PhantomData,
        }
    }

    /// A copy of this collection with additional constraints. Later values
    /// override earlier ones with the same name.
    pub fn filter(&self, constraints: Params) -> Self {
        let mut merged = self.constraints.clone();
        merged.extend(constraints);

        Self {
            api: self.api.clone(),
            owners: self.owners.clone(),
            constraints: merged,
            _kind: PhantomData,
        }
    }

    pub fn constraints(&self) -> &Params {
        &self.constraints
    }

    pub fn owners(&self) -> &Owners {
        &self.owners
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    /// API path of this collection
    pub fn path(&self) -> Result<String, UrlError> {
        self.api.resolve(self)
    }

    /// A member identified by `key`, owned like this collection. No request
    /// is made.
    pub fn get(&self, key: impl Into<String>) -> Arc<Resource<K>> {
        Arc::new(Resource::new(self.api.clone(), key, self.owners.clone()))
    }

    /// List the members matching the current constraints
    pub async fn fetch(&self) -> CoreResult<Vec<Arc<Resource<K>>>> {
        let path = self.path()?;
        let body = self
            .api
            .request(Method::Get, &path, &self.constraints)
            .await?;

        let entries = body.as_array().ok_or_else(|| {
            CoreError::InvalidPayload(format!("{} listing is not an array", K::COLLECTION))
        })?;

        let members = entries
            .iter()
            .map(|entry| {
                Resource::from_payload(self.api.clone(), self.owners.clone(), entry).map(Arc::new)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        debug!("Fetched {} members of {}", members.len(), K::COLLECTION);
        Ok(members)
    }

    /// Create a member. Caller fields are merged over the active constraints
    /// and checked against the kind's required fields before anything is
    /// sent. The new member is built from the create response, without a
    /// follow-up GET.
    pub async fn create(&self, fields: Params) -> CoreResult<Arc<Resource<K>>> {
        let required = K::REQUIRED_ON_CREATE.ok_or(CoreError::CreateUnsupported(K::COLLECTION))?;

        let mut merged = self.constraints.clone();
        merged.extend(fields);

        let missing = missing_fields(required, &merged);
        if !missing.is_empty() {
            return Err(CoreError::MissingFields {
                variant: K::COLLECTION,
                fields: missing,
            });
        }

        let path = self.path()?;
        let response = self.api.request(Method::Post, &path, &merged).await?;

        let created = Resource::from_created(self.api.clone(), self.owners.clone(), merged, response)?;

        info!(
            "Created {} at {} (key={:?})",
            K::VARIANT,
            path,
            created.key()
        );
        Ok(Arc::new(created))
    }
}

/// Required fields absent (or null) in `fields`, in declaration order
fn missing_fields(required: &[&str], fields: &Params) -> Vec<String> {
    required
        .iter()
        .filter(|name| fields.get(**name).map_or(true, serde_json::Value::is_null))
        .map(|name| name.to_string())
        .collect()
}

impl<K: CollectionKind> Clone for Collection<K> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            owners: self.owners.clone(),
            constraints: self.constraints.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: CollectionKind> Routable for Collection<K> {
    fn variant(&self) -> Variant {
        K::COLLECTION
    }

    fn key(&self) -> Option<&str> {
        None
    }

    fn parent(&self, link: Link) -> Option<&dyn Routable> {
        self.owners.get(link)
    }
}

impl<K: CollectionKind> fmt::Debug for Collection<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::COLLECTION.name())
            .field("owners", &self.owners)
            .field("constraints", &self.constraints)
            .finish()
    }
}
