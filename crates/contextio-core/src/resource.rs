//! Lazily resolved resources
//!
//! A [`Resource`] knows its identifying key and its parents up front. Its
//! remaining attributes are fetched with a single GET on its own path the
//! first time one of them is read that was not supplied at construction,
//! then kept for the lifetime of the instance.

use crate::{Api, CoreError, CoreResult, Link, Owners, Routable, UrlError, Variant};
use contextio_http::{Method, Params};
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use std::fmt;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Compile-time description of one resource kind
pub trait Kind: Send + Sync + 'static {
    const VARIANT: Variant;

    /// Payload field holding the identifying path segment
    const PRIMARY_KEY: &'static str;

    /// Declared lazy attributes, all populated from one response
    type Attributes: AttributeSet;
}

/// A kind's set of lazy attributes, every one optional
pub trait AttributeSet: DeserializeOwned + Default + fmt::Debug + Send + Sync {
    /// Replace each attribute with the one `seed` holds, where it holds one
    fn overlay(&mut self, seed: &Self);
}

/// A kind that can be listed (and possibly created) through a collection
pub trait CollectionKind: Kind {
    const COLLECTION: Variant;

    /// Fields a create request must carry, or `None` if the collection
    /// cannot create members
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> = None;
}

pub struct Resource<K: Kind> {
    api: Api,
    key: Option<String>,
    owners: Owners,
    query: Params,
    seed: K::Attributes,
    fetched: OnceCell<K::Attributes>,
}

impl<K: Kind> Resource<K> {
    /// A resource identified by `key` with nothing fetched yet
    pub fn new(api: Api, key: impl Into<String>, owners: Owners) -> Self {
        Self::build(api, Some(key.into()), owners, K::Attributes::default())
    }

    /// A resource with no identifying segment of its own
    pub fn unkeyed(api: Api, owners: Owners) -> Self {
        Self::build(api, None, owners, K::Attributes::default())
    }

    /// Build a resource from a JSON object, e.g. one entry of a listing.
    ///
    /// The key is read from the kind's primary key field; any declared
    /// attributes present in the payload are served without a fetch.
    pub fn from_payload(
        api: Api,
        owners: Owners,
        payload: &serde_json::Value,
    ) -> CoreResult<Self> {
        let object = payload.as_object().ok_or_else(|| {
            CoreError::InvalidPayload(format!("{} payload is not an object", K::VARIANT))
        })?;

        let key = primary_key::<K>(object);
        let seed = serde_json::from_value(payload.clone())?;

        Ok(Self::build(api, key, owners, seed))
    }

    /// The member a create request produced. The key comes from the
    /// response only; submitted fields and the response both seed
    /// attributes, the response winning on shared names.
    pub(crate) fn from_created(
        api: Api,
        owners: Owners,
        submitted: Params,
        response: serde_json::Value,
    ) -> CoreResult<Self> {
        let returned = match response {
            serde_json::Value::Object(returned) => returned,
            _ => Params::new(),
        };
        let key = primary_key::<K>(&returned);

        let mut payload = submitted;
        payload.extend(returned);
        let seed = serde_json::from_value(serde_json::Value::Object(payload))?;

        Ok(Self::build(api, key, owners, seed))
    }

    fn build(api: Api, key: Option<String>, owners: Owners, seed: K::Attributes) -> Self {
        Self {
            api,
            key,
            owners,
            query: Params::new(),
            seed,
            fetched: OnceCell::new(),
        }
    }

    /// Query params sent along with the attribute fetch
    pub(crate) fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn owners(&self) -> &Owners {
        &self.owners
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    /// API path of this resource
    pub fn path(&self) -> Result<String, UrlError> {
        self.api.resolve(self)
    }

    /// Whether the attribute fetch has already happened
    pub fn is_fetched(&self) -> bool {
        self.fetched.initialized()
    }

    /// All declared attributes. The first call always fetches, even when
    /// every attribute was supplied at construction; supplied values are
    /// laid over the fetched ones in the returned set.
    pub async fn attributes(&self) -> CoreResult<&K::Attributes> {
        self.fetched
            .get_or_try_init(|| async {
                let path = self.path()?;
                debug!("Fetching attributes of {} at {}", K::VARIANT, path);
                let body = self.api.request(Method::Get, &path, &self.query).await?;
                let mut attributes: K::Attributes = serde_json::from_value(body)?;
                attributes.overlay(&self.seed);
                Ok::<_, CoreError>(attributes)
            })
            .await
    }

    /// Read one attribute. A value supplied at construction wins; otherwise
    /// the shared fetch is performed (at most once per instance).
    pub async fn attribute<T>(
        &self,
        pick: impl Fn(&K::Attributes) -> Option<T>,
    ) -> CoreResult<Option<T>> {
        if let Some(value) = pick(&self.seed) {
            return Ok(Some(value));
        }
        if let Some(fetched) = self.fetched.get() {
            return Ok(pick(fetched));
        }
        Ok(pick(self.attributes().await?))
    }

    /// Delete the remote resource. Returns the API's success flag.
    pub async fn delete(&self) -> CoreResult<bool> {
        let path = self.path()?;
        let body = self.api.request(Method::Delete, &path, &Params::new()).await?;
        let success = body
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        info!("Deleted {} at {} (success={})", K::VARIANT, path, success);
        Ok(success)
    }
}

/// Identifying segment from a payload's primary key field, string or number
fn primary_key<K: Kind>(object: &Params) -> Option<String> {
    match object.get(K::PRIMARY_KEY)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode one attribute, treating null or a value of another JSON type as
/// absent so a single odd field never rejects the whole payload.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) => {
            debug!("Ignoring attribute of unexpected type: {}", e);
            Ok(None)
        }
    }
}

impl<K: Kind> Routable for Resource<K> {
    fn variant(&self) -> Variant {
        K::VARIANT
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn parent(&self, link: Link) -> Option<&dyn Routable> {
        self.owners.get(link)
    }
}

impl<K: Kind> fmt::Debug for Resource<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::VARIANT.name())
            .field("key", &self.key)
            .field("owners", &self.owners)
            .field("fetched", &self.is_fetched())
            .finish()
    }
}

/// Declare the lazy attribute set of a kind: a deserializable struct with
/// one optional field per attribute, plus an async accessor per attribute on
/// `Resource<Kind>`. Field and accessor share the declared visibility.
macro_rules! lazy_attributes {
    (
        $(#[$struct_meta:meta])*
        $name:ident for $kind:ty {
            $(
                $(#[$field_meta:meta])*
                $vis:vis $field:ident: $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$struct_meta])*
        #[derive(Debug, Clone, Default, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, deserialize_with = "crate::resource::lenient")]
                $vis $field: Option<$ty>,
            )*
        }

        impl $crate::resource::AttributeSet for $name {
            fn overlay(&mut self, seed: &Self) {
                $(
                    if seed.$field.is_some() {
                        self.$field = seed.$field.clone();
                    }
                )*
            }
        }

        impl $crate::Resource<$kind> {
            $(
                $vis async fn $field(&self) -> $crate::CoreResult<Option<$ty>> {
                    self.attribute(|attributes: &$name| attributes.$field.clone()).await
                }
            )*
        }
    };
}

pub(crate) use lazy_attributes;
