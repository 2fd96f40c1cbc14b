//! IMAP sources attached to an account (2.0 API)

use super::{Account, FolderCollection};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, CoreResult, Owners, Resource, Variant};
use std::sync::Arc;

pub struct SourceKind;

impl Kind for SourceKind {
    const VARIANT: Variant = Variant::Source;
    const PRIMARY_KEY: &'static str = "label";
    type Attributes = SourceAttributes;
}

impl CollectionKind for SourceKind {
    const COLLECTION: Variant = Variant::SourceCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> =
        Some(&["email", "server", "username", "use_ssl", "port", "type"]);
}

lazy_attributes! {
    SourceAttributes for SourceKind {
        pub server: String,
        pub username: String,
        pub port: u16,
        pub authentication_type: String,
        pub status: String,
        pub service_level: String,
        pub sync_period: String,
        use_ssl: bool,
        #[serde(rename = "type")]
        pub kind: String,
    }
}

pub type Source = Resource<SourceKind>;
pub type SourceCollection = Collection<SourceKind>;

impl Source {
    pub async fn uses_ssl(&self) -> CoreResult<bool> {
        Ok(self.use_ssl().await?.unwrap_or(false))
    }

    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }

    pub fn folders(self: &Arc<Self>) -> FolderCollection {
        Collection::new(self.api().clone(), Owners::source(self.clone()))
    }
}
