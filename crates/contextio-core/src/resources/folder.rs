use super::{EmailAccount, MessageCollection, Source};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Owners, Resource, Variant};
use std::sync::Arc;

pub struct FolderKind;

impl Kind for FolderKind {
    const VARIANT: Variant = Variant::Folder;
    const PRIMARY_KEY: &'static str = "name";
    type Attributes = FolderAttributes;
}

impl CollectionKind for FolderKind {
    const COLLECTION: Variant = Variant::FolderCollection;
}

lazy_attributes! {
    FolderAttributes for FolderKind {
        /// Hierarchy delimiter
        pub delim: String,
        pub nb_messages: i64,
        pub nb_unseen_messages: i64,
    }
}

/// A folder, owned either through a source or through an email account
pub type Folder = Resource<FolderKind>;
pub type FolderCollection = Collection<FolderKind>;

impl Folder {
    pub fn source(&self) -> Option<&Arc<Source>> {
        self.owners().source.as_ref()
    }

    pub fn email_account(&self) -> Option<&Arc<EmailAccount>> {
        self.owners().email_account.as_ref()
    }

    pub fn messages(self: &Arc<Self>) -> MessageCollection {
        Collection::new(self.api().clone(), Owners::folder(self.clone()))
    }
}
