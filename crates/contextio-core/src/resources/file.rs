use super::Account;
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};
use std::sync::Arc;

pub struct FileKind;

impl Kind for FileKind {
    const VARIANT: Variant = Variant::File;
    const PRIMARY_KEY: &'static str = "file_id";
    type Attributes = FileAttributes;
}

impl CollectionKind for FileKind {
    const COLLECTION: Variant = Variant::FileCollection;
}

lazy_attributes! {
    /// Metadata of an attachment. Content is not part of it.
    FileAttributes for FileKind {
        pub file_name: String,
        pub size: i64,
        #[serde(rename = "type")]
        pub kind: String,
        pub subject: String,
        pub date: i64,
        pub body_section: String,
        pub supports_preview: bool,
        pub email_message_id: String,
        pub gmail_thread_id: String,
        pub addresses: serde_json::Value,
    }
}

pub type File = Resource<FileKind>;
pub type FileCollection = Collection<FileKind>;

impl File {
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }
}
