use super::Account;
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};
use std::sync::Arc;

pub struct ThreadKind;

impl Kind for ThreadKind {
    const VARIANT: Variant = Variant::Thread;
    const PRIMARY_KEY: &'static str = "gmail_thread_id";
    type Attributes = ThreadAttributes;
}

impl CollectionKind for ThreadKind {
    const COLLECTION: Variant = Variant::ThreadCollection;
}

lazy_attributes! {
    ThreadAttributes for ThreadKind {
        pub subject: String,
        pub email_message_ids: Vec<String>,
        pub folders: Vec<String>,
        pub person_info: serde_json::Value,
    }
}

pub type Thread = Resource<ThreadKind>;
pub type ThreadCollection = Collection<ThreadKind>;

impl Thread {
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }
}
