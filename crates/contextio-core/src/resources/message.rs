use super::{Account, BodyPartCollection, Folder};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Owners, Resource, Variant};
use std::sync::Arc;

pub struct MessageKind;

impl Kind for MessageKind {
    const VARIANT: Variant = Variant::Message;
    const PRIMARY_KEY: &'static str = "message_id";
    type Attributes = MessageAttributes;
}

impl CollectionKind for MessageKind {
    const COLLECTION: Variant = Variant::MessageCollection;
}

lazy_attributes! {
    MessageAttributes for MessageKind {
        /// Unix timestamp
        pub date: i64,
        pub subject: String,
        pub folders: Vec<String>,
        pub gmail_message_id: String,
        pub gmail_thread_id: String,
        pub email_message_id: String,
        pub addresses: serde_json::Value,
    }
}

/// A message, owned by an account (2.0 API) or by a folder (lite API)
pub type Message = Resource<MessageKind>;
pub type MessageCollection = Collection<MessageKind>;

impl Message {
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }

    pub fn folder(&self) -> Option<&Arc<Folder>> {
        self.owners().folder.as_ref()
    }

    pub fn body_parts(self: &Arc<Self>) -> BodyPartCollection {
        Collection::new(self.api().clone(), Owners::message(self.clone()))
    }
}
