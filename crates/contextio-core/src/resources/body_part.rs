//! Body parts of a message. Only listable: a single part has no path of
//! its own, so resolving one fails as unregistered.

use super::Message;
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};
use std::sync::Arc;

pub struct BodyPartKind;

impl Kind for BodyPartKind {
    const VARIANT: Variant = Variant::BodyPart;
    const PRIMARY_KEY: &'static str = "body_section";
    type Attributes = BodyPartAttributes;
}

impl CollectionKind for BodyPartKind {
    const COLLECTION: Variant = Variant::BodyPartCollection;
}

lazy_attributes! {
    BodyPartAttributes for BodyPartKind {
        /// MIME type
        #[serde(rename = "type")]
        pub kind: String,
        pub charset: String,
        pub content: String,
        pub encoding: String,
    }
}

pub type BodyPart = Resource<BodyPartKind>;
pub type BodyPartCollection = Collection<BodyPartKind>;

impl BodyPart {
    pub fn message(&self) -> Option<&Arc<Message>> {
        self.owners().message.as_ref()
    }
}
