use super::Account;
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};
use std::sync::Arc;

pub struct ContactKind;

impl Kind for ContactKind {
    const VARIANT: Variant = Variant::Contact;
    const PRIMARY_KEY: &'static str = "email";
    type Attributes = ContactAttributes;
}

impl CollectionKind for ContactKind {
    const COLLECTION: Variant = Variant::ContactCollection;
}

lazy_attributes! {
    ContactAttributes for ContactKind {
        pub name: String,
        pub emails: Vec<String>,
        pub thumbnail: String,
        pub count: i64,
        pub last_received: i64,
        pub last_sent: i64,
    }
}

pub type Contact = Resource<ContactKind>;
pub type ContactCollection = Collection<ContactKind>;

impl Contact {
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }
}
