use super::Account;
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};
use std::sync::Arc;

pub struct EmailAddressKind;

impl Kind for EmailAddressKind {
    const VARIANT: Variant = Variant::EmailAddress;
    const PRIMARY_KEY: &'static str = "email";
    type Attributes = EmailAddressAttributes;
}

impl CollectionKind for EmailAddressKind {
    const COLLECTION: Variant = Variant::EmailAddressCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> = Some(&["email_address"]);
}

lazy_attributes! {
    EmailAddressAttributes for EmailAddressKind {
        pub validated: i64,
        pub primary: i64,
    }
}

pub type EmailAddress = Resource<EmailAddressKind>;
pub type EmailAddressCollection = Collection<EmailAddressKind>;

impl EmailAddress {
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }
}
