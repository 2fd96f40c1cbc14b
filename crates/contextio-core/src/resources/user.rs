//! Users of the lite API

use super::{ConnectTokenCollection, EmailAccountCollection, WebhookCollection};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Owners, Resource, Variant};
use std::sync::Arc;

pub struct UserKind;

impl Kind for UserKind {
    const VARIANT: Variant = Variant::User;
    const PRIMARY_KEY: &'static str = "id";
    type Attributes = UserAttributes;
}

impl CollectionKind for UserKind {
    const COLLECTION: Variant = Variant::UserCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> = Some(&["email"]);
}

lazy_attributes! {
    UserAttributes for UserKind {
        pub email_addresses: Vec<String>,
        pub first_name: String,
        pub last_name: String,
        pub created: i64,
    }
}

pub type User = Resource<UserKind>;
pub type UserCollection = Collection<UserKind>;

impl User {
    pub fn email_accounts(self: &Arc<Self>) -> EmailAccountCollection {
        Collection::new(self.api().clone(), Owners::user(self.clone()))
    }

    pub fn webhooks(self: &Arc<Self>) -> WebhookCollection {
        Collection::new(self.api().clone(), Owners::user(self.clone()))
    }

    pub fn connect_tokens(self: &Arc<Self>) -> ConnectTokenCollection {
        Collection::new(self.api().clone(), Owners::user(self.clone()))
    }
}
