use super::{Account, User};
use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};
use std::sync::Arc;

pub struct WebhookKind;

impl Kind for WebhookKind {
    const VARIANT: Variant = Variant::Webhook;
    const PRIMARY_KEY: &'static str = "webhook_id";
    type Attributes = WebhookAttributes;
}

impl CollectionKind for WebhookKind {
    const COLLECTION: Variant = Variant::WebhookCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> =
        Some(&["callback_url", "failure_notif_url"]);
}

lazy_attributes! {
    WebhookAttributes for WebhookKind {
        pub callback_url: String,
        pub failure_notif_url: String,
        pub active: bool,
        /// Set once the callback has failed and the webhook stopped firing
        pub failure: bool,
        pub filter_to: String,
        pub filter_from: String,
        pub filter_subject: String,
        pub filter_folder_added: String,
    }
}

/// A webhook, owned by an account or by a user
pub type Webhook = Resource<WebhookKind>;
pub type WebhookCollection = Collection<WebhookKind>;

impl Webhook {
    pub fn account(&self) -> Option<&Arc<Account>> {
        self.owners().account.as_ref()
    }

    pub fn user(&self) -> Option<&Arc<User>> {
        self.owners().user.as_ref()
    }
}
