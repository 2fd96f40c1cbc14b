//! IMAP settings discovery for an email address

use crate::resource::{lazy_attributes, Kind};
use crate::{Resource, Variant};

pub struct EmailSettingsKind;

impl Kind for EmailSettingsKind {
    const VARIANT: Variant = Variant::EmailSettings;
    const PRIMARY_KEY: &'static str = "email";
    type Attributes = EmailSettingsAttributes;
}

lazy_attributes! {
    EmailSettingsAttributes for EmailSettingsKind {
        /// Whether settings were found for the address
        pub found: bool,
        #[serde(rename = "type")]
        pub kind: String,
        pub documentation: Vec<String>,
        /// Server settings: server, username, port, use_ssl, oauth
        pub imap: serde_json::Value,
    }
}

pub type EmailSettings = Resource<EmailSettingsKind>;
