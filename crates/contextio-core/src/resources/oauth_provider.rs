use crate::resource::{lazy_attributes, CollectionKind, Kind};
use crate::{Collection, Resource, Variant};

pub struct OAuthProviderKind;

impl Kind for OAuthProviderKind {
    const VARIANT: Variant = Variant::OAuthProvider;
    const PRIMARY_KEY: &'static str = "provider_consumer_key";
    type Attributes = OAuthProviderAttributes;
}

impl CollectionKind for OAuthProviderKind {
    const COLLECTION: Variant = Variant::OAuthProviderCollection;
    const REQUIRED_ON_CREATE: Option<&'static [&'static str]> =
        Some(&["type", "provider_consumer_key", "provider_consumer_secret"]);
}

lazy_attributes! {
    OAuthProviderAttributes for OAuthProviderKind {
        /// "GMAIL" or "GOOGLEAPPSMARKETPLACE"
        #[serde(rename = "type")]
        pub kind: String,
        pub provider_consumer_secret: String,
    }
}

pub type OAuthProvider = Resource<OAuthProviderKind>;
pub type OAuthProviderCollection = Collection<OAuthProviderKind>;
