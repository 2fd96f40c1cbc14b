//! Path derivation for every resource kind and ownership chain.

mod common;

use contextio_core::http::ApiVersion;
use contextio_core::resources::{
    Account, ConnectTokenKind, EmailAccount, Folder, Message, MessageKind, Source, User, Webhook,
    WebhookKind,
};
use contextio_core::{
    Api, Collection, Owners, Resource, Routable, UrlError, UrlResolver, Variant,
};
use std::sync::Arc;

fn setup(version: ApiVersion) -> (Api, Arc<Account>, Arc<User>) {
    let (api, _transport) = common::api(version);
    let account = api.account("a1");
    let user = api.user("u1");
    (api, account, user)
}

fn unkeyed_account(api: &Api) -> Arc<Account> {
    Arc::new(Resource::unkeyed(api.clone(), Owners::none()))
}

// ============================================================================
// Top-level kinds
// ============================================================================

#[test]
fn top_level_paths() {
    let (api, account, _user) = setup(ApiVersion::V2);

    assert_eq!(api.connect_token("tok").path().unwrap(), "connect_tokens/tok");
    assert_eq!(api.oauth_provider("ck").path().unwrap(), "oauth_providers/ck");
    assert_eq!(api.oauth_providers().path().unwrap(), "oauth_providers");
    assert_eq!(
        api.email_settings("hello@email.com", "IMAP").path().unwrap(),
        "discovery"
    );
    assert_eq!(account.path().unwrap(), "accounts/a1");
    assert_eq!(api.accounts().path().unwrap(), "accounts");
    assert_eq!(api.users().path().unwrap(), "users");
}

#[test]
fn user_shares_the_account_path_shape() {
    let (_api, _account, user) = setup(ApiVersion::Lite);
    assert_eq!(user.path().unwrap(), "accounts/u1");
}

#[test]
fn connect_token_collection_scopes() {
    let (api, account, user) = setup(ApiVersion::V2);

    assert_eq!(
        account.connect_tokens().path().unwrap(),
        "accounts/a1/connect_tokens"
    );
    assert_eq!(user.connect_tokens().path().unwrap(), "users/u1/connect_tokens");
    assert_eq!(api.connect_tokens().path().unwrap(), "connect_tokens");

    let both = Collection::<ConnectTokenKind>::new(
        api.clone(),
        Owners::account(account.clone()).with_user(user.clone()),
    );
    assert_eq!(both.path().unwrap(), "accounts/a1/connect_tokens");

    // An account without an id is not a usable scope
    let idless = Collection::<ConnectTokenKind>::new(
        api.clone(),
        Owners::account(unkeyed_account(&api)).with_user(user),
    );
    assert_eq!(idless.path().unwrap(), "users/u1/connect_tokens");
}

// ============================================================================
// Account-owned kinds
// ============================================================================

#[test]
fn account_owned_paths() {
    let (_api, account, _user) = setup(ApiVersion::V2);

    assert_eq!(account.sources().path().unwrap(), "accounts/a1/sources");
    assert_eq!(
        account.sources().get("src").path().unwrap(),
        "accounts/a1/sources/src"
    );
    assert_eq!(account.threads().path().unwrap(), "accounts/a1/threads");
    assert_eq!(
        account.threads().get("t1").path().unwrap(),
        "accounts/a1/threads/t1"
    );
    assert_eq!(
        account.email_addresses().path().unwrap(),
        "accounts/a1/email_addresses"
    );
    assert_eq!(
        account.email_addresses().get("me@email.com").path().unwrap(),
        "accounts/a1/email_addresses/me@email.com"
    );
    assert_eq!(account.contacts().path().unwrap(), "accounts/a1/contacts");
    assert_eq!(
        account.contacts().get("you@email.com").path().unwrap(),
        "accounts/a1/contacts/you@email.com"
    );
    assert_eq!(account.files().path().unwrap(), "accounts/a1/files");
    assert_eq!(
        account.files().get("f1").path().unwrap(),
        "accounts/a1/files/f1"
    );
}

#[test]
fn account_owned_kinds_need_an_account() {
    let (api, _account, _user) = setup(ApiVersion::V2);
    let orphan = unkeyed_account(&api);

    assert_eq!(
        orphan.sources().path(),
        Err(UrlError::IncompleteChain(Variant::SourceCollection))
    );
    assert_eq!(
        orphan.files().get("f1").path(),
        Err(UrlError::IncompleteChain(Variant::File))
    );
    assert_eq!(
        orphan.path(),
        Err(UrlError::IncompleteChain(Variant::Account))
    );
}

#[test]
fn email_account_paths() {
    let (api, _account, user) = setup(ApiVersion::Lite);

    assert_eq!(
        user.email_accounts().path().unwrap(),
        "users/u1/email_accounts"
    );
    assert_eq!(
        user.email_accounts().get("ea").path().unwrap(),
        "users/u1/email_accounts/ea"
    );

    let unowned: Arc<EmailAccount> = Arc::new(Resource::new(api, "ea", Owners::none()));
    assert_eq!(
        unowned.path(),
        Err(UrlError::IncompleteChain(Variant::EmailAccount))
    );
}

// ============================================================================
// Kinds with two ownership chains
// ============================================================================

#[test]
fn folder_chains() {
    let (api, account, user) = setup(ApiVersion::V2);
    let source = account.sources().get("src");
    let email_account = user.email_accounts().get("ea");

    assert_eq!(
        source.folders().get("INBOX").path().unwrap(),
        "accounts/a1/sources/src/folders/INBOX"
    );
    assert_eq!(
        source.folders().path().unwrap(),
        "accounts/a1/sources/src/folders"
    );
    assert_eq!(
        email_account.folders().get("INBOX").path().unwrap(),
        "users/u1/email_accounts/ea/folders/INBOX"
    );
    assert_eq!(
        email_account.folders().path().unwrap(),
        "users/u1/email_accounts/ea/folders"
    );

    // Both chains populated: the source chain wins
    let both: Folder = Resource::new(
        api.clone(),
        "INBOX",
        Owners::source(source).with_email_account(email_account.clone()),
    );
    assert_eq!(both.path().unwrap(), "accounts/a1/sources/src/folders/INBOX");

    // A source that does not reach an account id falls through
    let orphan_source: Arc<Source> = Arc::new(Resource::new(api.clone(), "src", Owners::none()));
    let fallback: Folder = Resource::new(
        api.clone(),
        "INBOX",
        Owners::source(orphan_source).with_email_account(email_account),
    );
    assert_eq!(
        fallback.path().unwrap(),
        "users/u1/email_accounts/ea/folders/INBOX"
    );

    let neither: Folder = Resource::new(api, "INBOX", Owners::none());
    assert_eq!(
        neither.path(),
        Err(UrlError::IncompleteChain(Variant::Folder))
    );
}

#[test]
fn message_paths_under_the_full_api() {
    let (_api, account, user) = setup(ApiVersion::V2);

    let message = account.messages().get("m1");
    assert_eq!(message.path().unwrap(), "accounts/a1/messages/m1");
    assert_eq!(account.messages().path().unwrap(), "accounts/a1/messages");
    assert_eq!(
        message.body_parts().path().unwrap(),
        "accounts/a1/messages/m1/body"
    );

    // Folder-owned messages only route under the lite API
    let folder = user.email_accounts().get("ea").folders().get("INBOX");
    assert_eq!(
        folder.messages().get("m1").path(),
        Err(UrlError::IncompleteChain(Variant::Message))
    );
}

#[test]
fn message_paths_under_the_lite_api() {
    let (api, account, user) = setup(ApiVersion::Lite);
    let folder = user.email_accounts().get("ea").folders().get("INBOX");

    assert_eq!(
        folder.messages().get("m1").path().unwrap(),
        "users/u1/email_accounts/ea/folders/INBOX/messages/m1"
    );
    assert_eq!(
        folder.messages().path().unwrap(),
        "users/u1/email_accounts/ea/folders/INBOX/messages"
    );

    // The collection prefers the account scope under any version
    let both = Collection::<MessageKind>::new(
        api.clone(),
        Owners::account(account.clone()).with_folder(folder),
    );
    assert_eq!(both.path().unwrap(), "accounts/a1/messages");

    let account_message: Message = Resource::new(api, "m1", Owners::account(account));
    assert_eq!(
        account_message.path(),
        Err(UrlError::IncompleteChain(Variant::Message))
    );
}

#[test]
fn body_parts_need_an_account_owned_message() {
    let (_api, _account, user) = setup(ApiVersion::Lite);
    let message = user
        .email_accounts()
        .get("ea")
        .folders()
        .get("INBOX")
        .messages()
        .get("m1");

    assert_eq!(
        message.body_parts().path(),
        Err(UrlError::IncompleteChain(Variant::BodyPartCollection))
    );
}

#[test]
fn webhook_chains() {
    let (api, account, user) = setup(ApiVersion::V2);

    assert_eq!(
        account.webhooks().get("w1").path().unwrap(),
        "accounts/a1/webhooks/w1"
    );
    assert_eq!(account.webhooks().path().unwrap(), "accounts/a1/webhooks");
    assert_eq!(
        user.webhooks().get("w1").path().unwrap(),
        "users/u1/webhook/w1"
    );
    assert_eq!(user.webhooks().path().unwrap(), "users/u1/webhooks");

    let both: Webhook = Resource::new(
        api.clone(),
        "w1",
        Owners::account(account).with_user(user),
    );
    assert_eq!(both.path().unwrap(), "accounts/a1/webhooks/w1");

    let neither = Collection::<WebhookKind>::new(api, Owners::none());
    assert_eq!(
        neither.path(),
        Err(UrlError::IncompleteChain(Variant::WebhookCollection))
    );
}

// ============================================================================
// Registry behavior
// ============================================================================

#[test]
fn single_body_parts_are_unregistered() {
    let (_api, account, _user) = setup(ApiVersion::V2);
    let part = account.messages().get("m1").body_parts().get("1");

    assert_eq!(part.path(), Err(UrlError::Unregistered(Variant::BodyPart)));
}

#[test]
fn empty_resolver_names_the_variant() {
    let (_, transport) = common::api(ApiVersion::V2);
    let api = Api::new(transport.clone(), UrlResolver::new(ApiVersion::V2));

    let err = api.accounts().path().unwrap_err();
    assert_eq!(err, UrlError::Unregistered(Variant::AccountCollection));
    assert!(err.to_string().contains("AccountCollection"));
    assert_eq!(transport.total(), 0);
}

#[test]
fn custom_rules_replace_standard_ones() {
    let (_, transport) = common::api(ApiVersion::V2);
    let mut resolver = UrlResolver::standard(ApiVersion::V2);
    resolver.register(Variant::User, |user, _| {
        Some(format!("users/{}", user.key()?))
    });
    let api = Api::new(transport, resolver);

    assert_eq!(api.user("u1").path().unwrap(), "users/u1");
    assert_eq!(api.account("a1").path().unwrap(), "accounts/a1");
}

#[test]
fn resolution_never_touches_the_network() {
    let (api, transport) = common::api(ApiVersion::V2);
    let account = api.account("a1");

    let _ = account.path();
    let _ = account.sources().get("src").folders().get("INBOX").path();
    let _ = account.messages().get("m1").body_parts().get("1").path();

    assert_eq!(transport.total(), 0);
}
