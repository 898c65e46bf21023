#![allow(dead_code)]

use mockito::ServerGuard;
use okta_client::{Environment, OktaClient};

pub const TOKEN: &str = "foo";
pub const AUTHORIZATION: &str = "SSWS foo";

/// Client pointed at the mock server with no organization, so the host is
/// used verbatim as the root.
pub fn client_for(server: &ServerGuard) -> OktaClient {
    OktaClient::new(TOKEN, "", Environment::Preview, None).with_host(server.url())
}

pub fn group_membership_body() -> &'static str {
    include_str!("testdata/group_membership.json")
}
