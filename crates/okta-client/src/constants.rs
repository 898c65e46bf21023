/// Versioned path prefix shared by every Okta management endpoint.
pub const BASE_PATH: &str = "/api/v1";

pub const GROUP_SLUG: &str = "groups";
pub const USER_SLUG: &str = "users";

pub const PRODUCTION_HOST: &str = "okta.com";
pub const PREVIEW_HOST: &str = "oktapreview.com";

/// Okta API tokens use their own authorization scheme instead of `Bearer`.
pub const AUTH_SCHEME: &str = "SSWS";

pub mod env {
    pub const TOKEN: &str = "OKTA_API_TOKEN";
    pub const ORGANIZATION: &str = "OKTA_ORG";
    pub const PREVIEW: &str = "OKTA_PREVIEW";
    pub const HOST: &str = "OKTA_HOST";
}
