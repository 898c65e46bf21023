use reqwest::Method;
use tracing::{info, warn};

use crate::client::{decode, OktaClient};
use crate::constants::{GROUP_SLUG, USER_SLUG};
use crate::context::RequestContext;
use crate::error::OktaResult;
use crate::models::{contains_email, User};

impl OktaClient {
    /// Adds the user registered under `email` to the group.
    ///
    /// The user is looked up first; if that fails the membership request is
    /// never sent.
    pub async fn create_membership(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<()> {
        let user_id = self.user_id_by_email(ctx, email).await?;
        let url = self.resource_url(&[GROUP_SLUG, group_id, USER_SLUG, &user_id]);
        self.send_empty(ctx, Method::PUT, &url, None).await?;
        info!(group_id, user_id = %user_id, "okta membership created");
        Ok(())
    }

    /// Removes the user registered under `email` from the group.
    pub async fn delete_membership(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<()> {
        let user_id = self.user_id_by_email(ctx, email).await?;
        let url = self.resource_url(&[GROUP_SLUG, group_id, USER_SLUG, &user_id]);
        self.send_empty(ctx, Method::DELETE, &url, None).await?;
        info!(group_id, user_id = %user_id, "okta membership deleted");
        Ok(())
    }

    /// Reports whether any member of the group has `email` as their primary
    /// email, compared case-insensitively.
    ///
    /// Only the first page of the member list is inspected. Okta pages large
    /// groups, so a `false` for a big group may be a false negative; a warning
    /// is logged when the response advertises further pages.
    pub async fn membership_exists(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<bool> {
        let url = self.resource_url(&[GROUP_SLUG, group_id, USER_SLUG]);
        let response = self.execute(ctx, Method::GET, &url, None).await?;
        if response.has_next_page {
            warn!(
                group_id,
                "okta member list is paginated; only the first page was checked"
            );
        }
        let members: Option<Option<Vec<User>>> = decode(response.body)?;
        let members = members.flatten().unwrap_or_default();
        Ok(contains_email(&members, email))
    }

    /// Okta accepts a login or email in place of the user id.
    pub(crate) async fn user_id_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> OktaResult<String> {
        let url = self.resource_url(&[USER_SLUG, email]);
        let user: Option<User> = self.send_request(ctx, Method::GET, &url, None).await?;
        Ok(user.unwrap_or_default().id)
    }
}
