use reqwest::Method;

use crate::client::{encode, OktaClient};
use crate::constants::GROUP_SLUG;
use crate::context::RequestContext;
use crate::error::OktaResult;
use crate::models::Group;

impl OktaClient {
    /// Fetches the group with the given id.
    pub async fn group(&self, ctx: &RequestContext, id: &str) -> OktaResult<Group> {
        let url = self.resource_url(&[GROUP_SLUG, id]);
        let group: Option<Group> = self.send_request(ctx, Method::GET, &url, None).await?;
        Ok(group.unwrap_or_default())
    }

    /// Creates `group` and returns it as stored by Okta, including its new id.
    pub async fn create_group(&self, ctx: &RequestContext, group: &Group) -> OktaResult<Group> {
        let body = encode(group)?;
        let url = self.resource_url(&[GROUP_SLUG]);
        let created: Option<Group> = self
            .send_request(ctx, Method::POST, &url, Some(body))
            .await?;
        Ok(created.unwrap_or_default())
    }

    /// Replaces the group addressed by `group.id` with `group`.
    pub async fn update_group(&self, ctx: &RequestContext, group: &Group) -> OktaResult<Group> {
        let body = encode(group)?;
        let url = self.resource_url(&[GROUP_SLUG, &group.id]);
        let updated: Option<Group> = self
            .send_request(ctx, Method::PUT, &url, Some(body))
            .await?;
        Ok(updated.unwrap_or_default())
    }

    pub async fn delete_group(&self, ctx: &RequestContext, group_id: &str) -> OktaResult<()> {
        let url = self.resource_url(&[GROUP_SLUG, group_id]);
        self.send_empty(ctx, Method::DELETE, &url, None).await
    }
}
