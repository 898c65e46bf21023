use async_trait::async_trait;

use crate::client::OktaClient;
use crate::context::RequestContext;
use crate::error::OktaResult;
use crate::models::Group;

/// Group and membership operations against Okta.
///
/// [`OktaClient`] is the only production implementation; the trait exists so
/// callers can substitute a test double.
#[async_trait]
pub trait OktaService: Send + Sync {
    async fn group(&self, ctx: &RequestContext, id: &str) -> OktaResult<Group>;
    async fn create_group(&self, ctx: &RequestContext, group: &Group) -> OktaResult<Group>;
    async fn update_group(&self, ctx: &RequestContext, group: &Group) -> OktaResult<Group>;
    async fn delete_group(&self, ctx: &RequestContext, group_id: &str) -> OktaResult<()>;
    async fn create_membership(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<()>;
    async fn delete_membership(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<()>;
    async fn membership_exists(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<bool>;
}

#[async_trait]
impl OktaService for OktaClient {
    async fn group(&self, ctx: &RequestContext, id: &str) -> OktaResult<Group> {
        OktaClient::group(self, ctx, id).await
    }

    async fn create_group(&self, ctx: &RequestContext, group: &Group) -> OktaResult<Group> {
        OktaClient::create_group(self, ctx, group).await
    }

    async fn update_group(&self, ctx: &RequestContext, group: &Group) -> OktaResult<Group> {
        OktaClient::update_group(self, ctx, group).await
    }

    async fn delete_group(&self, ctx: &RequestContext, group_id: &str) -> OktaResult<()> {
        OktaClient::delete_group(self, ctx, group_id).await
    }

    async fn create_membership(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<()> {
        OktaClient::create_membership(self, ctx, group_id, email).await
    }

    async fn delete_membership(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<()> {
        OktaClient::delete_membership(self, ctx, group_id, email).await
    }

    async fn membership_exists(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        email: &str,
    ) -> OktaResult<bool> {
        OktaClient::membership_exists(self, ctx, group_id, email).await
    }
}
