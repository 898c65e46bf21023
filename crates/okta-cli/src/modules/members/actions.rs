use std::io::Write;

use okta_client::{OktaService, RequestContext};
use serde::Serialize;

use crate::cli_args::*;
use crate::modules::system::output::{print_json, print_message};

#[derive(Serialize)]
struct ExistsResponse {
    exists: bool,
}

pub(crate) async fn handle_member(
    args: MemberArgs,
    service: &dyn OktaService,
    ctx: &RequestContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match args.command {
        MemberCommand::Add(args) => {
            service
                .create_membership(ctx, &args.group_id, &args.email)
                .await?;
            print_message(out, "Membership created")?;
        }
        MemberCommand::Remove(args) => {
            service
                .delete_membership(ctx, &args.group_id, &args.email)
                .await?;
            print_message(out, "Membership deleted")?;
        }
        MemberCommand::Exists(args) => {
            let exists = service
                .membership_exists(ctx, &args.group_id, &args.email)
                .await?;
            print_json(out, &ExistsResponse { exists })?;
        }
    }
    Ok(())
}
