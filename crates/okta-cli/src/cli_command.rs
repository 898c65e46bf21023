use std::io::Write;

use okta_client::{OktaService, RequestContext};

use crate::cli_args::*;
use crate::modules::groups::handle_group;
use crate::modules::members::handle_member;

pub(crate) async fn handle_command(
    command: Command,
    service: &dyn OktaService,
    ctx: &RequestContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Group(args) => handle_group(args, service, ctx, out).await?,
        Command::Member(args) => handle_member(args, service, ctx, out).await?,
    }
    Ok(())
}
