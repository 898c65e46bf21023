use std::io::Write;

use okta_client::{Group, OktaService, RequestContext};

use crate::cli_args::*;
use crate::modules::system::output::{print_json, print_message};

pub(crate) async fn handle_group(
    args: GroupArgs,
    service: &dyn OktaService,
    ctx: &RequestContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match args.command {
        GroupCommand::Get(args) => {
            let group = service.group(ctx, &args.id).await?;
            print_json(out, &group)?;
        }
        GroupCommand::Create(args) => {
            let group = Group::new(args.name, args.description);
            let created = service.create_group(ctx, &group).await?;
            print_json(out, &created)?;
        }
        GroupCommand::Update(args) => {
            let mut group = Group::new(args.name, args.description);
            group.id = args.id;
            let updated = service.update_group(ctx, &group).await?;
            print_json(out, &updated)?;
        }
        GroupCommand::Delete(args) => {
            service.delete_group(ctx, &args.id).await?;
            print_message(out, "Group deleted")?;
        }
    }
    Ok(())
}
