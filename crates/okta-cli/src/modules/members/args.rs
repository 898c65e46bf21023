use clap::{Args, Subcommand};

#[derive(Args)]
pub struct MemberArgs {
    #[command(subcommand)]
    pub command: MemberCommand,
}

#[derive(Subcommand)]
pub enum MemberCommand {
    Add(MemberTargetArgs),
    Remove(MemberTargetArgs),
    #[command(about = "Check membership (first page of members only)")]
    Exists(MemberTargetArgs),
}

#[derive(Args)]
pub struct MemberTargetArgs {
    pub group_id: String,
    pub email: String,
}
