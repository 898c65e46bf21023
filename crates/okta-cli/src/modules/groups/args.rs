use clap::{Args, Subcommand};

#[derive(Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

#[derive(Subcommand)]
pub enum GroupCommand {
    Get(GroupGetArgs),
    Create(GroupCreateArgs),
    Update(GroupUpdateArgs),
    Delete(GroupDeleteArgs),
}

#[derive(Args)]
pub struct GroupGetArgs {
    pub id: String,
}

#[derive(Args)]
pub struct GroupCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
}

/// Updates replace the whole profile, so the name is always required.
#[derive(Args)]
pub struct GroupUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct GroupDeleteArgs {
    pub id: String,
}
