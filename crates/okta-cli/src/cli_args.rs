use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::groups::args::*;
pub use crate::modules::members::args::*;

#[derive(Parser)]
#[command(name = "okta")]
#[command(about = "Manage Okta groups and group membership")]
pub struct Cli {
    #[arg(long, env = "OKTA_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    #[arg(long, env = "OKTA_API_TOKEN_FILE")]
    pub token_file: Option<String>,
    #[arg(long, env = "OKTA_ORG", default_value = "", help = "Okta org id, e.g. dev-1234")]
    pub org: String,
    #[arg(
        long,
        env = "OKTA_PREVIEW",
        require_equals = true,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Target oktapreview.com (default) or okta.com with --preview=false"
    )]
    pub preview: Option<bool>,
    #[arg(long, env = "OKTA_HOST", help = "Override the Okta domain (used verbatim without --org)")]
    pub host: Option<String>,
    #[arg(long, env = "OKTA_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout: u64,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Read, create, update and delete groups")]
    Group(GroupArgs),
    #[command(about = "Manage group membership by user email")]
    Member(MemberArgs),
}
