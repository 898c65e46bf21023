use okta_client::{ClientConfig, Environment};

use crate::cli_args::Cli;

pub(crate) fn client_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    if cli.token.is_some() && cli.token_file.is_some() {
        anyhow::bail!("use --token or --token-file, not both");
    }
    let token = match (cli.token.as_deref(), cli.token_file.as_deref()) {
        (Some(token), _) => token.trim().to_string(),
        (None, Some(path)) => read_token_file(path)?,
        (None, None) => String::new(),
    };
    if token.is_empty() {
        anyhow::bail!("token is required (OKTA_API_TOKEN, --token, or --token-file)");
    }

    let mut config = ClientConfig::new(
        token,
        cli.org.trim(),
        cli.preview
            .map_or_else(Environment::default, Environment::from_preview),
    );
    config.host = cli
        .host
        .as_deref()
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string);
    if let Some(host) = config.host.as_deref() {
        if host.contains("://") && !config.organization.is_empty() {
            anyhow::bail!("--host with a scheme cannot be combined with --org");
        }
    }
    Ok(config)
}

pub(crate) fn read_token_file(path: &str) -> anyhow::Result<String> {
    let contents = std::fs::read_to_string(path)?;
    let token = contents.trim();
    if token.is_empty() {
        anyhow::bail!("token file is empty: {}", path);
    }
    Ok(token.to_string())
}
