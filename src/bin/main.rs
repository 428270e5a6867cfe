use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use sign_in_auth::commands::issue_token::IssueTokenCommand;
use sign_in_auth::commands::verify_token::VerifyTokenCommand;
use sign_in_auth::config::{Config, JwtSettings};
use sign_in_auth::identity::UserIdentity;
use sign_in_auth::parameters::{Commands, OutPutTokenFormat};
use sign_in_auth::server;
use sign_in_auth::token_issuer::JwtTokenIssuer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sign-in-auth")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout only carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sign_in_auth=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli_command = Cli::parse();

    match cli_command.command {
        Commands::Serve {
            app_name,
            bind_address,
        } => {
            let mut config = Config::from_env(&app_name).map_err(|e| {
                error!("failed to load configuration: {e}");
                e
            })?;
            if let Some(bind_address) = bind_address {
                config.bind_address = bind_address;
            }
            info!(app_name = %app_name, "starting sign-in server");

            server::serve(config, Arc::new(JwtTokenIssuer::new())).await?;
            Ok(())
        }
        Commands::IssueToken {
            email,
            app_name,
            output_token_format,
        } => {
            let settings = JwtSettings::from_env(&app_name)?;
            let identity = UserIdentity::new(email);
            let command = IssueTokenCommand::new(JwtTokenIssuer::new());
            match output_token_format {
                OutPutTokenFormat::Plain => {
                    println!("{}", command.issue_token(&settings, &identity)?);
                }
                OutPutTokenFormat::Json => {
                    let output = command.issue_token_with_claims(&settings, &identity)?;
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
            Ok(())
        }
        Commands::VerifyToken { token, app_name } => {
            let settings = JwtSettings::from_env(&app_name)?;
            let claims = VerifyTokenCommand::new(&settings)?.verify_token(&token)?;
            println!("{}", serde_json::to_string_pretty(&claims)?);
            Ok(())
        }
    }
}
