use clap::{Subcommand, ValueEnum};

use crate::config::DEFAULT_APP_NAME;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Starts the HTTP server exposing `POST /users/sign-in`.
    ///
    /// The signing key and issuer are read from `Jwt__<APP_NAME>__Key` and
    /// `Jwt__<APP_NAME>__ValidIssuer`.
    Serve {
        /// Application whose JWT settings are loaded
        #[arg(long, default_value = DEFAULT_APP_NAME)]
        app_name: String,

        /// Address to listen on. Overrides BIND_ADDRESS.
        #[arg(long)]
        bind_address: Option<String>,
    },
    /// Issues a token for the given email, as the sign-in endpoint would.
    IssueToken {
        /// Email of the user signing in
        #[arg(long, short, required = true)]
        email: String,

        /// Application whose JWT settings are loaded
        #[arg(long, default_value = DEFAULT_APP_NAME)]
        app_name: String,

        /// Select format how the Token should be printed
        #[arg(long, default_value = "Plain")]
        output_token_format: OutPutTokenFormat,
    },
    /// Verifies a token against the configured key and issuer and prints its claims.
    VerifyToken {
        /// Token in compact form
        #[arg(long, short, required = true)]
        token: String,

        /// Application whose JWT settings are loaded
        #[arg(long, default_value = DEFAULT_APP_NAME)]
        app_name: String,
    },
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutPutTokenFormat {
    /// Returns only the signed token
    #[value(name = "Plain")]
    Plain,
    /// Returns the signed token together with its claims in json format
    #[value(name = "Json")]
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn issue_token_defaults() {
        let cli = Cli::try_parse_from(["cli", "issue-token", "--email", "alice@example.com"])
            .unwrap();

        match cli.command {
            Commands::IssueToken {
                email,
                app_name,
                output_token_format,
            } => {
                assert_eq!(email, "alice@example.com");
                assert_eq!(app_name, DEFAULT_APP_NAME);
                assert_eq!(output_token_format, OutPutTokenFormat::Plain);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn issue_token_requires_email() {
        assert!(Cli::try_parse_from(["cli", "issue-token"]).is_err());
    }

    #[test]
    fn serve_with_bind_address() {
        let cli = Cli::try_parse_from([
            "cli",
            "serve",
            "--app-name",
            "MyApp",
            "--bind-address",
            "127.0.0.1:3000",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                app_name,
                bind_address,
            } => {
                assert_eq!(app_name, "MyApp");
                assert_eq!(bind_address.as_deref(), Some("127.0.0.1:3000"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
