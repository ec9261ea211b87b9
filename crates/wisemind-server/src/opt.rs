use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use url::Url;
use wisemind_model::permission::Role;

#[derive(Debug, Parser)]
#[command(name = "wisemind", about = "Serve the wisemind skills curriculum")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
    /// Signs in a subject and prints an access token for it
    IssueToken(IssueToken),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Database {
    #[arg(long, env = "DATABASE_URL", help = "sqlite:// or postgres:// url of the database")]
    pub(crate) database_url: Url,

    #[command(flatten)]
    pub(crate) db: Db,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[command(flatten)]
    pub(crate) database: Database,

    #[arg(long, value_delimiter = ',', help = "Allowed CORS origins")]
    pub(crate) origins: Vec<String>,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(
        long,
        default_value = "dev",
        help = "Set the environment used by sentry and prometheus"
    )]
    pub(crate) env: String,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct IssueToken {
    #[command(flatten)]
    pub(crate) database: Database,

    #[arg(long, help = "Subject of the external identity")]
    pub(crate) subject: String,

    #[arg(long, help = "Display name used when the user is created, defaults to the subject")]
    pub(crate) name: Option<String>,

    #[arg(long, default_value = "STUDENT", help = "Role used when the user is created")]
    pub(crate) role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_token_args() {
        let cli = Cli::try_parse_from([
            "wisemind",
            "issue-token",
            "--database-url",
            "sqlite::memory:",
            "--subject",
            "auth0|42",
            "--role",
            "ADMIN",
        ])
        .unwrap();
        let Commands::IssueToken(args) = cli.command else {
            panic!("expected issue-token");
        };
        assert_eq!(args.subject, "auth0|42");
        assert_eq!(args.role, Role::Admin);
        assert!(args.name.is_none());
    }

    #[test]
    fn test_run_origins() {
        let cli = Cli::try_parse_from([
            "wisemind",
            "run",
            "--database-url",
            "sqlite://wisemind.db?mode=rwc",
            "--origins",
            "http://localhost:3000,https://wisemind.app",
            "--db-max-connections",
            "4",
        ])
        .unwrap();
        let Commands::Run(run) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(run.origins.len(), 2);
        assert_eq!(run.database.db.db_max_connections, Some(4));
        assert_eq!(run.env, "dev");
    }
}
