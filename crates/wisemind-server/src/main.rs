use crate::opt::{Commands, Database, IssueToken, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use sea_orm::{ConnectOptions, DatabaseConnection};
use std::net::{IpAddr, Ipv4Addr};
use tracing::level_filters::LevelFilter;
use wisemind_model_tools::convert::IntoDbModel;
use wisemind_utils::net::create_listener;
use wisemind_utils::tracing::{TracingConfig, setup};

mod app;
mod opt;
mod permissions;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

async fn run(opt: Run) -> Result<()> {
    let _guard = setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn)
            .env(opt.env)
            .build(),
    )?;

    let conn = connect(opt.database).await?;

    let app = app::create_app(&opt.origins, conn)?;

    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

async fn issue_token(opt: IssueToken) -> Result<()> {
    let _guard = setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            // stdout carries the token
            .default_level(LevelFilter::WARN)
            .build(),
    )?;

    let conn = connect(opt.database).await?;
    let name = opt.name.as_deref().unwrap_or(&opt.subject);
    let (user, token) = wisemind_core::account::sign_in(&conn, &opt.subject, name, opt.role.into_db_model()).await?;
    tracing::info!(user_id = %user.id, subject = %opt.subject, "issued access token");
    println!("{}", token.access_token);
    Ok(())
}

/// Connects to the database and creates missing tables.
async fn connect(database: Database) -> Result<DatabaseConnection> {
    let conn = sea_orm::Database::connect(build_connect_options(&database.db, database.database_url)).await?;
    wisemind_db::schema::create(&conn)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to create schema"))?;
    Ok(conn)
}

fn build_connect_options(db_options: &opt::Db, db_url: url::Url) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    seaorm_pool_options
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
            Commands::IssueToken(o) => issue_token(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
