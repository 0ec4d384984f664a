pub(crate) mod opt;

mod context;
mod entries;
mod metrics;
mod output;
mod user;

use crate::opt::{Cli, Commands, UserCommand};
use anyhow::Error;
use cadence_utils::tracing::{TracingConfig, setup};
use context::Context;
use tracing::level_filters::LevelFilter;

pub(crate) async fn exec(cli: Cli) -> Result<(), Error> {
    let _guard = setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(cli.sentry_dsn.clone())
            .env(cli.env.clone())
            .default_level(LevelFilter::WARN)
            .build(),
    )?;

    let conn = context::connect(&cli.db).await?;
    let json = cli.json;
    let user_id = cli.user;
    let open = || Context::open(conn.clone(), user_id, json);
    match cli.command {
        Commands::User(UserCommand::Create { name }) => user::create(&conn, name, json).await,
        Commands::Add(o) => entries::add(&open().await?, o).await,
        Commands::List => entries::list(&open().await?),
        Commands::Update(o) => entries::update(&open().await?, o).await,
        Commands::Delete(o) => entries::delete(&open().await?, o).await,
        Commands::Streak => metrics::streak(&open().await?),
        Commands::Badges => metrics::badges(&open().await?),
        Commands::Heatmap => metrics::heatmap(&open().await?),
    }
}
