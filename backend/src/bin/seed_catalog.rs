//! Replace every user and product with the baseline catalogue.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use storefront::domain::CatalogSeeder;
use storefront::outbound::persistence::{
    DbPool, DieselCatalogSeedRepository, PoolConfig, run_pending_migrations_async,
};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `seed-catalog` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-catalog",
    about = "Delete all users and products, then insert the baseline catalogue",
    version
)]
struct CliArgs {
    /// Database connection URL.
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        value_name = "url",
        value_parser = non_blank
    )]
    database_url: String,
    /// Apply pending schema migrations before seeding.
    #[arg(long)]
    migrate: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let database_url = args.database_url;
    if args.migrate {
        let applied = run_pending_migrations_async(database_url.clone())
            .await
            .wrap_err("apply migrations")?;
        println!("migrations_applied={applied}");
    }

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .wrap_err("create database pool")?;
    let seeder = CatalogSeeder::new(Arc::new(DieselCatalogSeedRepository::new(pool)));
    let outcome = seeder.seed().await.wrap_err("seed catalogue")?;

    println!("users_inserted={}", outcome.users_inserted);
    println!("products_inserted={}", outcome.products_inserted);
    Ok(())
}

fn non_blank(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        Err("database URL must not be blank".to_owned())
    } else {
        Ok(raw.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn flag_parses_with_migrate() {
        let _guard = lock_env([("DATABASE_URL", None::<String>)]);
        let args = CliArgs::try_parse_from([
            "seed-catalog",
            "--database-url",
            "postgres://localhost/shop",
            "--migrate",
        ])
        .expect("valid arguments");
        assert_eq!(args.database_url, "postgres://localhost/shop");
        assert!(args.migrate);
    }

    #[rstest]
    fn explicit_flag_wins_over_environment() {
        let _guard = lock_env([("DATABASE_URL", Some("postgres://env/db".to_owned()))]);
        let args = CliArgs::try_parse_from(["seed-catalog", "--database-url", "postgres://flag/db"])
            .expect("valid arguments");
        assert_eq!(args.database_url, "postgres://flag/db");
    }

    #[rstest]
    fn environment_supplies_the_url() {
        let _guard = lock_env([("DATABASE_URL", Some("postgres://env/db".to_owned()))]);
        let args = CliArgs::try_parse_from(["seed-catalog"]).expect("valid arguments");
        assert_eq!(args.database_url, "postgres://env/db");
        assert!(!args.migrate);
    }

    #[rstest]
    #[case::missing(None)]
    #[case::blank(Some("  ".to_owned()))]
    fn unusable_urls_are_rejected(#[case] value: Option<String>) {
        let _guard = lock_env([("DATABASE_URL", value)]);
        assert!(CliArgs::try_parse_from(["seed-catalog"]).is_err());
    }
}
