use anyhow::Context;
use titanic::domain::config::{ApiConfig, Environment};
use titanic::kernel::config::load_config;
use titanic_logger::{LevelFilter, Logger};
use titanic_runtime::RuntimeConfig;
use titanic_server::Server;

/// Environment variable selecting the configuration profile at startup.
const ENV_VAR: &str = "TITANIC_ENV";

fn main() -> anyhow::Result<()> {
    // Sourced exactly once; everything downstream receives the parsed value.
    let environment = std::env::var(ENV_VAR)
        .unwrap_or_else(|_| Environment::default().to_string())
        .parse::<Environment>()
        .context("Critical: Unrecognized environment name")?;

    let runtime = titanic_runtime::build_runtime_with_config(&RuntimeConfig::high_performance())?;
    runtime.block_on(serve(environment))
}

async fn serve(environment: Environment) -> anyhow::Result<()> {
    let level = match environment {
        Environment::Development | Environment::Testing => LevelFilter::DEBUG,
        Environment::Production => LevelFilter::INFO,
    };
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).init()?;

    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).environment(environment).build()?.run().await
}
