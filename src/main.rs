use std::process::ExitCode;

use medidiag::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    medidiag::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match medidiag::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
