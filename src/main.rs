use bahtbot::app::App;
use bahtbot::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("bahtbot starting");

    if let Err(e) = App::run(config).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("bahtbot stopped");
}
