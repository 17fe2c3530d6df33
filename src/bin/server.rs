//! EV 대비 내연기관 환경 지표 HTTP 서버.
//!
//! ```sh
//! ev_environment_metrics --config config.toml --port 3000
//! curl http://localhost:3000/enviroment/2.8/diesel
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use ev_environment_metrics::{app, config};

/// 명령행 인자.
#[derive(Parser, Debug)]
#[command(name = "ev_environment_metrics")]
#[command(about = "EV vs. combustion environment metrics server")]
struct Args {
    /// 설정 파일 경로. 없으면 기본값으로 생성한다.
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH, env = "EVMETRICS_CONFIG")]
    config: PathBuf,

    /// 설정 파일의 바인딩 주소를 덮어쓴다.
    #[arg(short, long, env = "EVMETRICS_BIND")]
    bind: Option<String>,

    /// 설정 파일의 포트를 덮어쓴다.
    #[arg(short, long, env = "EVMETRICS_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ev_environment_metrics=info")),
        )
        .init();

    if let Err(err) = try_run(Args::parse()).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn try_run(args: Args) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.server.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.server.port = port;
    }
    info!(
        config = %args.config.display(),
        bind = %cfg.server.bind,
        port = cfg.server.port,
        "starting environment metrics server"
    );
    app::serve(&cfg).await
}
