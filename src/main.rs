use std::path::PathBuf;

use clap::Parser;

use ev_environment_metrics::{app, config, pipeline::MetricsRequest, ui_cli};

/// 서버 없이 터미널에서 지표 보고서를 계산한다.
#[derive(Parser, Debug)]
#[command(name = "ev_environment_metrics_cli")]
#[command(about = "Compute the EV vs. combustion environment report in the terminal")]
struct Args {
    /// 연간 이율 [%]. 생략하면 입력을 요청한다.
    #[arg(long, allow_hyphen_values = true)]
    ipc: Option<f64>,

    /// 연료 종류(gasoline, diesel). 생략하면 메뉴에서 선택한다.
    #[arg(long)]
    fuel: Option<String>,

    /// 표 대신 JSON으로 출력한다.
    #[arg(long)]
    json: bool,

    /// 설정 파일 경로.
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH, env = "EVMETRICS_CONFIG")]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 보고서를 계산해 출력한다.
fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = try_run(Args::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(args: Args) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&args.config)?;
    let ipc = match args.ipc {
        Some(v) => v,
        None => ui_cli::prompt_rate()?,
    };
    let fuel = match args.fuel {
        Some(f) => f,
        None => ui_cli::prompt_fuel()?.as_str().to_string(),
    };

    let report = app::build_pipeline(&cfg).compute(&MetricsRequest::new(ipc, fuel))?;
    if args.json {
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| app::AppError::Io(e.into()))?;
        println!("{text}");
    } else {
        ui_cli::print_report(&report);
    }
    Ok(())
}
