use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing::info;

use crate::config::{Config, ServerConfig};
use crate::pipeline::{MetricsPipeline, PipelineError};
use crate::server;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/소켓 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 지표 계산 오류
    Pipeline(PipelineError),
    /// 바인딩 주소 해석 실패
    InvalidAddress(String),
    /// 이율 입력 파싱 실패
    InvalidRate(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Pipeline(e) => write!(f, "{e}"),
            AppError::InvalidAddress(addr) => write!(f, "잘못된 바인딩 주소: {addr}"),
            AppError::InvalidRate(raw) => write!(f, "잘못된 이율 값: {raw}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<PipelineError> for AppError {
    fn from(value: PipelineError) -> Self {
        AppError::Pipeline(value)
    }
}

/// 설정으로부터 계산 파이프라인을 만든다.
pub fn build_pipeline(config: &Config) -> MetricsPipeline {
    MetricsPipeline::new(config.constants.clone(), config.vehicle.clone())
}

/// `[server]` 설정을 소켓 주소로 바꾼다. `bind`는 IPv4/IPv6 주소 그대로 받는다.
pub fn socket_addr(server: &ServerConfig) -> Result<SocketAddr, AppError> {
    let ip: IpAddr = server
        .bind
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidAddress(server.bind.clone()))?;
    Ok(SocketAddr::from((ip, server.port)))
}

/// 설정된 주소에 HTTP 서버를 띄우고 종료될 때까지 대기한다.
pub async fn serve(config: &Config) -> Result<(), AppError> {
    let addr = socket_addr(&config.server)?;

    let router = server::build_router(Arc::new(build_pipeline(config)));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
