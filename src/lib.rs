//! 계산 로직을 라이브러리로 분리하여 HTTP 서버와 CLI가 같은 파이프라인을 사용한다.

pub mod app;
pub mod config;
pub mod environment;
pub mod pipeline;
pub mod server;
pub mod ui_cli;
