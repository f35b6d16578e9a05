//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 다른 화면에서도 그대로 호출할 수 있게 한다.

pub mod app;
pub mod cable;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod ui_cli;
