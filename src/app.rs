use crate::cable::{self, AmpacityError, ConductorType, QueryParameters, SelectionPolicy};
use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 허용전류 계산 오류
    Ampacity(AmpacityError),
    /// 명령행 인자가 잘못된 경우
    InvalidArgument(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Ampacity(e) => write!(f, "허용전류 계산 오류: {e}"),
            AppError::InvalidArgument(msg) => write!(f, "인자 오류: {msg}"),
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

impl From<AmpacityError> for AppError {
    fn from(value: AmpacityError) -> Self {
        AppError::Ampacity(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut tr = tr.clone();
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Compute => {
                // 계산 오류(규격 없음 등)는 해당 질의만 실패시키고 메뉴로 돌아간다.
                if let Err(err) = ui_cli::handle_compute(&tr, config) {
                    match err {
                        AppError::Ampacity(e) => {
                            println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX))
                        }
                        other => return Err(other),
                    }
                }
            }
            MenuChoice::Sizes => ui_cli::handle_sizes(&tr, config)?,
            MenuChoice::Tables => ui_cli::print_tables(&tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(&tr, config)?;
                config.save()?;
                tr = Translator::new(&i18n::resolve_language("auto", Some(&config.language)));
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 비대화형 계산: 결과를 출력하고 설정의 기본값을 갱신한다.
pub fn run_compute(
    config: &mut Config,
    tr: &Translator,
    params: &QueryParameters,
    policy: SelectionPolicy,
) -> Result<(), AppError> {
    let result = cable::compute_ampacity_with(params, policy)?;
    ui_cli::print_result(tr, params, &result);
    config.defaults.remember(params);
    config.save()?;
    Ok(())
}

pub fn run_sizes(tr: &Translator, conductor: ConductorType) {
    ui_cli::print_sizes(tr, conductor);
}

pub fn run_tables(tr: &Translator) {
    ui_cli::print_tables(tr);
}
