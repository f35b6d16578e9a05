use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cable_ampacity_toolbox::app::{self, AppError};
use cable_ampacity_toolbox::cable::{
    Arrangement, ConductorType, QueryParameters, SelectionPolicy, SpacingClass,
};
use cable_ampacity_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use cable_ampacity_toolbox::i18n::{self, Translator};
use cable_ampacity_toolbox::logging;

/// 가요 전선 허용전류 계산기.
#[derive(Debug, Parser)]
#[command(name = "cable_ampacity", version)]
struct Cli {
    /// 표시 언어 (auto, ko, en, zh-tw)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그 필터 (예: debug). 없으면 AMPACITY_LOG 환경변수를 따른다.
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 허용전류를 계산한다.
    Compute {
        #[arg(long, value_parser = parse_conductor, default_value = "hypalon")]
        conductor: ConductorType,
        /// 공칭 단면적 라벨 [mm²]
        #[arg(long)]
        size: String,
        /// 주위온도 [°C]
        #[arg(long = "temp", default_value_t = 25.0, allow_negative_numbers = true)]
        temperature_c: f64,
        /// 전선관 포설: 동일 관 내 조수 구간 키 (1, 2, 3, 4, 5-6, 7-15, 16-40, 41-60, 60+)
        #[arg(long, conflicts_with_all = ["spacing", "count"])]
        bundle: Option<String>,
        /// 공중/암거 포설: 배열 간격 (S=d, S=2d, S=3d)
        #[arg(long, value_parser = parse_spacing, requires = "count")]
        spacing: Option<SpacingClass>,
        /// 공중/암거 포설: 조수 (1, 2, 3, 4, 6, 8, 9, 12)
        #[arg(long, requires = "spacing")]
        count: Option<u32>,
        /// 보정표에 없는 선택값을 오류로 처리한다.
        #[arg(long)]
        strict: bool,
    },
    /// 도체 종류별 규격 목록을 출력한다.
    Sizes {
        #[arg(long, value_parser = parse_conductor, default_value = "hypalon")]
        conductor: ConductorType,
    },
    /// 보정계수표를 출력한다.
    Tables,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level.as_deref());
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default_at(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    tracing::debug!(lang = %lang, config = %cli.config.display(), "starting");
    let tr = Translator::new(&lang);

    match cli.command {
        None => app::run(&mut cfg, &tr),
        Some(Command::Compute {
            conductor,
            size,
            temperature_c,
            bundle,
            spacing,
            count,
            strict,
        }) => {
            let arrangement = match (bundle, spacing, count) {
                (_, Some(spacing), Some(count)) => Arrangement::OpenAirOrDuct { spacing, count },
                (Some(bundle), _, _) => Arrangement::Conduit {
                    bundle: bundle.trim().to_string(),
                },
                (None, None, None) => Arrangement::Conduit {
                    bundle: "1".into(),
                },
                _ => {
                    return Err(AppError::InvalidArgument(
                        "--spacing 와 --count 는 함께 지정해야 합니다.".into(),
                    ))
                }
            };
            let policy = if strict {
                SelectionPolicy::Strict
            } else {
                cfg.selection_policy
            };
            let params = QueryParameters {
                conductor,
                size,
                temperature_c,
                arrangement,
            };
            app::run_compute(&mut cfg, &tr, &params, policy)
        }
        Some(Command::Sizes { conductor }) => {
            app::run_sizes(&tr, conductor);
            Ok(())
        }
        Some(Command::Tables) => {
            app::run_tables(&tr);
            Ok(())
        }
    }
}

fn parse_conductor(s: &str) -> Result<ConductorType, String> {
    ConductorType::from_code(s).ok_or_else(|| format!("unknown conductor type: {s} (hypalon, pvc)"))
}

fn parse_spacing(s: &str) -> Result<SpacingClass, String> {
    SpacingClass::from_label(s).ok_or_else(|| format!("unknown spacing: {s} (S=d, S=2d, S=3d)"))
}
