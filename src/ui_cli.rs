use std::io::{self, Write};

use crate::app::AppError;
use crate::cable::{
    self, Arrangement, ConductorType, InstallationMethod, QueryParameters, QueryResult,
    SelectionPolicy, SpacingClass,
};
use crate::config::Config;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compute,
    Sizes,
    Tables,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPUTE));
    println!("{}", tr.t(keys::MAIN_MENU_SIZES));
    println!("{}", tr.t(keys::MAIN_MENU_TABLES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compute),
            "2" => return Ok(MenuChoice::Sizes),
            "3" => return Ok(MenuChoice::Tables),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 허용전류 계산 메뉴를 처리한다. 입력값은 다음 실행의 기본값으로 기억한다.
pub fn handle_compute(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPUTE_HEADING));
    let defaults = cfg.defaults.clone();

    let conductor_opts: Vec<(String, ConductorType)> = cable::conductor_types()
        .iter()
        .map(|&c| (tr.conductor_label(c).to_string(), c))
        .collect();
    let conductor = choose(tr, tr.t(keys::PROMPT_CONDUCTOR), &conductor_opts, defaults.conductor)?;

    let size_default = cable::size_for_conductor(conductor, &defaults.size);
    let size_opts: Vec<(String, &'static str)> = cable::size_labels(conductor)
        .into_iter()
        .map(|s| (format!("{s} mm²"), s))
        .collect();
    let size = choose(tr, tr.t(keys::PROMPT_SIZE), &size_opts, size_default)?;

    let method_opts: Vec<(String, InstallationMethod)> = InstallationMethod::ALL
        .iter()
        .map(|&m| (tr.method_label(m).to_string(), m))
        .collect();
    let method = choose(tr, tr.t(keys::PROMPT_METHOD), &method_opts, defaults.method)?;

    let temperature_c = read_f64_or(tr, tr.t(keys::PROMPT_TEMPERATURE), defaults.temperature_c)?;

    let arrangement = match method {
        InstallationMethod::Conduit => {
            let bundle_opts: Vec<(String, &'static str)> = cable::bundle_options()
                .iter()
                .map(|b| (format!("{} ({})", tr.bundle_label(b), b.factor), b.key))
                .collect();
            let default_key = cable::bundle_keys()
                .into_iter()
                .find(|k| *k == defaults.bundle)
                .unwrap_or("1");
            let bundle = choose(tr, tr.t(keys::PROMPT_BUNDLE), &bundle_opts, default_key)?;
            Arrangement::Conduit {
                bundle: bundle.to_string(),
            }
        }
        InstallationMethod::OpenAirOrDuct => {
            let spacing_opts: Vec<(String, SpacingClass)> = cable::spacing_classes()
                .iter()
                .map(|&s| (s.label().to_string(), s))
                .collect();
            let spacing = choose(tr, tr.t(keys::PROMPT_SPACING), &spacing_opts, defaults.spacing)?;
            let count_opts: Vec<(String, u32)> = cable::spacing_counts()
                .iter()
                .map(|&n| {
                    let f4 = cable::factor_resolver::spacing_count_factor(spacing, n).unwrap_or(1.0);
                    (format!("{n} {} (f4: {f4})", tr.t(keys::COUNT_UNIT)), n)
                })
                .collect();
            let count = choose(tr, tr.t(keys::PROMPT_COUNT), &count_opts, defaults.count)?;
            Arrangement::OpenAirOrDuct { spacing, count }
        }
    };

    let params = QueryParameters {
        conductor,
        size: size.to_string(),
        temperature_c,
        arrangement,
    };
    let result = cable::compute_ampacity_with(&params, cfg.selection_policy)?;
    print_result(tr, &params, &result);
    cfg.defaults.remember(&params);
    Ok(())
}

/// 규격 목록 메뉴를 처리한다.
pub fn handle_sizes(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let opts: Vec<(String, ConductorType)> = cable::conductor_types()
        .iter()
        .map(|&c| (tr.conductor_label(c).to_string(), c))
        .collect();
    let conductor = choose(tr, tr.t(keys::PROMPT_CONDUCTOR), &opts, cfg.defaults.conductor)?;
    print_sizes(tr, conductor);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} ({}) / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        tr.language_code(),
        policy_label(tr, cfg.selection_policy)
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => cfg.language = "ko".into(),
        "2" => cfg.language = "en".into(),
        "3" => cfg.language = "zh-tw".into(),
        "4" => cfg.selection_policy = SelectionPolicy::Lenient,
        "5" => cfg.selection_policy = SelectionPolicy::Strict,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!(
        "{} {} / {}",
        tr.t(keys::SETTINGS_SAVED),
        cfg.language,
        policy_label(tr, cfg.selection_policy)
    );
    Ok(())
}

/// 계산 결과와 중간 계수를 출력한다.
pub fn print_result(tr: &Translator, params: &QueryParameters, result: &QueryResult) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} / {} mm² / {}",
        tr.conductor_label(result.conductor),
        result.size,
        tr.method_label(result.method)
    );
    println!("{} {} A", tr.t(keys::RESULT_FINAL), result.final_ampacity);
    println!("{} {} A", tr.t(keys::RESULT_BASE), result.base_ampacity);
    println!(
        "{} {} ({}°C)",
        tr.t(keys::RESULT_TEMPERATURE_FACTOR),
        result.temperature_factor,
        result.temperature_key_c
    );
    match &params.arrangement {
        Arrangement::Conduit { bundle } => println!(
            "{} {} ({bundle} {})",
            tr.t(keys::RESULT_BUNDLE_FACTOR),
            result.secondary_factor,
            tr.t(keys::COUNT_UNIT)
        ),
        Arrangement::OpenAirOrDuct { spacing, count } => println!(
            "{} {} ({}, {count} {})",
            tr.t(keys::RESULT_SPACING_FACTOR),
            result.secondary_factor,
            spacing.label(),
            tr.t(keys::COUNT_UNIT)
        ),
    }
    if result.secondary_fallback {
        println!("{}", tr.t(keys::RESULT_FALLBACK_NOTE));
    }
    println!("{} {}", tr.t(keys::RESULT_FORMULA), result.method.formula());
    println!(
        "{} {}°C",
        tr.t(keys::RESULT_MAX_CONDUCTOR_TEMP),
        result.conductor.max_conductor_temp_c()
    );
    println!("{}", tr.t(keys::RESULT_SOURCES));
    for note in result.conductor.source_notes() {
        println!("  - {note}");
    }
    println!("{}", tr.t(keys::DISCLAIMER));
}

/// 도체 종류별 규격과 기준 전류를 출력한다.
pub fn print_sizes(tr: &Translator, conductor: ConductorType) {
    println!("{}", tr.t(keys::SIZES_HEADING));
    println!("{}", tr.conductor_label(conductor));
    println!("{}", tr.t(keys::SIZES_COLUMNS));
    for spec in cable::size_specs(conductor) {
        println!("{:>10}  {:>9}  {:>11}", spec.size, spec.conduit_a, spec.open_air_a);
    }
}

/// 모든 보정계수표를 출력한다.
pub fn print_tables(tr: &Translator) {
    println!("{}", tr.t(keys::TABLES_TEMPERATURE));
    for conductor in cable::conductor_types() {
        for method in InstallationMethod::ALL {
            let table = cable::temperature_factors(*conductor, method);
            let row: Vec<String> = table
                .points
                .iter()
                .map(|p| format!("{}°C={}", p.temp_c, p.factor))
                .collect();
            println!(
                "{} / {}: {}",
                tr.conductor_label(*conductor),
                tr.method_label(method),
                row.join("  ")
            );
        }
    }
    println!("{}", tr.t(keys::TABLES_BUNDLE));
    for b in cable::bundle_options() {
        println!("{:>12}: {}", tr.bundle_label(b), b.factor);
    }
    println!("{}", tr.t(keys::TABLES_SPACING));
    let header: Vec<String> = cable::spacing_counts().iter().map(|n| format!("{n:>5}")).collect();
    println!("{:>6} {}", "", header.join(""));
    for row in cable::spacing_count_factors() {
        let cells: Vec<String> = row.factors.iter().map(|f| format!("{f:>5}")).collect();
        println!("{:>6} {}", row.spacing.label(), cells.join(""));
    }
}

fn policy_label(tr: &Translator, policy: SelectionPolicy) -> &'static str {
    match policy {
        SelectionPolicy::Lenient => tr.t(keys::POLICY_LENIENT),
        SelectionPolicy::Strict => tr.t(keys::POLICY_STRICT),
    }
}

/// 번호 목록에서 하나를 고른다. 빈 입력이면 기본값을 돌려준다.
fn choose<T: Copy + PartialEq>(
    tr: &Translator,
    title: &str,
    options: &[(String, T)],
    default: T,
) -> Result<T, AppError> {
    println!("{title} {}", tr.t(keys::KEEP_DEFAULT_HINT));
    for (i, (label, value)) in options.iter().enumerate() {
        let marker = if *value == default { "*" } else { " " };
        println!("{marker}{:>2}) {label}", i + 1);
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default);
        }
        match sel.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].1),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64_or(tr: &Translator, title: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{title} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
