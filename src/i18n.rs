use sys_locale::get_locale;

use crate::cable::{BundleCount, ConductorType, InstallationMethod};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const DISCLAIMER: &str = "general.disclaimer";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPUTE: &str = "main_menu.compute";
    pub const MAIN_MENU_SIZES: &str = "main_menu.sizes";
    pub const MAIN_MENU_TABLES: &str = "main_menu.tables";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const COMPUTE_HEADING: &str = "compute.heading";
    pub const PROMPT_CONDUCTOR: &str = "prompt.conductor";
    pub const PROMPT_SIZE: &str = "prompt.size";
    pub const PROMPT_METHOD: &str = "prompt.method";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const PROMPT_BUNDLE: &str = "prompt.bundle";
    pub const PROMPT_SPACING: &str = "prompt.spacing";
    pub const PROMPT_COUNT: &str = "prompt.count";
    pub const KEEP_DEFAULT_HINT: &str = "prompt.keep_default_hint";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_FINAL: &str = "result.final";
    pub const RESULT_BASE: &str = "result.base";
    pub const RESULT_TEMPERATURE_FACTOR: &str = "result.temperature_factor";
    pub const RESULT_BUNDLE_FACTOR: &str = "result.bundle_factor";
    pub const RESULT_SPACING_FACTOR: &str = "result.spacing_factor";
    pub const RESULT_FALLBACK_NOTE: &str = "result.fallback_note";
    pub const RESULT_FORMULA: &str = "result.formula";
    pub const RESULT_MAX_CONDUCTOR_TEMP: &str = "result.max_conductor_temp";
    pub const RESULT_SOURCES: &str = "result.sources";

    pub const SIZES_HEADING: &str = "sizes.heading";
    pub const SIZES_COLUMNS: &str = "sizes.columns";
    pub const TABLES_TEMPERATURE: &str = "tables.temperature";
    pub const TABLES_BUNDLE: &str = "tables.bundle";
    pub const TABLES_SPACING: &str = "tables.spacing";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const CONDUCTOR_HYPALON: &str = "label.conductor_hypalon";
    pub const CONDUCTOR_PVC: &str = "label.conductor_pvc";
    pub const METHOD_CONDUIT: &str = "label.method_conduit";
    pub const METHOD_AIR: &str = "label.method_air";
    pub const COUNT_UNIT: &str = "label.count_unit";
    pub const POLICY_LENIENT: &str = "label.policy_lenient";
    pub const POLICY_STRICT: &str = "label.policy_strict";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    ZhTw,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("zh") {
            Language::ZhTw
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::ZhTw => "zh-tw",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en/zh-tw)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 해당 언어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::ZhTw => zh_tw(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    pub fn conductor_label(&self, conductor: ConductorType) -> &'static str {
        match conductor {
            ConductorType::Hypalon => self.t(keys::CONDUCTOR_HYPALON),
            ConductorType::Pvc => self.t(keys::CONDUCTOR_PVC),
        }
    }

    pub fn method_label(&self, method: InstallationMethod) -> &'static str {
        match method {
            InstallationMethod::Conduit => self.t(keys::METHOD_CONDUIT),
            InstallationMethod::OpenAirOrDuct => self.t(keys::METHOD_AIR),
        }
    }

    /// 조수 구간 라벨 (예: "5-6 條").
    pub fn bundle_label(&self, bundle: &BundleCount) -> String {
        format!("{} {}", bundle.key, self.t(keys::COUNT_UNIT))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase().replace('_', "-");
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("zh") => Some("zh-tw".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_lang(&loc) {
            return Some(lang);
        }
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_lang(v.split('.').next().unwrap_or_default()))
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        DISCLAIMER => "계산 결과는 참고용입니다. 실제 적용 시 현장 포설 조건과 최신 규격표/법규로 검증하십시오.",
        MAIN_MENU_TITLE => "\n=== Cable Ampacity Toolbox ===",
        MAIN_MENU_COMPUTE => "1) 허용전류 계산",
        MAIN_MENU_SIZES => "2) 규격 목록",
        MAIN_MENU_TABLES => "3) 보정계수표",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        COMPUTE_HEADING => "\n-- 허용전류 계산 --",
        PROMPT_CONDUCTOR => "전선 종류",
        PROMPT_SIZE => "공칭 단면적 [mm²]",
        PROMPT_METHOD => "포설 방식",
        PROMPT_TEMPERATURE => "주위온도 [°C]",
        PROMPT_BUNDLE => "동일 관 내 조수",
        PROMPT_SPACING => "배열 간격",
        PROMPT_COUNT => "조수 (f4)",
        KEEP_DEFAULT_HINT => "(엔터 = 기본값)",
        RESULT_HEADING => "\n-- 계산 결과 --",
        RESULT_FINAL => "허용전류:",
        RESULT_BASE => "기준 전류 In:",
        RESULT_TEMPERATURE_FACTOR => "온도 보정계수:",
        RESULT_BUNDLE_FACTOR => "조수 보정계수 f2:",
        RESULT_SPACING_FACTOR => "다조 포설 보정계수 f4:",
        RESULT_FALLBACK_NOTE => "주의: 선택값이 보정표에 없어 1.0을 적용했습니다.",
        RESULT_FORMULA => "계산식:",
        RESULT_MAX_CONDUCTOR_TEMP => "도체 최고허용온도:",
        RESULT_SOURCES => "데이터 출처:",
        SIZES_HEADING => "\n-- 규격 목록 --",
        SIZES_COLUMNS => "단면적[mm²]  전선관[A]  공중/암거[A]",
        TABLES_TEMPERATURE => "\n-- 온도 보정계수 (f1 전선관 / f3 공중·암거) --",
        TABLES_BUNDLE => "\n-- 동일 관 내 조수 보정계수 f2 --",
        TABLES_SPACING => "\n-- 다조 포설 보정계수 f4 (간격 × 조수) --",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 언어/선택 정책:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 繁體中文  4) 관대 정책  5) 엄격 정책",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다:",
        CONDUCTOR_HYPALON => "하이파론 (90°C)",
        CONDUCTOR_PVC => "PVC 가요전선 (105°C)",
        METHOD_CONDUIT => "전선관",
        METHOD_AIR => "공중 / 암거",
        COUNT_UNIT => "조",
        POLICY_LENIENT => "관대(1.0 대체)",
        POLICY_STRICT => "엄격(오류)",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        DISCLAIMER => "Results are for reference only. Verify against site conditions and the latest tables and regulations.",
        MAIN_MENU_TITLE => "\n=== Cable Ampacity Toolbox ===",
        MAIN_MENU_COMPUTE => "1) Compute ampacity",
        MAIN_MENU_SIZES => "2) Size list",
        MAIN_MENU_TABLES => "3) Correction factor tables",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        COMPUTE_HEADING => "\n-- Ampacity --",
        PROMPT_CONDUCTOR => "Wire type",
        PROMPT_SIZE => "Nominal size [mm²]",
        PROMPT_METHOD => "Installation",
        PROMPT_TEMPERATURE => "Ambient temperature [°C]",
        PROMPT_BUNDLE => "Conductors in conduit",
        PROMPT_SPACING => "Spacing",
        PROMPT_COUNT => "Conductor count (f4)",
        KEEP_DEFAULT_HINT => "(enter = default)",
        RESULT_HEADING => "\n-- Result --",
        RESULT_FINAL => "Ampacity:",
        RESULT_BASE => "Base current In:",
        RESULT_TEMPERATURE_FACTOR => "Temperature factor:",
        RESULT_BUNDLE_FACTOR => "Bundle factor f2:",
        RESULT_SPACING_FACTOR => "Grouping factor f4:",
        RESULT_FALLBACK_NOTE => "Note: selection not in the factor table; 1.0 applied.",
        RESULT_FORMULA => "Formula:",
        RESULT_MAX_CONDUCTOR_TEMP => "Max conductor temperature:",
        RESULT_SOURCES => "Data sources:",
        SIZES_HEADING => "\n-- Sizes --",
        SIZES_COLUMNS => "Size[mm²]  Conduit[A]  Air/Duct[A]",
        TABLES_TEMPERATURE => "\n-- Temperature factors (f1 conduit / f3 air, duct) --",
        TABLES_BUNDLE => "\n-- Conductors-in-conduit factor f2 --",
        TABLES_SPACING => "\n-- Grouping factor f4 (spacing × count) --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current language/selection policy:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 繁體中文  4) Lenient policy  5) Strict policy",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings changed:",
        CONDUCTOR_HYPALON => "Hypalon (90°C)",
        CONDUCTOR_PVC => "PVC flexible (105°C)",
        METHOD_CONDUIT => "Conduit",
        METHOD_AIR => "Open air / duct",
        COUNT_UNIT => "wires",
        POLICY_LENIENT => "lenient (1.0 fallback)",
        POLICY_STRICT => "strict (error)",
        _ => return None,
    })
}

fn zh_tw(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "錯誤",
        APP_EXIT => "結束程式。",
        DISCLAIMER => "本查詢結果僅供參考，實際應用請依現場佈設條件與最新規格表、法規核算。",
        MAIN_MENU_COMPUTE => "1) 查詢安全電流",
        MAIN_MENU_SIZES => "2) 規格尺寸",
        MAIN_MENU_TABLES => "3) 修正係數表",
        MAIN_MENU_SETTINGS => "4) 設定",
        MAIN_MENU_EXIT => "0) 結束",
        PROMPT_MENU_SELECT => "選擇選單: ",
        INVALID_SELECTION_RETRY => "輸入無效，請重新選擇。",
        ERROR_INVALID_NUMBER => "請輸入數字。",
        COMPUTE_HEADING => "\n-- 安全電流查詢 --",
        PROMPT_CONDUCTOR => "電線類型",
        PROMPT_SIZE => "規格尺寸 [mm²]",
        PROMPT_METHOD => "佈設方式",
        PROMPT_TEMPERATURE => "周圍溫度 [°C]",
        PROMPT_BUNDLE => "同管條數",
        PROMPT_SPACING => "多條佈設間距（配列）",
        PROMPT_COUNT => "條數（f4 係數）",
        KEEP_DEFAULT_HINT => "(Enter = 預設值)",
        RESULT_HEADING => "\n-- 計算結果 --",
        RESULT_FINAL => "安全電流值:",
        RESULT_BASE => "基準電流:",
        RESULT_TEMPERATURE_FACTOR => "溫度係數:",
        RESULT_BUNDLE_FACTOR => "條數係數 f2:",
        RESULT_SPACING_FACTOR => "多條佈設係數 f4:",
        RESULT_FALLBACK_NOTE => "注意：選項不在係數表中，已套用 1.0。",
        RESULT_FORMULA => "公式:",
        RESULT_MAX_CONDUCTOR_TEMP => "導體最高工作溫度:",
        RESULT_SOURCES => "資料來源:",
        SIZES_HEADING => "\n-- 規格尺寸 --",
        SIZES_COLUMNS => "尺寸[mm²]  電線管[A]  空中/暗渠[A]",
        TABLES_TEMPERATURE => "\n-- 溫度修正係數 (f1 電線管 / f3 空中及暗渠) --",
        TABLES_BUNDLE => "\n-- 同一管內多條電線換算係數 f2 --",
        TABLES_SPACING => "\n-- 空中及暗渠多條佈設換算係數 f4（條數 × 配列間距） --",
        SETTINGS_HEADING => "\n-- 設定 --",
        SETTINGS_CURRENT => "目前語言/選項策略:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 繁體中文  4) 寬鬆策略  5) 嚴格策略",
        SETTINGS_PROMPT_CHANGE => "輸入要變更的編號（Enter 取消）: ",
        SETTINGS_INVALID => "輸入無效，設定未變更。",
        SETTINGS_SAVED => "設定已變更:",
        CONDUCTOR_HYPALON => "海帕龍 (90°C)",
        CONDUCTOR_PVC => "PVC 軟線 (105°C)",
        METHOD_CONDUIT => "電線管",
        METHOD_AIR => "空中 / 暗渠",
        COUNT_UNIT => "條",
        POLICY_LENIENT => "寬鬆（套用 1.0）",
        POLICY_STRICT => "嚴格（回報錯誤）",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_cli_language_wins() {
        assert_eq!(resolve_language("zh_TW", Some("en")), "zh-tw");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn unknown_code_falls_back_to_korean() {
        assert_eq!(Translator::new("zh_TW").language_code(), "zh-tw");
        assert_eq!(Translator::new("en-GB").language_code(), "en");
        assert_eq!(Translator::new("fr").language_code(), "ko");
    }

    #[test]
    fn missing_chinese_key_falls_back_to_korean() {
        let tr = Translator::new("zh-tw");
        assert_eq!(tr.t(keys::MAIN_MENU_TITLE), ko(keys::MAIN_MENU_TITLE));
    }

    #[test]
    fn bundle_label_uses_count_unit() {
        let tr = Translator::new("zh-tw");
        let opt = &crate::cable::bundle_options()[4];
        assert_eq!(tr.bundle_label(opt), "5-6 條");
    }
}
