// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 是否为支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（当前语言，无参数）
///
/// # 示例
/// ```no_run
/// use garment_supply_chain::i18n::t;
/// let msg = t("asset.cotton_bale");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（指定语言，带参数）
///
/// 不读写全局语言，渲染器使用此函数
///
/// # 示例
/// ```no_run
/// use garment_supply_chain::i18n::t_in;
/// let msg = t_in("en", "report.order_size", &[("order_size", "10000")]);
/// ```
pub fn t_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key, locale = locale).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对修改全局语言的测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");
        assert_eq!(t("asset.cotton_bale"), "Cotton Bale");

        set_locale(DEFAULT_LOCALE);
        assert_eq!(current_locale(), "zh-CN");
        assert_eq!(t("asset.cotton_bale"), "棉包");
    }

    #[test]
    fn test_translate_in_locale() {
        let msg = t_in("en", "report.order_size", &[("order_size", "10000")]);
        assert_eq!(msg, "Order Size: 10000");

        let msg = t_in("zh-CN", "report.order_size", &[("order_size", "10000")]);
        assert_eq!(msg, "订单量: 10000");
    }

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("en"));
        assert!(is_supported("zh-CN"));
        assert!(!is_supported("fr"));
    }
}
