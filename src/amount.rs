use regex::Regex;
use std::sync::LazyLock;

/// 金额匹配规则，按优先级排列：先命中的规则生效
static AMOUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "100 dollars" / "100 dollar"
        r"([0-9]+)\s*dollars?",
        // "$100"
        r"\$([0-9]+)",
        // "20 bucks" / "20 buck"
        r"([0-9]+)\s*bucks?",
        // 任意数字
        r"([0-9]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("金额正则无效"))
    .collect()
});

/// 未识别到金额时的返回值
pub const NO_AMOUNT: &str = "0";

/// 从已归一化文本中提取下注金额，仅返回数字串；未找到时返回 "0"
pub fn extract_amount(text: &str) -> String {
    AMOUNT_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NO_AMOUNT.to_string())
}
