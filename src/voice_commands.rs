use crate::amount::extract_amount;
use crate::bet_options::BetOption;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 关键词 → 同义词表，顺序即打分顺序
const SYNONYMS: &[(&str, &[&str])] = &[
    ("mahomes", &["mahomes", "patrick"]),
    ("touchdown", &["touchdown", "td", "score"]),
    ("chiefs", &["chiefs", "kansas city", "kc"]),
    ("bills", &["bills", "buffalo"]),
    ("field goal", &["field goal", "fg", "kick"]),
    ("kelce", &["kelce", "travis"]),
    ("yards", &["yards", "yds", "passing", "receiving"]),
    ("win", &["win", "victory", "beat"]),
];

/// 同义词命中得分
const SYNONYM_SCORE: u32 = 2;
/// 选项名称首词命中得分
const LEADING_WORD_SCORE: u32 = 3;

/// 匹配置信度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// 一次语音下注指令的解析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceCommandResult {
    /// 下注金额（纯数字串），未识别为 "0"
    pub amount: String,
    pub matched_option: BetOption,
    /// 原始转写文本（未归一化）
    pub original_text: String,
    pub confidence: Confidence,
}

impl VoiceCommandResult {
    /// 组装结果：置信度只取决于最高分是否大于 0
    pub fn new(amount: String, matched_option: BetOption, original_text: &str, score: u32) -> Self {
        let confidence = if score > 0 {
            Confidence::High
        } else {
            Confidence::Low
        };
        Self {
            amount,
            matched_option,
            original_text: original_text.to_string(),
            confidence,
        }
    }

    /// 供确认界面展示的一行摘要
    pub fn summary(&self) -> String {
        let option = &self.matched_option;
        let mut line = format!(
            "[下注] ${} → {} ({}, {}) 置信度: {}",
            self.amount, option.label, option.odds, option.payout_description, self.confidence
        );
        if self.confidence == Confidence::Low {
            line.push_str("，请确认");
        }
        line
    }
}

/// 选项匹配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionMatch<'a> {
    pub option: &'a BetOption,
    pub score: u32,
}

/// 归一化：转小写并去掉首尾空白
pub fn normalize_transcript(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 计算单个选项对转写文本的得分，`text` 需已归一化
pub fn score_option(text: &str, option: &BetOption) -> u32 {
    let label = option.label.to_lowercase();
    let mut score = 0;

    for (keyword, synonyms) in SYNONYMS {
        let label_mentions =
            label.contains(keyword) || synonyms.iter().any(|s| label.contains(s));
        if !label_mentions {
            continue;
        }
        // 每个命中的同义词单独计分，不按关键词组封顶
        let hits = synonyms.iter().filter(|s| text.contains(*s)).count() as u32;
        score += hits * SYNONYM_SCORE;
    }

    if let Some(first_word) = label.split_whitespace().next() {
        if text.contains(first_word) {
            score += LEADING_WORD_SCORE;
        }
    }

    score
}

/// 选出得分最高的选项；同分取先出现者，全为 0 时回退到第一个选项。
/// 目录为空时返回 None。
pub fn match_option<'a>(text: &str, options: &'a [BetOption]) -> Option<OptionMatch<'a>> {
    let mut best = OptionMatch {
        option: options.first()?,
        score: 0,
    };
    for option in options {
        let score = score_option(text, option);
        if score > best.score {
            best = OptionMatch { option, score };
        }
    }
    Some(best)
}

/// 解析一条语音下注指令。目录为空时返回 None
pub fn interpret_voice_command(
    transcript: &str,
    bet_options: &[BetOption],
) -> Option<VoiceCommandResult> {
    let text = normalize_transcript(transcript);
    let amount = extract_amount(&text);
    let best = match_option(&text, bet_options)?;
    log::debug!(
        "语音下注匹配: {:?} → #{} {} (得分 {})",
        transcript,
        best.option.id,
        best.option.label,
        best.score
    );
    Some(VoiceCommandResult::new(
        amount,
        best.option.clone(),
        transcript,
        best.score,
    ))
}

/// 语音下注解析器，持有启动时加载的投注目录
pub struct VoiceBetInterpreter {
    bet_options: Vec<BetOption>,
}

impl VoiceBetInterpreter {
    pub fn new(bet_options: Vec<BetOption>) -> Self {
        Self { bet_options }
    }

    pub fn bet_options(&self) -> &[BetOption] {
        &self.bet_options
    }

    pub fn interpret(&self, transcript: &str) -> Option<VoiceCommandResult> {
        interpret_voice_command(transcript, &self.bet_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bet_options::default_bet_options;

    fn option(id: u32, label: &str) -> BetOption {
        BetOption::new(id, label, "+100", "$100 on $100")
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_transcript("  Mahomes TD  "), "mahomes td");
        assert_eq!(normalize_transcript(""), "");
    }

    #[test]
    fn mahomes_touchdown_scores_groups_and_leading_word() {
        let mahomes = option(1, "Mahomes Next TD");
        // mahomes +2, touchdown +2, 首词 "mahomes" +3
        assert_eq!(score_option("100 dollars on mahomes touchdown", &mahomes), 7);
    }

    #[test]
    fn synonyms_add_up_within_one_group() {
        let kelce = option(3, "Kelce Over 75 Receiving Yards");
        // kelce 组: kelce + travis = 4; yards 组: yards + receiving = 4; 首词 +3
        assert_eq!(score_option("travis kelce receiving yards", &kelce), 11);
    }

    #[test]
    fn unrelated_label_scores_zero() {
        let bills = option(4, "Bills Field Goal");
        assert_eq!(score_option("mahomes touchdown", &bills), 0);
    }

    #[test]
    fn leading_word_is_substring_match() {
        let opt = option(9, "Over 45 Points");
        assert_eq!(score_option("i like the over", &opt), 3);
    }

    #[test]
    fn blank_label_gets_no_leading_word_bonus() {
        assert_eq!(score_option("hello", &BetOption::new(2, "", "", "")), 0);
        assert_eq!(score_option("hello", &BetOption::new(3, "   ", "", "")), 0);
    }

    #[test]
    fn ties_keep_first_option() {
        let options = vec![option(1, "Chiefs Win"), option(2, "Chiefs Cover")];
        let best = match_option("chiefs", &options).unwrap();
        assert_eq!(best.option.id, 1);
    }

    #[test]
    fn falls_back_to_first_option_with_zero_score() {
        let options = default_bet_options();
        let best = match_option("nothing relevant here", &options).unwrap();
        assert_eq!(best.option.id, options[0].id);
        assert_eq!(best.score, 0);
    }

    #[test]
    fn empty_catalog_has_no_match() {
        assert!(match_option("mahomes", &[]).is_none());
        assert!(interpret_voice_command("mahomes", &[]).is_none());
    }

    #[test]
    fn interpret_full_command() {
        let options = vec![option(2, "Chiefs Win"), option(1, "Mahomes Next TD")];
        let result = interpret_voice_command("100 dollars on Mahomes touchdown", &options).unwrap();
        assert_eq!(result.amount, "100");
        assert_eq!(result.matched_option.id, 1);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.original_text, "100 dollars on Mahomes touchdown");
    }

    #[test]
    fn interpret_empty_transcript() {
        let options = default_bet_options();
        let result = interpret_voice_command("", &options).unwrap();
        assert_eq!(result.amount, "0");
        assert_eq!(result.matched_option, options[0]);
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn summary_flags_low_confidence() {
        let options = default_bet_options();
        let low = interpret_voice_command("hello", &options).unwrap();
        assert!(low.summary().ends_with("请确认"));

        let high = interpret_voice_command("$20 chiefs win", &options).unwrap();
        assert_eq!(
            high.summary(),
            "[下注] $20 → Chiefs Win (-140, $100 on $140) 置信度: high"
        );
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn interpreter_uses_its_catalog() {
        let interpreter = VoiceBetInterpreter::new(default_bet_options());
        let result = interpreter.interpret("20 bucks on a bills field goal").unwrap();
        assert_eq!(result.amount, "20");
        assert_eq!(result.matched_option.id, 4);
    }
}
