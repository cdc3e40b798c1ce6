use serde::{Deserialize, Serialize};

/// 投注选项（编译期固定，运行期只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetOption {
    pub id: u32,
    /// 展示名称，如 "Mahomes Next TD"
    pub label: String,
    /// 赔率展示，如 "+150"
    pub odds: String,
    /// 派彩说明，如 "$150 on $100"
    pub payout_description: String,
}

impl BetOption {
    pub fn new(id: u32, label: &str, odds: &str, payout_description: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            odds: odds.to_string(),
            payout_description: payout_description.to_string(),
        }
    }
}

/// 默认投注目录（Chiefs vs Bills）
pub fn default_bet_options() -> Vec<BetOption> {
    vec![
        BetOption::new(1, "Mahomes Next TD", "+150", "$150 on $100"),
        BetOption::new(2, "Chiefs Win", "-140", "$100 on $140"),
        BetOption::new(3, "Kelce Over 75 Receiving Yards", "+110", "$110 on $100"),
        BetOption::new(4, "Bills Field Goal Next Drive", "+200", "$200 on $100"),
        BetOption::new(5, "Allen Over 250 Passing Yards", "-115", "$100 on $115"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_catalog_ids_are_unique() {
        let options = default_bet_options();
        let ids: HashSet<u32> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), options.len());
    }

    #[test]
    fn default_catalog_starts_with_mahomes() {
        let options = default_bet_options();
        assert_eq!(options[0].id, 1);
        assert_eq!(options[0].label, "Mahomes Next TD");
    }
}
