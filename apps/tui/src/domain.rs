use serde::{Deserialize, Serialize};

/// One generated question with its answer and category label.
/// Produced only by the generation service; never mutated after receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The original paragraph plus the ordered pairs from the last successful
/// generation. Replaced wholesale on each success, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub original_paragraph: String,
    pub pairs: Vec<QaPair>,
}

impl ResultSet {
    pub fn new(original_paragraph: impl Into<String>, pairs: Vec<QaPair>) -> Self {
        Self {
            original_paragraph: original_paragraph.into(),
            pairs,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Mixed,
}

impl Difficulty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Mixed => "mixed",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Easy),
            1 => Some(Self::Medium),
            2 => Some(Self::Hard),
            3 => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Mixed => "Mixed",
        }
    }

    pub const fn options() -> &'static [&'static str] {
        &["easy", "medium", "hard", "mixed"]
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parse_round_trips_all_labels() {
        for (index, name) in Difficulty::options().iter().enumerate() {
            let parsed = Difficulty::parse(name);
            assert_eq!(parsed, Difficulty::from_index(index));
            assert_eq!(parsed.map(Difficulty::as_str), Some(*name));
        }
    }

    #[test]
    fn difficulty_parse_rejects_unknown_levels() {
        assert_eq!(Difficulty::parse("extreme"), None);
        assert_eq!(Difficulty::parse(""), None);
    }

    #[test]
    fn difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse(" Mixed "), Some(Difficulty::Mixed));
    }

    #[test]
    fn result_set_keeps_pair_order() {
        let pairs = vec![
            QaPair {
                question: "q1".into(),
                answer: "a1".into(),
                kind: "who".into(),
            },
            QaPair {
                question: "q2".into(),
                answer: "a2".into(),
                kind: "where".into(),
            },
        ];
        let results = ResultSet::new("para", pairs.clone());
        assert_eq!(results.len(), 2);
        assert_eq!(results.pairs, pairs);
    }
}
