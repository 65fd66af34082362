use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven fine-grained rhetorical roles of a judgment sentence.
///
/// Declaration order is the canonical traversal order (F, I, A, LR, SS, SP,
/// R). Score vectors are indexed in this order and arg-max ties resolve to
/// the earliest role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "F")]
    Fact,
    #[serde(rename = "I")]
    Issue,
    #[serde(rename = "A")]
    Argument,
    #[serde(rename = "LR")]
    LowerCourtRuling,
    #[serde(rename = "SS")]
    Statute,
    #[serde(rename = "SP")]
    Precedent,
    #[serde(rename = "R")]
    PresentCourtRuling,
}

impl Role {
    pub const COUNT: usize = 7;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Fact,
        Role::Issue,
        Role::Argument,
        Role::LowerCourtRuling,
        Role::Statute,
        Role::Precedent,
        Role::PresentCourtRuling,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Fact => "F",
            Self::Issue => "I",
            Self::Argument => "A",
            Self::LowerCourtRuling => "LR",
            Self::Statute => "SS",
            Self::Precedent => "SP",
            Self::PresentCourtRuling => "R",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Self::Fact => "Fact",
            Self::Issue => "Issue",
            Self::Argument => "Argument",
            Self::LowerCourtRuling => "Ruling by lower court",
            Self::Statute => "Statute",
            Self::Precedent => "Precedent",
            Self::PresentCourtRuling => "Ruling by present court",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn category(self) -> Category {
        match self {
            Self::Fact | Self::Issue => Category::Introduction,
            Self::Argument | Self::LowerCourtRuling => Category::Context,
            Self::Statute | Self::Precedent => Category::Analysis,
            Self::PresentCourtRuling => Category::Conclusion,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Four-way grouping used by the category ranking and its JSON dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Introduction,
    Context,
    Analysis,
    Conclusion,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Introduction,
        Category::Context,
        Category::Analysis,
        Category::Conclusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Context => "Context",
            Self::Analysis => "Analysis",
            Self::Conclusion => "Conclusion",
        }
    }

    /// Projects a role code; anything unrecognised lands in `Context`.
    pub fn from_role_code(code: &str) -> Self {
        Role::from_code(code)
            .map(Role::category)
            .unwrap_or(Category::Context)
    }

    pub fn budget_percent(self) -> usize {
        match self {
            Self::Introduction => 10,
            Self::Context => 24,
            Self::Analysis => 60,
            Self::Conclusion => 6,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_in_canonical_order() {
        let codes = Role::ALL.iter().map(|role| role.code()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["F", "I", "A", "LR", "SS", "SP", "R"]);

        for (index, role) in Role::ALL.iter().enumerate() {
            assert_eq!(Role::from_code(role.code()), Some(*role));
            assert_eq!(role.index(), index);
        }
        assert_eq!(Role::from_code("SO"), None);
    }

    #[test]
    fn long_names_match_tag_vocabulary() {
        assert_eq!(Role::LowerCourtRuling.long_name(), "Ruling by lower court");
        assert_eq!(Role::PresentCourtRuling.to_string(), "Ruling by present court");
        assert_eq!(Role::Statute.long_name(), "Statute");
    }

    #[test]
    fn coarse_projection_follows_fixed_map() {
        assert_eq!(Category::from_role_code("F"), Category::Introduction);
        assert_eq!(Category::from_role_code("I"), Category::Introduction);
        assert_eq!(Category::from_role_code("A"), Category::Context);
        assert_eq!(Category::from_role_code("LR"), Category::Context);
        assert_eq!(Category::from_role_code("SS"), Category::Analysis);
        assert_eq!(Category::from_role_code("SP"), Category::Analysis);
        assert_eq!(Category::from_role_code("R"), Category::Conclusion);
        assert_eq!(Category::from_role_code("unknown"), Category::Context);
    }

    #[test]
    fn budget_shares_cover_the_whole_summary() {
        let total: usize = Category::ALL.iter().map(|c| c.budget_percent()).sum();
        assert_eq!(total, 100);
    }
}
