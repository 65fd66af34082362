use serde::Serialize;

use crate::role::Role;
use crate::scoring::RoleScores;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceRecord {
    pub index: usize,
    pub text: String,
    pub normalized: String,
    pub scores: RoleScores,
    pub role: Option<Role>,
}

impl SentenceRecord {
    pub fn is_accepted(&self) -> bool {
        self.role.is_some()
    }
}

/// Winning role when the maximum score strictly exceeds the threshold.
pub fn select_role(scores: &RoleScores, threshold: f64) -> Option<Role> {
    let (role, score) = scores.best();
    (score > threshold).then_some(role)
}

/// `<Role>sentence</Role>` for accepted sentences, in input order, joined by
/// single spaces.
pub fn render_tagged(records: &[SentenceRecord]) -> String {
    records
        .iter()
        .filter_map(|record| {
            record.role.map(|role| {
                let name = role.long_name();
                format!("<{name}>{}</{name}>", record.text)
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Accepted sentences grouped by role. Groups appear in order of their first
/// accepted sentence and keep input order internally.
pub fn group_by_role(records: &[SentenceRecord]) -> Vec<(Role, Vec<&str>)> {
    let mut groups: Vec<(Role, Vec<&str>)> = Vec::new();

    for record in records {
        let Some(role) = record.role else {
            continue;
        };

        match groups.iter_mut().find(|(group_role, _)| *group_role == role) {
            Some((_, sentences)) => sentences.push(&record.text),
            None => groups.push((role, vec![record.text.as_str()])),
        }
    }

    groups
}

pub fn render_grouped(records: &[SentenceRecord]) -> String {
    group_by_role(records)
        .into_iter()
        .map(|(role, sentences)| format!("{}:\n{}", role.long_name(), sentences.join("\n")))
        .collect::<Vec<String>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, text: &str, role: Option<Role>) -> SentenceRecord {
        SentenceRecord {
            index,
            text: text.to_string(),
            normalized: text.to_lowercase(),
            scores: RoleScores::default(),
            role,
        }
    }

    #[test]
    fn threshold_is_strict() {
        let mut scores = RoleScores::default();
        scores.add(Role::Statute, 5.0);

        assert_eq!(select_role(&scores, 4.99), Some(Role::Statute));
        assert_eq!(select_role(&scores, 5.0), None);
        assert_eq!(select_role(&RoleScores::default(), 0.0), None);
    }

    #[test]
    fn tagged_stream_keeps_input_order_and_skips_rejected() {
        let records = vec![
            record(0, "First.", Some(Role::Fact)),
            record(1, "Dropped.", None),
            record(2, "Third.", Some(Role::LowerCourtRuling)),
        ];

        assert_eq!(
            render_tagged(&records),
            "<Fact>First.</Fact> <Ruling by lower court>Third.</Ruling by lower court>"
        );
    }

    #[test]
    fn groups_follow_first_appearance() {
        let records = vec![
            record(0, "A precedent.", Some(Role::Precedent)),
            record(1, "A fact.", Some(Role::Fact)),
            record(2, "Another precedent.", Some(Role::Precedent)),
            record(3, "Ignored.", None),
        ];

        assert_eq!(
            render_grouped(&records),
            "Precedent:\nA precedent.\nAnother precedent.\n\nFact:\nA fact."
        );
    }

    #[test]
    fn nothing_accepted_renders_empty_strings() {
        let records = vec![record(0, "Ignored.", None)];
        assert_eq!(render_tagged(&records), "");
        assert_eq!(render_grouped(&records), "");
        assert_eq!(render_tagged(&[]), "");
    }
}
