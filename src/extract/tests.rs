use std::collections::BTreeSet;

use super::*;
use crate::role::Role;

const THREE_SENTENCES: &str = "The appellant filed the case on 3 January. \
    The Supreme Court in the cited case observed that the precedent is binding. \
    The notice was issued to the respondent on 5 March.";

fn extractor() -> Extractor<'static> {
    Extractor::builtin().expect("built-in extractor should initialise")
}

fn accepted_indices(extraction: &Extraction) -> BTreeSet<usize> {
    extraction
        .sentences
        .iter()
        .filter(|record| record.is_accepted())
        .map(|record| record.index)
        .collect()
}

#[test]
fn fact_sentence_is_tagged_and_neutral_sentence_dropped() {
    let (tagged, grouped) = extract(
        "The appellant filed the case on 3 January. The weather was pleasant.",
        0.0,
    )
    .expect("extraction should succeed");

    assert_eq!(tagged, "<Fact>The appellant filed the case on 3 January.</Fact>");
    assert_eq!(grouped, "Fact:\nThe appellant filed the case on 3 January.");
}

#[test]
fn issue_cues_win_over_precedent_pair() {
    let extraction = extractor().run("The central issue is a question of law.", 0.0);
    let record = &extraction.sentences[0];

    assert_eq!(record.scores.get(Role::Issue), 2.0);
    assert_eq!(record.scores.get(Role::Precedent), 1.0);
    assert_eq!(record.role, Some(Role::Issue));
    assert_eq!(
        extraction.tagged,
        "<Issue>The central issue is a question of law.</Issue>"
    );
}

#[test]
fn fact_issue_tie_resolves_to_fact() {
    // Single-sentence documents weigh every token zero, so `filed` +
    // `the plaintiff` (Fact) ties `question of law` + appeal→`filed by` (Issue).
    let extraction = extractor().run(
        "This appeal was filed by the plaintiff raising a question of law.",
        0.0,
    );
    let record = &extraction.sentences[0];

    assert_eq!(record.scores.get(Role::Fact), 2.0);
    assert_eq!(record.scores.get(Role::Issue), 2.0);
    assert_eq!(record.role, Some(Role::Fact));
}

#[test]
fn precedent_sentence_is_tagged_precedent() {
    let extraction = extractor().run(
        "The Supreme Court in the cited case observed that the precedent is binding.",
        0.0,
    );

    assert_eq!(extraction.sentences[0].role, Some(Role::Precedent));
    assert!(extraction.tagged.starts_with("<Precedent>"));
    assert!(extraction.tagged.ends_with("</Precedent>"));
}

#[test]
fn substring_cues_fire_inside_longer_words() {
    // `entitled to` contains the Fact cue `led to`, which tips the balance
    // away from the court→`held that ...` pairs.
    let extractor = extractor();
    let document = extractor.prepare("The Court held that the plaintiff was entitled to relief.");
    let breakdown = extractor
        .explain(&document, 0)
        .expect("sentence 0 should exist");

    assert!(breakdown.matches.iter().any(|m| matches!(
        m,
        crate::scoring::CueMatch::Phrase { role: Role::Fact, phrase, .. } if phrase == "led to"
    )));
    assert!(breakdown.matches.iter().any(|m| matches!(
        m,
        crate::scoring::CueMatch::Pair { role: Role::Precedent, anchor, follower, .. }
            if anchor == "court" && follower == "held that"
    )));
    assert_eq!(breakdown.scores.get(Role::Fact), 3.0);
    assert_eq!(breakdown.scores.get(Role::Precedent), 2.0);
    assert_eq!(breakdown.scores.best().0, Role::Fact);
}

#[test]
fn below_threshold_sentence_yields_empty_outputs() {
    let (tagged, grouped) =
        extract("The weather was pleasant.", 5.0).expect("extraction should succeed");

    assert_eq!(tagged, "");
    assert_eq!(grouped, "");
}

#[test]
fn empty_input_yields_empty_outputs() {
    let extraction = extractor().run("", 0.0);

    assert!(extraction.sentences.is_empty());
    assert_eq!(extraction.tagged, "");
    assert_eq!(extraction.grouped, "");
}

#[test]
fn groups_follow_first_appearance_while_inline_keeps_order() {
    let extraction = extractor().run(THREE_SENTENCES, 0.0);
    let roles = extraction
        .sentences
        .iter()
        .map(|record| record.role)
        .collect::<Vec<_>>();

    assert_eq!(
        roles,
        vec![Some(Role::Fact), Some(Role::Precedent), Some(Role::Fact)]
    );
    assert_eq!(
        extraction.tagged,
        "<Fact>The appellant filed the case on 3 January.</Fact> \
         <Precedent>The Supreme Court in the cited case observed that the precedent is binding.</Precedent> \
         <Fact>The notice was issued to the respondent on 5 March.</Fact>"
    );
    assert_eq!(
        extraction.grouped,
        "Fact:\nThe appellant filed the case on 3 January.\n\
         The notice was issued to the respondent on 5 March.\n\n\
         Precedent:\nThe Supreme Court in the cited case observed that the precedent is binding."
    );
}

#[test]
fn document_weights_lift_multi_sentence_scores() {
    let extraction = extractor().run(THREE_SENTENCES, 5.0);

    assert_eq!(accepted_indices(&extraction), BTreeSet::from([0, 2]));
    assert!(extraction.sentences[0].scores.get(Role::Fact) > 6.0);
    assert!(extraction.sentences[1].scores.get(Role::Precedent) < 5.0);
}

#[test]
fn abbreviation_merge_applies_only_to_listed_abbreviations() {
    let unlisted = extractor().run("The order was dated 4 Jan. The next sentence follows.", 0.0);
    assert_eq!(unlisted.sentences.len(), 2);

    let listed = extractor().run("The plot is No. 5 on the register. It was sold later.", 0.0);
    assert_eq!(listed.sentences.len(), 2);
    assert_eq!(listed.sentences[0].text, "The plot is No. 5 on the register.");

    let honorific = extractor().run("Notice was served on Mr. Sharma. He appeared.", 0.0);
    assert_eq!(honorific.sentences.len(), 2);
    assert_eq!(honorific.sentences[0].text, "Notice was served on Mr. Sharma.");
}

#[test]
fn judicial_signature_is_merged_with_the_following_sentence() {
    let text = "Judgment delivered by D.S. Sinha, J. The appeal is allowed.";
    let extraction = extractor().run(text, 0.0);
    assert_eq!(extraction.sentences.len(), 1);
    assert_eq!(extraction.sentences[0].text, text);

    let (tagged, grouped) = extract(text, 0.0).expect("built-in extraction should run");
    assert!(tagged.is_empty() || tagged.contains(text));
    assert!(grouped.is_empty() || grouped.contains(text));
}

#[test]
fn initials_inside_a_sentence_do_not_split_it() {
    let extraction = extractor().run(
        "The suit filed by A.K. Sharma was decreed. The appeal failed.",
        0.0,
    );
    let texts = extraction
        .sentences
        .iter()
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec!["The suit filed by A.K. Sharma was decreed.", "The appeal failed."]
    );
}

#[test]
fn tagged_and_grouped_views_agree() {
    let extraction = extractor().run(THREE_SENTENCES, 0.0);

    let mut tagged = extraction
        .sentences
        .iter()
        .filter_map(|record| record.role.map(|role| (role, record.text.clone())))
        .collect::<Vec<_>>();
    let mut grouped = crate::emit::group_by_role(&extraction.sentences)
        .into_iter()
        .flat_map(|(role, sentences)| {
            sentences
                .into_iter()
                .map(move |sentence| (role, sentence.to_string()))
        })
        .collect::<Vec<_>>();

    tagged.sort();
    grouped.sort();
    assert_eq!(tagged, grouped);
    assert_eq!(extraction.tagged.matches("</").count(), tagged.len());
}

#[test]
fn raising_threshold_only_removes_sentences() {
    let text = "The appellant filed the case on 3 January. \
        The central issue is a question of law. \
        The respondent argued that the order was illegal. \
        The Supreme Court in the cited case observed that the precedent is binding. \
        The appeal is dismissed with costs.";
    let extractor = extractor();

    let mut previous = accepted_indices(&extractor.run(text, 0.0));
    for threshold in [1.0, 2.0, 3.0, 5.0, 8.0, 20.0] {
        let current = accepted_indices(&extractor.run(text, threshold));
        assert!(
            current.is_subset(&previous),
            "threshold {threshold} accepted {current:?}, previous {previous:?}"
        );
        previous = current;
    }
    assert!(previous.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let extractor = extractor();
    let first = extractor.run(THREE_SENTENCES, 0.0);
    let second = extractor.run(THREE_SENTENCES, 0.0);

    assert_eq!(first, second);
    assert_eq!(first.tagged.as_bytes(), second.tagged.as_bytes());
}

#[test]
fn category_summary_draws_from_the_ranked_sentences() {
    let extractor = extractor();
    let document = extractor.prepare(THREE_SENTENCES);
    let ranking = extractor.rank_categories(&document);
    let summary = extractor.category_summary(&document);

    assert_eq!(ranking.get(crate::role::Category::Analysis).len(), 3);
    assert!(!summary.is_empty());
    assert!(document
        .sentences
        .iter()
        .any(|sentence| summary.starts_with(sentence.as_str())));
}
