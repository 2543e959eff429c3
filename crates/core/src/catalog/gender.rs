//! Dominant credited gender for actor pages.
//!
//! The gender shown for an actor is the most frequent gender label across
//! their cast credits, translated to the site's display vocabulary.

use indexmap::IndexMap;

use super::model::ActorCredit;

/// Shown when no credit carries a gender label.
pub const UNSPECIFIED_GENDER: &str = "No especificado";

/// Most frequent label, or `None` for an empty input.
///
/// On a tie the label that was seen first wins. Empty labels are ignored.
pub fn dominant_gender<'a, I>(labels: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    for label in labels.into_iter().filter(|l| !l.is_empty()) {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut best: Option<(&'a str, usize)> = None;
    for (label, count) in counts {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Map a stored gender label to its display form. Unknown labels pass through.
pub fn translate_gender(label: &str) -> &str {
    match label {
        "Male" => "Masculino",
        "Female" => "Femenino",
        "Non-binary" => "No binario",
        other => other,
    }
}

/// Display gender for an actor given their credits.
pub fn resolve_actor_gender(credits: &[ActorCredit]) -> String {
    dominant_gender(credits.iter().filter_map(|c| c.gender.as_deref()))
        .map(translate_gender)
        .unwrap_or(UNSPECIFIED_GENDER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credit(gender: Option<&str>) -> ActorCredit {
        ActorCredit {
            movie_id: 1,
            title: "Movie".into(),
            release_date: None,
            character_name: "Someone".into(),
            gender: gender.map(str::to_string),
        }
    }

    #[test]
    fn majority_label_wins() {
        let credits = [credit(Some("Male")), credit(Some("Male")), credit(Some("Female"))];
        assert_eq!(resolve_actor_gender(&credits), "Masculino");
    }

    #[test]
    fn tie_goes_to_first_seen_label() {
        assert_eq!(
            dominant_gender(["Female", "Male", "Male", "Female"]),
            Some("Female")
        );
    }

    #[test]
    fn missing_and_empty_labels_are_ignored() {
        let credits = [credit(None), credit(Some("")), credit(Some("Non-binary"))];
        assert_eq!(resolve_actor_gender(&credits), "No binario");
    }

    #[test]
    fn no_labels_yield_unspecified() {
        assert_eq!(resolve_actor_gender(&[credit(None)]), UNSPECIFIED_GENDER);
        assert_eq!(resolve_actor_gender(&[]), UNSPECIFIED_GENDER);
    }

    #[test]
    fn unknown_labels_pass_through() {
        assert_eq!(translate_gender("Unspecified"), "Unspecified");
        assert_eq!(translate_gender("Female"), "Femenino");
    }
}
