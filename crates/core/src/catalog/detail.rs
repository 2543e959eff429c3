//! Detail composer.
//!
//! Builds movie, actor and director pages. A movie page is folded from the
//! rows of one composed query in a single pass: each sub-list is an
//! insertion-ordered map keyed by entity id, so duplicates collapse in O(1)
//! while first-seen order is kept.

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};

use super::gender::resolve_actor_gender;
use super::model::{
    ActorDetail, CastMember, CrewMember, DirectorDetail, MovieCreditRow, MovieDetail,
    PersonDetail, PersonRole,
};
use super::source::CatalogSource;
use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Crew buckets
// ---------------------------------------------------------------------------

/// Which sub-list of a movie page a crew credit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewBucket {
    Directors,
    Writers,
    Crew,
}

/// Assign a crew credit to a bucket from its department and job.
pub fn crew_bucket(department: &str, job: &str) -> CrewBucket {
    match (department, job) {
        ("Directing", "Director") => CrewBucket::Directors,
        ("Writing", "Writer" | "Screenplay") => CrewBucket::Writers,
        _ => CrewBucket::Crew,
    }
}

// ---------------------------------------------------------------------------
// Folding
// ---------------------------------------------------------------------------

/// A text column counts as present only when it is non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Cast entries without an order sort after every ordered entry.
fn order_key(cast_order: Option<i32>) -> i32 {
    cast_order.unwrap_or(i32::MAX)
}

/// Fold composed detail rows into a movie page.
///
/// Returns `None` for an empty row set. Scalars come from the first row.
/// Rows with an incomplete cast or crew group contribute nothing to that
/// group.
pub fn fold_movie(rows: &[MovieCreditRow]) -> Option<MovieDetail> {
    let first = rows.first()?;

    let mut cast: IndexMap<DbId, CastMember> = IndexMap::new();
    let mut directors: IndexMap<DbId, CrewMember> = IndexMap::new();
    let mut writers: IndexMap<DbId, CrewMember> = IndexMap::new();
    let mut crew: IndexMap<DbId, CrewMember> = IndexMap::new();
    let mut genres: IndexSet<String> = IndexSet::new();
    let mut countries: IndexSet<String> = IndexSet::new();
    let mut companies: IndexSet<String> = IndexSet::new();
    let mut original_language: Option<String> = None;

    for row in rows {
        if let (Some(actor_id), Some(actor_name), Some(character_name)) = (
            row.actor_id,
            present(&row.actor_name),
            present(&row.character_name),
        ) {
            let member = CastMember {
                actor_id,
                actor_name: actor_name.to_string(),
                character_name: character_name.to_string(),
                cast_order: row.cast_order,
            };
            match cast.entry(actor_id) {
                Entry::Vacant(slot) => {
                    slot.insert(member);
                }
                Entry::Occupied(mut slot) => {
                    if order_key(member.cast_order) < order_key(slot.get().cast_order) {
                        slot.insert(member);
                    }
                }
            }
        }

        if let (Some(crew_member_id), Some(name), Some(department), Some(job)) = (
            row.crew_member_id,
            present(&row.crew_member_name),
            present(&row.department_name),
            present(&row.job),
        ) {
            let bucket = match crew_bucket(department, job) {
                CrewBucket::Directors => &mut directors,
                CrewBucket::Writers => &mut writers,
                CrewBucket::Crew => &mut crew,
            };
            bucket.entry(crew_member_id).or_insert_with(|| CrewMember {
                crew_member_id,
                crew_member_name: name.to_string(),
                department_name: department.to_string(),
                job: job.to_string(),
            });
        }

        if let Some(genre) = present(&row.genre_name) {
            genres.insert(genre.to_string());
        }
        if let Some(country) = present(&row.country_name) {
            countries.insert(country.to_string());
        }
        if let Some(company) = present(&row.company_name) {
            companies.insert(company.to_string());
        }

        if original_language.is_none() {
            if let (Some(language), Some(role)) =
                (present(&row.language_name), present(&row.language_role))
            {
                if role.to_lowercase().contains("original") {
                    original_language = Some(language.to_string());
                }
            }
        }
    }

    let mut cast: Vec<CastMember> = cast.into_values().collect();
    // Stable: equal orders keep first-seen order.
    cast.sort_by_key(|member| order_key(member.cast_order));

    Some(MovieDetail {
        id: first.id,
        title: first.title.clone(),
        tagline: first.tagline.clone(),
        release_date: first.release_date,
        overview: first.overview.clone(),
        directors: directors.into_values().collect(),
        writers: writers.into_values().collect(),
        cast,
        crew: crew.into_values().collect(),
        countries: countries.into_iter().collect(),
        genres: genres.into_iter().collect(),
        original_language,
        production_companies: companies.into_iter().collect(),
    })
}

// ---------------------------------------------------------------------------
// Composers
// ---------------------------------------------------------------------------

/// Compose the page for one movie.
///
/// A query failure aborts the page; an unknown id is `NotFound`.
pub async fn compose_movie<S: CatalogSource>(
    source: &S,
    movie_id: DbId,
) -> Result<MovieDetail, CoreError> {
    let rows = source.movie_detail_rows(movie_id).await?;
    let detail = fold_movie(&rows).ok_or(CoreError::NotFound {
        entity: "Movie",
        id: movie_id,
    })?;

    tracing::debug!(
        movie_id,
        rows = rows.len(),
        cast = detail.cast.len(),
        crew = detail.crew.len(),
        "Movie detail composed",
    );
    Ok(detail)
}

/// Compose an actor page: every movie with a character credit plus the
/// dominant credited gender.
pub async fn compose_actor<S: CatalogSource>(
    source: &S,
    person_id: DbId,
) -> Result<ActorDetail, CoreError> {
    let actor_name = source
        .person_name(person_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Actor",
            id: person_id,
        })?;

    let movies = source.actor_credits(person_id).await?;
    let actor_gender = resolve_actor_gender(&movies);

    Ok(ActorDetail {
        actor_name,
        actor_gender,
        movies,
    })
}

/// Compose a director page: every movie with a director-like crew credit.
pub async fn compose_director<S: CatalogSource>(
    source: &S,
    person_id: DbId,
) -> Result<DirectorDetail, CoreError> {
    let director_name = source
        .person_name(person_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Director",
            id: person_id,
        })?;

    let movies = source.directed_movies(person_id).await?;

    Ok(DirectorDetail {
        director_name,
        movies,
    })
}

/// Compose a person page for the given role.
pub async fn compose_person<S: CatalogSource>(
    source: &S,
    person_id: DbId,
    role: PersonRole,
) -> Result<PersonDetail, CoreError> {
    match role {
        PersonRole::Actor => compose_actor(source, person_id).await.map(PersonDetail::Actor),
        PersonRole::Director => compose_director(source, person_id)
            .await
            .map(PersonDetail::Director),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::catalog::model::{ActorCredit, DirectedMovie};
    use crate::catalog::test_support::FakeCatalog;

    fn base_row() -> MovieCreditRow {
        MovieCreditRow {
            id: 98,
            title: "Gladiator".into(),
            tagline: Some("A hero will rise.".into()),
            overview: Some("A general becomes a slave.".into()),
            release_date: chrono::NaiveDate::from_ymd_opt(2000, 5, 1),
            ..Default::default()
        }
    }

    fn cast_row(actor_id: DbId, name: &str, character: &str, order: i32) -> MovieCreditRow {
        MovieCreditRow {
            actor_id: Some(actor_id),
            actor_name: Some(name.into()),
            character_name: Some(character.into()),
            cast_order: Some(order),
            ..base_row()
        }
    }

    fn crew_row(person_id: DbId, name: &str, department: &str, job: &str) -> MovieCreditRow {
        MovieCreditRow {
            crew_member_id: Some(person_id),
            crew_member_name: Some(name.into()),
            department_name: Some(department.into()),
            job: Some(job.into()),
            ..base_row()
        }
    }

    fn language_row(name: &str, role: Option<&str>) -> MovieCreditRow {
        MovieCreditRow {
            language_name: Some(name.into()),
            language_role: role.map(str::to_string),
            ..base_row()
        }
    }

    // -- buckets -------------------------------------------------------------

    #[test]
    fn bucket_rules() {
        assert_eq!(crew_bucket("Directing", "Director"), CrewBucket::Directors);
        assert_eq!(crew_bucket("Writing", "Screenplay"), CrewBucket::Writers);
        assert_eq!(crew_bucket("Writing", "Writer"), CrewBucket::Writers);
        assert_eq!(crew_bucket("Writing", "Novel"), CrewBucket::Crew);
        assert_eq!(crew_bucket("Directing", "Assistant Director"), CrewBucket::Crew);
        assert_eq!(crew_bucket("Sound", "Original Music Composer"), CrewBucket::Crew);
    }

    // -- folding -------------------------------------------------------------

    #[test]
    fn empty_rows_fold_to_none() {
        assert_eq!(fold_movie(&[]), None);
    }

    #[test]
    fn movie_without_credits_keeps_scalars() {
        let detail = fold_movie(&[base_row()]).unwrap();
        assert_eq!(detail.id, 98);
        assert_eq!(detail.title, "Gladiator");
        assert_eq!(detail.tagline.as_deref(), Some("A hero will rise."));
        assert!(detail.cast.is_empty());
        assert!(detail.directors.is_empty());
        assert_eq!(detail.original_language, None);
    }

    #[test]
    fn duplicate_cast_collapses_to_lowest_order() {
        let rows = vec![
            cast_row(2, "Joaquin Phoenix", "Commodus", 1),
            cast_row(1, "Russell Crowe", "Maximus (voice)", 7),
            cast_row(1, "Russell Crowe", "Maximus", 0),
            cast_row(2, "Joaquin Phoenix", "Commodus", 1),
            cast_row(3, "Connie Nielsen", "Lucilla", 2),
        ];
        let detail = fold_movie(&rows).unwrap();

        let ids: Vec<DbId> = detail.cast.iter().map(|c| c.actor_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(detail.cast[0].character_name, "Maximus");
        assert_eq!(detail.cast[0].cast_order, Some(0));
    }

    #[test]
    fn incomplete_rows_are_ignored() {
        let mut no_character = cast_row(4, "Extra", "", 9);
        no_character.character_name = None;
        let mut empty_job = crew_row(5, "Someone", "Sound", "");
        empty_job.job = Some(String::new());
        let mut no_department = crew_row(6, "Other", "Sound", "Mixer");
        no_department.department_name = None;

        let detail = fold_movie(&[no_character, empty_job, no_department]).unwrap();
        assert!(detail.cast.is_empty());
        assert!(detail.crew.is_empty());
    }

    #[test]
    fn director_never_lands_in_crew() {
        let rows = vec![
            crew_row(10, "Ridley Scott", "Directing", "Director"),
            crew_row(10, "Ridley Scott", "Directing", "Director"),
            crew_row(11, "David Franzoni", "Writing", "Screenplay"),
            crew_row(11, "David Franzoni", "Writing", "Writer"),
            crew_row(12, "Hans Zimmer", "Sound", "Original Music Composer"),
            crew_row(12, "Hans Zimmer", "Sound", "Music"),
        ];
        let detail = fold_movie(&rows).unwrap();

        assert_eq!(detail.directors.len(), 1);
        assert_eq!(detail.directors[0].crew_member_id, 10);
        assert_eq!(detail.writers.len(), 1);
        assert_eq!(detail.writers[0].job, "Screenplay");
        assert_eq!(detail.crew.len(), 1);
        assert!(detail.crew.iter().all(|c| c.crew_member_id != 10));
    }

    #[test]
    fn same_person_in_two_buckets_appears_in_both() {
        let rows = vec![
            crew_row(20, "Quentin Tarantino", "Directing", "Director"),
            crew_row(20, "Quentin Tarantino", "Writing", "Screenplay"),
            crew_row(20, "Quentin Tarantino", "Production", "Producer"),
        ];
        let detail = fold_movie(&rows).unwrap();

        assert_eq!(detail.directors.len(), 1);
        assert_eq!(detail.writers.len(), 1);
        assert_eq!(detail.crew.len(), 1);
        assert_eq!(detail.crew[0].job, "Producer");
    }

    #[test]
    fn lookup_lists_are_deduplicated_in_first_seen_order() {
        let genre = |g: &str| MovieCreditRow {
            genre_name: Some(g.into()),
            ..base_row()
        };
        let company = |c: &str| MovieCreditRow {
            company_name: Some(c.into()),
            ..base_row()
        };
        let country = |c: &str| MovieCreditRow {
            country_name: Some(c.into()),
            ..base_row()
        };
        let rows = vec![
            genre("Action"),
            genre("Drama"),
            genre("Action"),
            country("United Kingdom"),
            country("United States of America"),
            country("United Kingdom"),
            company("DreamWorks"),
            company("Universal Pictures"),
            company("DreamWorks"),
        ];
        let detail = fold_movie(&rows).unwrap();

        assert_eq!(detail.genres, vec!["Action", "Drama"]);
        assert_eq!(
            detail.countries,
            vec!["United Kingdom", "United States of America"]
        );
        assert_eq!(
            detail.production_companies,
            vec!["DreamWorks", "Universal Pictures"]
        );
    }

    #[test]
    fn original_language_requires_original_role() {
        let rows = vec![
            language_row("Latin", Some("Spoken")),
            language_row("English", Some("Original")),
            language_row("French", Some("original dub")),
        ];
        assert_eq!(
            fold_movie(&rows).unwrap().original_language.as_deref(),
            Some("English")
        );

        let rows = vec![language_row("Latin", Some("Spoken")), language_row("English", None)];
        assert_eq!(fold_movie(&rows).unwrap().original_language, None);
    }

    // -- composers -----------------------------------------------------------

    #[tokio::test]
    async fn compose_missing_movie_is_not_found() {
        let source = FakeCatalog::default();
        let result = compose_movie(&source, 404).await;
        assert_matches!(
            result,
            Err(CoreError::NotFound {
                entity: "Movie",
                id: 404
            })
        );
    }

    #[tokio::test]
    async fn compose_movie_failure_is_internal() {
        let mut source = FakeCatalog {
            detail_rows: vec![base_row()],
            ..Default::default()
        };
        source.failing.insert("movie_detail_rows");
        let result = compose_movie(&source, 98).await;
        assert_matches!(result, Err(CoreError::Internal(_)));
    }

    #[tokio::test]
    async fn compose_movie_folds_rows() {
        let source = FakeCatalog {
            detail_rows: vec![
                cast_row(1, "Russell Crowe", "Maximus", 0),
                crew_row(10, "Ridley Scott", "Directing", "Director"),
            ],
            ..Default::default()
        };
        let detail = compose_movie(&source, 98).await.unwrap();
        assert_eq!(detail.cast.len(), 1);
        assert_eq!(detail.directors.len(), 1);
    }

    #[tokio::test]
    async fn compose_actor_resolves_gender() {
        let credit = |movie_id: DbId, gender: &str| ActorCredit {
            movie_id,
            title: format!("Movie {movie_id}"),
            release_date: None,
            character_name: "Role".into(),
            gender: Some(gender.into()),
        };
        let source = FakeCatalog {
            people: vec![(1, "Russell Crowe".into())],
            actor_credits: vec![
                (1, credit(1, "Male")),
                (1, credit(2, "Male")),
                (1, credit(3, "Female")),
            ],
            ..Default::default()
        };

        let detail = compose_actor(&source, 1).await.unwrap();
        assert_eq!(detail.actor_name, "Russell Crowe");
        assert_eq!(detail.actor_gender, "Masculino");
        assert_eq!(detail.movies.len(), 3);
    }

    #[tokio::test]
    async fn compose_unknown_person_is_not_found() {
        let source = FakeCatalog::default();
        assert_matches!(
            compose_person(&source, 5, PersonRole::Actor).await,
            Err(CoreError::NotFound { entity: "Actor", .. })
        );
        assert_matches!(
            compose_person(&source, 5, PersonRole::Director).await,
            Err(CoreError::NotFound { entity: "Director", .. })
        );
    }

    #[tokio::test]
    async fn compose_director_lists_movies() {
        let source = FakeCatalog {
            people: vec![(10, "Ridley Scott".into())],
            directed: vec![(
                10,
                DirectedMovie {
                    movie_id: 98,
                    title: "Gladiator".into(),
                    release_date: None,
                },
            )],
            ..Default::default()
        };

        let detail = compose_person(&source, 10, PersonRole::Director).await.unwrap();
        assert_matches!(detail, PersonDetail::Director(d) if d.movies.len() == 1);
    }
}
