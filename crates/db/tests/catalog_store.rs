use chrono::NaiveDate;
use sqlx::PgPool;

use holocron_core::ingest::{NewCharacter, NewMovie};
use holocron_db::models::provenance::Provenance;
use holocron_db::repositories::{CharacterRepo, MovieRepo};

fn movie(title: &str, external_ref: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        episode_id: Some(4),
        opening_crawl: Some("It is a period of civil war.".into()),
        director: Some("George Lucas".into()),
        producer: Some("Gary Kurtz".into()),
        release_date: NaiveDate::from_ymd_opt(1977, 5, 25).unwrap(),
        external_ref: external_ref.to_string(),
    }
}

fn character(name: &str, external_ref: &str) -> NewCharacter {
    NewCharacter {
        name: name.to_string(),
        height: Some(172),
        mass: Some(77),
        hair_color: Some("blond".into()),
        skin_color: Some("fair".into()),
        eye_color: Some("blue".into()),
        birth_year: Some("19BBY".into()),
        gender: Some("male".into()),
        external_ref: external_ref.to_string(),
    }
}

async fn link_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM movie_characters")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn bulk_insert_returns_ids_with_refs(pool: PgPool) {
    let created = MovieRepo::insert_external(&pool, &[movie("A New Hope", "f1")])
        .await
        .unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].external_ref, "f1");

    let stored = MovieRepo::find_by_id(&pool, created[0].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "A New Hope");
    assert_eq!(stored.provenance, Provenance::External);
    assert_eq!(stored.external_ref.as_deref(), Some("f1"));
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_bulk_insert_is_a_noop(pool: PgPool) {
    let created = CharacterRepo::insert_external(&pool, &[]).await.unwrap();
    assert!(created.is_empty());
    assert_eq!(
        CharacterRepo::count_by_provenance(&pool, Provenance::External)
            .await
            .unwrap(),
        0
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_external_ref_fails_whole_batch(pool: PgPool) {
    let result =
        MovieRepo::insert_external(&pool, &[movie("A New Hope", "f1"), movie("Empire", "f1")])
            .await;
    assert!(result.is_err());
    // Single statement, so nothing committed.
    assert_eq!(
        MovieRepo::count_by_provenance(&pool, Provenance::External)
            .await
            .unwrap(),
        0
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_by_provenance_cascades_links(pool: PgPool) {
    let movies = MovieRepo::insert_external(&pool, &[movie("A New Hope", "f1")])
        .await
        .unwrap();
    let characters = CharacterRepo::insert_external(&pool, &[character("Luke", "c1")])
        .await
        .unwrap();
    MovieRepo::replace_characters(&pool, movies[0].id, &[characters[0].id])
        .await
        .unwrap();
    assert_eq!(link_count(&pool).await, 1);

    let deleted = CharacterRepo::delete_by_provenance(&pool, Provenance::External)
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(link_count(&pool).await, 0);

    // Safe to call again with zero matching rows.
    let deleted = CharacterRepo::delete_by_provenance(&pool, Provenance::External)
        .await
        .unwrap();
    assert_eq!(deleted, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn replace_characters_is_a_full_overwrite(pool: PgPool) {
    let movies = MovieRepo::insert_external(&pool, &[movie("Empire", "f1")])
        .await
        .unwrap();
    let characters = CharacterRepo::insert_external(
        &pool,
        &[
            character("Luke", "c1"),
            character("Leia", "c2"),
            character("Han", "c3"),
        ],
    )
    .await
    .unwrap();
    let movie_id = movies[0].id;
    let ids: Vec<_> = characters.iter().map(|c| c.id).collect();

    MovieRepo::replace_characters(&pool, movie_id, &[ids[0], ids[1]])
        .await
        .unwrap();
    MovieRepo::replace_characters(&pool, movie_id, &[ids[2]])
        .await
        .unwrap();

    // Only the second set survives, never a union.
    assert_eq!(
        MovieRepo::character_ids(&pool, movie_id).await.unwrap(),
        vec![ids[2]]
    );

    // Idempotent: replaying the same set changes nothing.
    MovieRepo::replace_characters(&pool, movie_id, &[ids[2]])
        .await
        .unwrap();
    assert_eq!(
        MovieRepo::character_ids(&pool, movie_id).await.unwrap(),
        vec![ids[2]]
    );

    // The empty set clears.
    MovieRepo::replace_characters(&pool, movie_id, &[])
        .await
        .unwrap();
    assert!(MovieRepo::character_ids(&pool, movie_id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn movie_ids_reverse_lookup(pool: PgPool) {
    let movies =
        MovieRepo::insert_external(&pool, &[movie("A New Hope", "f1"), movie("Empire", "f2")])
            .await
            .unwrap();
    let characters = CharacterRepo::insert_external(&pool, &[character("Luke", "c1")])
        .await
        .unwrap();
    for m in &movies {
        MovieRepo::replace_characters(&pool, m.id, &[characters[0].id])
            .await
            .unwrap();
    }

    let mut expected: Vec<_> = movies.iter().map(|m| m.id).collect();
    expected.sort_unstable();
    assert_eq!(
        CharacterRepo::movie_ids(&pool, characters[0].id)
            .await
            .unwrap(),
        expected
    );
}
