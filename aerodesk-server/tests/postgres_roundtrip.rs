//! Round trips against a real Postgres
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p aerodesk-server -- --ignored

use aerodesk_core::catalog::entity;
use aerodesk_core::{bind_form, BindMode, FormData, Value, ViolationKind};
use aerodesk_server::db::{schema, Filter, ListQuery, RepoError};
use aerodesk_server::{create_pool, PgStorage, Repository};

async fn storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    let storage = PgStorage::new(pool);
    schema::bootstrap(&storage).await.expect("bootstrap failed");
    storage
}

fn form(pairs: &[(&str, &str)]) -> FormData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn cleanup(storage: &PgStorage, table: &str, id: i32) {
    let _ = Repository::new(storage, entity(table).unwrap())
        .delete(&Value::Integer(id))
        .await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn country_round_trip() {
    let storage = storage().await;
    cleanup(&storage, "country", 90_001).await;
    let country = entity("country").unwrap();
    let repo = Repository::new(&storage, country);

    let fields = bind_form(
        country,
        &form(&[("countrycode", "90001"), ("countryname", "Freedonia")]),
        BindMode::Create,
    )
    .unwrap();
    let id = repo.create(&fields).await.unwrap();
    assert_eq!(repo.read(&id).await.unwrap().values, fields);

    let page = repo
        .list(&ListQuery::default().filter(Filter::contains(["countryname"], "FREEDON")))
        .await
        .unwrap();
    assert!(page.items.iter().any(|r| r.get("countrycode") == Some(&id)));

    repo.delete(&id).await.unwrap();
    assert!(matches!(repo.delete(&id).await, Err(RepoError::NotFound { .. })));
    assert!(matches!(repo.read(&id).await, Err(RepoError::NotFound { .. })));
}

#[tokio::test]
#[ignore = "requires database"]
async fn passenger_with_unknown_country_is_foreign_key_violation() {
    let storage = storage().await;
    cleanup(&storage, "passenger", 90_002).await;
    let passenger = entity("passenger").unwrap();

    let fields = bind_form(
        passenger,
        &form(&[
            ("passengerid", "90002"),
            ("firstname", "Ada"),
            ("lastname", "Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "555-0100"),
            ("dateofbirth", "1990-12-10"),
            ("passportnumber", "PX90002"),
            ("countrycode", "9999"),
            ("nationality", "British"),
        ]),
        BindMode::Create,
    )
    .unwrap();

    match Repository::new(&storage, passenger).create(&fields).await {
        Err(RepoError::Constraint(c)) => {
            assert_eq!(c.kind, ViolationKind::ForeignKey);
            assert_eq!(c.column, Some("countrycode"));
            assert_eq!(c.target, Some("country"));
        }
        other => panic!("expected foreign key violation, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn referenced_country_cannot_be_deleted() {
    let storage = storage().await;
    cleanup(&storage, "city", 90_003).await;
    cleanup(&storage, "country", 90_003).await;

    let country = entity("country").unwrap();
    let city = entity("city").unwrap();
    let countries = Repository::new(&storage, country);
    let cities = Repository::new(&storage, city);

    let id = countries
        .create(
            &bind_form(
                country,
                &form(&[("countrycode", "90003"), ("countryname", "Sylvania")]),
                BindMode::Create,
            )
            .unwrap(),
        )
        .await
        .unwrap();
    cities
        .create(
            &bind_form(
                city,
                &form(&[("cityid", "90003"), ("cityname", "Capital"), ("countrycode", "90003")]),
                BindMode::Create,
            )
            .unwrap(),
        )
        .await
        .unwrap();

    match countries.delete(&id).await {
        Err(RepoError::Constraint(c)) => {
            assert_eq!(c.kind, ViolationKind::ForeignKey);
            assert_eq!(c.target, Some("city"));
        }
        other => panic!("expected foreign key violation, got {other:?}"),
    }
    // Still there
    assert!(countries.read(&id).await.is_ok());

    cleanup(&storage, "city", 90_003).await;
    cleanup(&storage, "country", 90_003).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_primary_key_is_unique_violation() {
    let storage = storage().await;
    cleanup(&storage, "currency", 90_004).await;
    let currency = entity("currency").unwrap();
    let repo = Repository::new(&storage, currency);

    let fields = bind_form(
        currency,
        &form(&[
            ("currencycode", "90004"),
            ("currencyname", "Testmark"),
            ("currencysymbol", "T$"),
        ]),
        BindMode::Create,
    )
    .unwrap();
    repo.create(&fields).await.unwrap();

    match repo.create(&fields).await {
        Err(RepoError::Constraint(c)) => {
            assert_eq!(c.kind, ViolationKind::Unique);
            assert_eq!(c.column, Some("currencycode"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }

    cleanup(&storage, "currency", 90_004).await;
}
