//! Scripted demonstration run against a live database.
//!
//! Recreates the schema, then exercises every repository operation on two
//! sample clients, writing each result as a labelled JSON line.

use std::io::Write;

use anyhow::{Context, Result};
use domain::models::{PersonChanges, PersonFilter};
use persistence::repositories::ClientRepository;
use serde::Serialize;
use sqlx::PgConnection;
use tracing::info;

/// Writes one result line: `label: <json>`.
pub fn report<W: Write, T: Serialize + ?Sized>(out: &mut W, label: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).context("failed to serialize result")?;
    writeln!(out, "{label}: {json}").context("failed to write result")?;
    Ok(())
}

/// Runs the full demonstration sequence.
///
/// Destructive: the persons and phones tables are dropped and recreated
/// first. Any database error aborts the run.
pub async fn run<W: Write>(conn: &mut PgConnection, out: &mut W) -> Result<()> {
    let mut repo = ClientRepository::new(conn);

    repo.initialize_schema()
        .await
        .context("failed to initialize schema")?;
    info!("Schema recreated");

    let vadim = repo
        .create_person("Vadim", "Vlasov", "iwlasov@gmail.com")
        .await?;
    report(out, "create_person", &vadim)?;
    let alex = repo
        .create_person("Alex", "Germanov", "germanov@mail.ru")
        .await?;
    report(out, "create_person", &alex)?;

    for (phone, owner) in [
        ("89119315985", vadim.id),
        ("89119315986", vadim.id),
        ("89213409495", alex.id),
    ] {
        let created = repo.create_phone(phone, owner).await?;
        report(out, "create_phone", &created)?;
    }

    let searches = [
        PersonFilter::new().first_name("Vadim"),
        PersonFilter::new().first_name("Vadim").second_name("lasov"),
        PersonFilter::new().second_name("Vlasov"),
        PersonFilter::new().phone("89119315986"),
        PersonFilter::new().email("germanov@mail.ru"),
    ];
    for filter in &searches {
        let rows = repo.find_persons(filter).await?;
        report(out, "find_persons", &rows)?;
    }

    let renamed = repo
        .update_person(
            vadim.id,
            &PersonChanges::new()
                .first_name("Самарий")
                .second_name("Бантиков"),
        )
        .await?;
    report(out, "update_person", &renamed)?;
    let new_email = repo
        .update_person(alex.id, &PersonChanges::new().email("AG@yandex.ru"))
        .await?;
    report(out, "update_person", &new_email)?;

    for phone in ["89119315985", "89119315986", "89213409495"] {
        let owner = repo.delete_phone(phone).await?;
        report(out, "delete_phone", &owner)?;
    }

    for id in [vadim.id, alex.id] {
        let deleted = repo.delete_person(id).await?;
        report(out, "delete_person", &deleted)?;
    }

    Ok(())
}
