//! Client repository for person and phone database operations.

use domain::models::{ClientRecord, Person, PersonChanges, PersonFilter, PhoneOwner};
use sqlx::{Connection, PgConnection};
use tracing::debug;

use crate::entities::{ClientRecordEntity, PersonEntity, PhoneOwnerEntity};
use crate::error::StoreResult;
use crate::metrics::QueryTimer;
use crate::schema;

/// Repository for client (person and phone) database operations.
///
/// Works against a single borrowed connection. Every mutating operation
/// runs in its own transaction and commits before returning; a failed
/// operation rolls back when the transaction is dropped.
pub struct ClientRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ClientRepository<'c> {
    /// Creates a new ClientRepository over the given connection.
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Drop and recreate the persons and phones tables.
    ///
    /// Destructive: all existing client data is lost.
    pub async fn initialize_schema(&mut self) -> StoreResult<()> {
        let timer = QueryTimer::new("initialize_schema");
        let mut tx = self.conn.begin().await?;
        for sql in schema::statements() {
            sqlx::query(sql).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        timer.record();
        debug!("Client schema initialized");
        Ok(())
    }

    /// Create a new person.
    pub async fn create_person(
        &mut self,
        first_name: &str,
        second_name: &str,
        email: &str,
    ) -> StoreResult<Person> {
        let timer = QueryTimer::new("create_person");
        let mut tx = self.conn.begin().await?;
        let entity = sqlx::query_as::<_, PersonEntity>(
            r#"
            INSERT INTO persons (first_name, second_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, second_name, email
            "#,
        )
        .bind(first_name)
        .bind(second_name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        timer.record();

        debug!(person_id = entity.id, "Created person");
        Ok(entity.into())
    }

    /// Attach a phone number to an existing person.
    pub async fn create_phone(&mut self, phone: &str, person_id: i32) -> StoreResult<PhoneOwner> {
        let timer = QueryTimer::new("create_phone");
        let mut tx = self.conn.begin().await?;
        let entity = sqlx::query_as::<_, PhoneOwnerEntity>(
            r#"
            INSERT INTO phones (phone, person_id)
            VALUES ($1, $2)
            RETURNING phone, person_id
            "#,
        )
        .bind(phone)
        .bind(person_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        timer.record();
        Ok(entity.into())
    }

    /// Update a person (partial update).
    ///
    /// Each present field is written with its own statement; absent fields
    /// are preserved. Returns the rows for `id` after the update, which is
    /// empty when no such person exists.
    pub async fn update_person(
        &mut self,
        id: i32,
        changes: &PersonChanges,
    ) -> StoreResult<Vec<Person>> {
        let timer = QueryTimer::new("update_person");
        let mut tx = self.conn.begin().await?;

        for (field, value) in changes.iter() {
            // Column names come from the PersonField allow-list only.
            let sql = format!("UPDATE persons SET {} = $1 WHERE id = $2", field.column());
            let result = sqlx::query(&sql)
                .bind(value)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            debug!(
                person_id = id,
                field = %field,
                rows = result.rows_affected(),
                "Updated person field"
            );
        }

        let entities = sqlx::query_as::<_, PersonEntity>(
            r#"
            SELECT id, first_name, second_name, email
            FROM persons
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        timer.record();

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Delete a phone by its exact number.
    ///
    /// Returns the owning person id, or `None` if no phone matched. When
    /// several rows carry the same number they are all removed and the
    /// first owner is reported.
    pub async fn delete_phone(&mut self, phone: &str) -> StoreResult<Option<i32>> {
        let timer = QueryTimer::new("delete_phone");
        let mut tx = self.conn.begin().await?;
        let owners: Vec<(i32,)> = sqlx::query_as(
            r#"
            DELETE FROM phones
            WHERE phone = $1
            RETURNING person_id
            "#,
        )
        .bind(phone)
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;
        timer.record();

        if owners.len() > 1 {
            debug!(phone, rows = owners.len(), "Deleted duplicate phone rows");
        }
        Ok(owners.first().map(|(person_id,)| *person_id))
    }

    /// Delete a person and, through the cascading foreign key, their phones.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete_person(&mut self, id: i32) -> StoreResult<u64> {
        let timer = QueryTimer::new("delete_person");
        let mut tx = self.conn.begin().await?;
        let result = sqlx::query(
            r#"
            DELETE FROM persons WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Find person/phone rows matching every criterion set in `filter`.
    ///
    /// Criteria are exact matches; unset criteria match everything. Persons
    /// without phones are not returned.
    pub async fn find_persons(
        &mut self,
        filter: &PersonFilter,
    ) -> StoreResult<Vec<ClientRecord>> {
        let timer = QueryTimer::new("find_persons");
        let entities = sqlx::query_as::<_, ClientRecordEntity>(
            r#"
            SELECT p.id AS person_id, p.first_name, p.second_name, p.email,
                   ph.id AS phone_id, ph.phone
            FROM persons p
            JOIN phones ph ON p.id = ph.person_id
            WHERE ($1::varchar IS NULL OR p.first_name = $1)
              AND ($2::varchar IS NULL OR p.second_name = $2)
              AND ($3::varchar IS NULL OR p.email = $3)
              AND ($4::varchar IS NULL OR ph.phone = $4)
            ORDER BY p.id, ph.id
            "#,
        )
        .bind(filter.first_name.as_deref())
        .bind(filter.second_name.as_deref())
        .bind(filter.email.as_deref())
        .bind(filter.phone.as_deref())
        .fetch_all(&mut *self.conn)
        .await?;
        timer.record();

        Ok(entities.into_iter().map(Into::into).collect())
    }
}
