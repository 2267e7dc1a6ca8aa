//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for running integration tests
//! against a real PostgreSQL database. Each test gets a private schema so tests can
//! recreate tables concurrently without seeing each other's data.

// Helpers are shared across test files and not every file uses all of them.
#![allow(dead_code)]

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use persistence::repositories::ClientRepository;
use rand::Rng;
use sqlx::{Connection, PgConnection};

/// A connection bound to a throwaway schema.
pub struct TestDb {
    pub conn: PgConnection,
    schema: String,
}

impl TestDb {
    /// Connect using `TEST_DATABASE_URL` and switch to a fresh schema.
    ///
    /// Returns `None` when the variable is unset so database tests are
    /// skipped on machines without PostgreSQL.
    pub async fn connect() -> Option<Self> {
        let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set; skipping database test");
            return None;
        };

        let mut conn = PgConnection::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        let schema = format!("client_test_{}", rand::thread_rng().gen::<u32>());
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&mut conn)
            .await
            .expect("Failed to create test schema");
        sqlx::query(&format!("SET search_path TO {schema}"))
            .execute(&mut conn)
            .await
            .expect("Failed to set search_path");

        Some(Self { conn, schema })
    }

    /// Connect and create the client tables.
    pub async fn initialized() -> Option<Self> {
        let mut db = Self::connect().await?;
        db.repo()
            .initialize_schema()
            .await
            .expect("Failed to initialize schema");
        Some(db)
    }

    pub fn repo(&mut self) -> ClientRepository<'_> {
        ClientRepository::new(&mut self.conn)
    }

    /// Count rows in a table of the test schema.
    pub async fn count(&mut self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&mut self.conn)
            .await
            .expect("Failed to count rows");
        count
    }

    /// Drop the test schema and everything in it.
    pub async fn cleanup(mut self) {
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&mut self.conn)
            .await
            .expect("Failed to drop test schema");
    }
}

/// Generate a unique email that fits the 20 character column.
pub fn unique_test_email() -> String {
    format!("u{}@t.io", rand::thread_rng().gen::<u32>())
}

/// Test person data.
pub struct TestPerson {
    pub first_name: String,
    pub second_name: String,
    pub email: String,
}

impl TestPerson {
    pub fn new() -> Self {
        Self {
            first_name: truncate(FirstName().fake()),
            second_name: truncate(LastName().fake()),
            email: unique_test_email(),
        }
    }
}

impl Default for TestPerson {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate(mut value: String) -> String {
    value.truncate(20);
    value
}
