//! Table definitions for persons and their phones.
//!
//! Tables are dropped child-first and created parent-first so the
//! foreign key from `phones` to `persons` always resolves.

/// Drops existing tables, dependents before the tables they reference.
pub const DROP_STATEMENTS: [&str; 2] = [
    "DROP TABLE IF EXISTS phones",
    "DROP TABLE IF EXISTS persons",
];

/// Creates tables, referenced tables before their dependents.
pub const CREATE_STATEMENTS: [&str; 2] = [
    r#"
    CREATE TABLE persons (
        id SERIAL PRIMARY KEY,
        first_name VARCHAR(20) NOT NULL,
        second_name VARCHAR(20) NOT NULL,
        email VARCHAR(20) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE phones (
        id SERIAL PRIMARY KEY,
        phone VARCHAR(12),
        person_id INTEGER NOT NULL REFERENCES persons(id) ON DELETE CASCADE
    )
    "#,
];

/// All statements in execution order.
pub fn statements() -> impl Iterator<Item = &'static str> {
    DROP_STATEMENTS.into_iter().chain(CREATE_STATEMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(needle: &str) -> usize {
        statements()
            .position(|sql| sql.contains(needle))
            .unwrap_or_else(|| panic!("no statement contains {needle:?}"))
    }

    #[test]
    fn test_drops_child_table_first() {
        assert!(
            position("DROP TABLE IF EXISTS phones") < position("DROP TABLE IF EXISTS persons")
        );
    }

    #[test]
    fn test_creates_parent_table_first() {
        assert!(position("CREATE TABLE persons") < position("CREATE TABLE phones"));
    }

    #[test]
    fn test_drops_run_before_creates() {
        assert!(position("DROP TABLE IF EXISTS persons") < position("CREATE TABLE persons"));
        assert_eq!(statements().count(), 4);
    }

    #[test]
    fn test_phone_owner_cascades() {
        let phones = CREATE_STATEMENTS[1];
        assert!(phones.contains("REFERENCES persons(id) ON DELETE CASCADE"));
        assert!(phones.contains("person_id INTEGER NOT NULL"));
    }

    #[test]
    fn test_email_is_unique() {
        assert!(CREATE_STATEMENTS[0].contains("email VARCHAR(20) NOT NULL UNIQUE"));
    }
}
