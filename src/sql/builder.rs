//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for a flat table.
//! Placeholders use `$N`, which both PostgreSQL and SQLite accept.

/// Table name, primary key column, and the remaining columns in bind order.
#[derive(Clone, Copy, Debug)]
pub struct TableSpec {
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [&'static str],
}

/// Quote identifier (safe: only from static table definitions).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(table: &TableSpec) -> String {
    std::iter::once(table.pk)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, ordered by the first non-key column.
pub fn select_all(table: &TableSpec) -> String {
    let order = table.columns.first().copied().unwrap_or(table.pk);
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(table),
        quoted(table.name),
        quoted(order)
    )
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &TableSpec) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(table),
        quoted(table.name),
        quoted(table.pk)
    )
}

/// INSERT all columns. Caller binds the id as `$1`, then the columns in order.
pub fn insert(table: &TableSpec) -> String {
    let placeholders: Vec<String> = (1..=table.columns.len() + 1).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table.name),
        column_list(table),
        placeholders.join(", ")
    )
}

/// UPDATE every non-key column. Caller binds the id as `$1`, then the columns in order.
pub fn update(table: &TableSpec) -> String {
    let sets: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = $1",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk)
    )
}

/// DELETE by primary key. Caller binds the id as `$1`.
pub fn delete(table: &TableSpec) -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        quoted(table.name),
        quoted(table.pk)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: TableSpec = TableSpec {
        name: "parks",
        pk: "id",
        columns: &["name", "coordinates_latitude", "coordinates_longitude"],
    };

    #[test]
    fn builds_statements() {
        assert_eq!(
            select_all(&T),
            r#"SELECT "id", "name", "coordinates_latitude", "coordinates_longitude" FROM "parks" ORDER BY "name""#
        );
        assert_eq!(
            insert(&T),
            r#"INSERT INTO "parks" ("id", "name", "coordinates_latitude", "coordinates_longitude") VALUES ($1, $2, $3, $4)"#
        );
        assert_eq!(
            update(&T),
            r#"UPDATE "parks" SET "name" = $2, "coordinates_latitude" = $3, "coordinates_longitude" = $4 WHERE "id" = $1"#
        );
        assert_eq!(delete(&T), r#"DELETE FROM "parks" WHERE "id" = $1"#);
        assert!(select_by_id(&T).ends_with(r#"WHERE "id" = $1"#));
    }

    #[test]
    fn quotes_embedded_quotes() {
        assert_eq!(quoted(r#"a"b"#), r#""a""b""#);
    }
}
