#![allow(dead_code)]

use oxide_stmt::{SqlValue, StatementBuilder};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;

pub const CREATE_ARTICLES_SQL: &str = "CREATE TABLE articles (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    views INTEGER NOT NULL,
    data TEXT
)";

pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");
    sqlx::query(CREATE_ARTICLES_SQL)
        .execute(&pool)
        .await
        .expect("Failed to create articles table");
    pool
}

/// Binds every argument positionally, in the order the builder produced them.
pub fn bind_all<'q>(sql: &'q str, params: &'q [SqlValue]) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    params
        .iter()
        .fold(sqlx::query(sql), |query, value| match value {
            SqlValue::Null => query.bind(Option::<i64>::None),
            SqlValue::Bool(b) => query.bind(*b),
            SqlValue::Int(i) => query.bind(*i),
            SqlValue::Float(f) => query.bind(*f),
            SqlValue::Text(s) => query.bind(s.clone()),
            SqlValue::Blob(b) => query.bind(b.clone()),
        })
}

pub fn article(id: i64, title: &str, views: i64, data: &str) -> StatementBuilder {
    StatementBuilder::new("articles")
        .property("id", id)
        .property("title", title)
        .property("views", views)
        .property("data", data)
}

pub async fn seed(pool: &SqlitePool) {
    let rows = [
        (1, "50%_off sale", 10, r#"{"author":"alice"}"#),
        (2, "500 off", 20, r#"{"author":"bob"}"#),
        (3, "50x_off", 30, r#"{"author":"alice"}"#),
        (4, "weekly digest", 40, r#"{"author":"carol"}"#),
        (5, "release notes", 50, r#"{"author":"bob"}"#),
    ];
    for (id, title, views, data) in rows {
        let (sql, params) = article(id, title, views, data)
            .insert_sql()
            .expect("insert renders");
        bind_all(&sql, &params)
            .execute(pool)
            .await
            .expect("insert executes");
    }
}

/// Counts `?` markers in rendered text.
pub fn markers(sql: &str) -> usize {
    sql.matches('?').count()
}
