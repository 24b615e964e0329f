//! Database provisioning: make sure the target database exists and open the pool.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::{ConnectOptions, PgConnection};

/// Ensure the database named in `options` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), sqlx::Error> {
    let db_name = match options.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn: PgConnection = admin_options(options).connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

pub async fn connect(options: PgConnectOptions, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Same server and credentials, pointed at the `postgres` maintenance database.
fn admin_options(options: &PgConnectOptions) -> PgConnectOptions {
    options.clone().database("postgres")
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_options_swap_only_database() {
        let options = PgConnectOptions::new_without_pgpass()
            .host("db")
            .port(6543)
            .username("to@do")
            .password("p@ss/w#rd")
            .database("todos");
        let admin = admin_options(&options);
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db");
        assert_eq!(admin.get_port(), 6543);
        assert_eq!(admin.get_username(), "to@do");
        assert_eq!(options.get_database(), Some("todos"));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("todo\"s"), "\"todo\"\"s\"");
    }
}
