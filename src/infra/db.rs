//! SQLite connection, schema setup and query passthroughs.

use crate::error::AppError;
use crate::infra::schema;
use rusqlite::types::Value;
use rusqlite::{params, Batch, Connection, Params, Statement};
use std::ops::Index;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "shipments.db";

/// One result row: columns in SELECT order, addressable by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    fn with_capacity(n: usize) -> Self {
        Self {
            columns: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, name: String, value: Value) {
        self.columns.push((name, value));
    }

    /// Value of the first column named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Index<&str> for Row {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.get(name) {
            Some(v) => v,
            None => panic!("no column named {}", name),
        }
    }
}

/// Prepare `query`, rejecting anything after the first statement.
fn prepare_single<'conn>(conn: &'conn Connection, query: &str) -> Result<Statement<'conn>, AppError> {
    let mut batch = Batch::new(conn, query);
    let stmt = match batch.next()? {
        Some(stmt) => stmt,
        None => return Ok(conn.prepare(query)?),
    };
    if batch.next()?.is_some() {
        return Err(rusqlite::Error::MultipleStatement.into());
    }
    Ok(stmt)
}

/// Handle to the shipments store. Holds only the path; every call opens its own connection.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open (or create) the store at `path` and make sure schema and seed rows exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let db = Self {
            path: path.as_ref().to_path_buf(),
        };
        db.init_database().map_err(|e| {
            log::error!("Database initialization error: {}", e);
            e
        })?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fresh connection with foreign key enforcement on.
    pub fn get_connection(&self) -> Result<Connection, AppError> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    fn init_database(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        log::info!("DB path: {:?}", self.path);

        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;

        tx.execute_batch(schema::INIT_SQL)?;

        tx.execute(
            "INSERT OR IGNORE INTO users (username, password_hash) VALUES (?1, ?2)",
            params![
                schema::ADMIN_USERNAME,
                schema::hash_password(schema::DEFAULT_ADMIN_PASSWORD)
            ],
        )?;

        let product_count: i64 = tx.query_row("SELECT COUNT(*) FROM products", [], |r| r.get(0))?;
        if product_count == 0 {
            for name in schema::SEED_PRODUCTS {
                tx.execute("INSERT INTO products (name) VALUES (?1)", params![name])?;
            }
            for name in schema::SEED_FARMERS {
                tx.execute("INSERT INTO farmers (name) VALUES (?1)", params![name])?;
            }
            log::info!(
                "Seeded {} products and {} farmers",
                schema::SEED_PRODUCTS.len(),
                schema::SEED_FARMERS.len()
            );
        }

        tx.commit()?;
        Ok(())
    }

    /// Run a read statement and collect every row as a column-name map.
    pub fn run_query<P: Params>(&self, query: &str, params: P) -> Result<Vec<Row>, AppError> {
        log::debug!("run_query: {}", query);
        let conn = self.get_connection()?;
        let mut stmt = prepare_single(&conn, query)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let rows = stmt.query_map(params, |r| {
            let mut row = Row::with_capacity(columns.len());
            for (i, name) in columns.iter().enumerate() {
                row.push(name.clone(), r.get::<_, Value>(i)?);
            }
            Ok(row)
        })?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Run a single mutating statement and return the connection's last inserted rowid.
    ///
    /// The connection is fresh, so for UPDATE/DELETE the returned id is 0.
    pub fn run_update<P: Params>(&self, query: &str, params: P) -> Result<i64, AppError> {
        log::debug!("run_update: {}", query);
        let conn = self.get_connection()?;
        prepare_single(&conn, query)?.execute(params)?;
        Ok(conn.last_insert_rowid())
    }

    /// Row count of a table from [`schema::TABLES`].
    pub fn table_count(&self, table: &str) -> Result<i64, AppError> {
        if !schema::TABLES.iter().any(|t| *t == table) {
            return Err(AppError::Config(format!("unknown table {}", table)));
        }
        let conn = self.get_connection()?;
        let count = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
        Ok(count)
    }
}
