// SQLite post store — imported posts land here, the pipeline reads
// titles back out, and the latest trend report is cached as a
// singleton JSON row.

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};

use crate::ingest::{DocumentSource, PostRecord, RawDocument};
use crate::summarize::TrendReport;

pub struct PostStore {
    conn: Connection,
}

impl PostStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {path}"))?;
        create_tables(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_tables(&conn)?;
        Ok(Self { conn })
    }

    /// Count the user-created tables in the database.
    pub fn table_count(&self) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Insert a batch of imported posts in one transaction.
    pub fn insert_posts(&mut self, records: &[PostRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO posts (platform, author, title, likes, url, fetched_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            let now = Utc::now().to_rfc3339();
            for record in records {
                stmt.execute(params![
                    record.platform,
                    record.author,
                    record.title,
                    record.likes,
                    record.url,
                    now
                ])?;
                inserted += 1;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    pub fn post_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Fetch every stored post as a raw document (id + title).
    pub fn fetch_documents(&self) -> Result<Vec<RawDocument>> {
        let mut stmt = self.conn.prepare("SELECT id, title FROM posts ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(RawDocument {
                id: row.get(0)?,
                text: row.get(1)?,
            })
        })?;

        let mut docs = Vec::new();
        for doc in rows {
            docs.push(doc?);
        }
        Ok(docs)
    }

    /// Cache the latest report (upsert into the singleton row).
    pub fn save_report(&self, report: &TrendReport) -> Result<()> {
        let json = serde_json::to_string(report)?;
        self.conn.execute(
            "INSERT INTO trend_report (id, report_json, doc_count, updated_at)
             VALUES (1, ?1, ?2, datetime('now'))
             ON CONFLICT(id) DO UPDATE SET
                 report_json = excluded.report_json,
                 doc_count = excluded.doc_count,
                 updated_at = excluded.updated_at",
            params![json, report.doc_count as i64],
        )?;
        Ok(())
    }

    /// Load the cached report and its updated_at timestamp, if any.
    pub fn get_report(&self) -> Result<Option<(TrendReport, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT report_json, updated_at FROM trend_report WHERE id = 1")?;
        let mut rows = stmt.query([])?;

        match rows.next()? {
            Some(row) => {
                let json: String = row.get(0)?;
                let updated_at: String = row.get(1)?;
                let report = serde_json::from_str(&json)
                    .context("Cached report is not valid JSON; rebuild with --refresh")?;
                Ok(Some((report, updated_at)))
            }
            None => Ok(None),
        }
    }
}

impl DocumentSource for PostStore {
    fn fetch(&self) -> Result<Vec<RawDocument>> {
        self.fetch_documents()
    }
}

/// Create all tables if they don't exist yet. Idempotent — safe to call
/// on every startup.
fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Imported posts; only the title feeds the pipeline, the rest
        -- is provenance from the platform loaders
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            platform TEXT,
            author TEXT,
            title TEXT,
            likes INTEGER,
            url TEXT,
            fetched_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- The latest trend report
        -- Stored as JSON so the structure can evolve without migrations
        CREATE TABLE IF NOT EXISTS trend_report (
            id INTEGER PRIMARY KEY CHECK (id = 1),  -- singleton row
            report_json TEXT NOT NULL,
            doc_count INTEGER NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )
    .context("Failed to create database tables")?;

    Ok(())
}
