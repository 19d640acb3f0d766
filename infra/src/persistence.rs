use anyhow::Error;
use log::*;
use postgres::NoTls;
use r2d2_postgres::PostgresConnectionManager;
use serde::{de::DeserializeOwned, Serialize};

use crate::documents::{Entity, Keyed};

const SETUP_SQL: &'static str = include_str!("persistence.sql");
const SAVE_SQL: &'static str = "INSERT INTO documents (prefix, id, body) \
     VALUES ($1, $2, $3) \
     ON CONFLICT (prefix, id) DO UPDATE SET body = EXCLUDED.body";
const LOAD_SQL: &'static str = "SELECT body FROM documents WHERE prefix = $1 AND id = $2";
const LIST_SQL: &'static str = "SELECT body FROM documents WHERE prefix = $1 ORDER BY id";
const DELETE_SQL: &'static str = "DELETE FROM documents WHERE prefix = $1 AND id = $2";
const FIND_BY_SQL: &'static str = "SELECT body FROM documents \
     WHERE prefix = $1 AND body ->> ($2::text) = $3 ORDER BY id";

/// A connection to the document store. Each entity family lives under
/// its own prefix in a single `documents` table of JSONB bodies.
pub struct Documents {
    client: postgres::Client,
}

pub struct DocumentConnectionManager(PostgresConnectionManager<NoTls>);

impl Documents {
    pub fn wrap(client: postgres::Client) -> Self {
        Documents { client }
    }

    pub fn client(&mut self) -> &mut postgres::Client {
        &mut self.client
    }

    /// Applies the schema. Safe to call repeatedly.
    pub fn setup(&mut self) -> Result<(), Error> {
        self.client.batch_execute(SETUP_SQL)?;
        Ok(())
    }

    /// Inserts the document under its key, or overwrites the stored body
    /// wholesale if the key is already present.
    pub fn save<D: Keyed + Serialize>(&mut self, document: &D) -> Result<(), Error> {
        let key = document.key();
        let json = serde_json::to_value(document)?;
        let nrows = self.client.execute(SAVE_SQL, &[&D::PREFIX, &key, &json])?;
        debug!("Save of {}/{} modified {} rows", D::PREFIX, key, nrows);
        Ok(())
    }

    pub fn load<D: Entity + DeserializeOwned>(&mut self, key: &str) -> Result<Option<D>, Error> {
        let row = self.client.query_opt(LOAD_SQL, &[&D::PREFIX, &key])?;
        if let Some(row) = row {
            let json: serde_json::Value = row.get(0);
            let doc = serde_json::from_value(json)?;
            Ok(Some(doc))
        } else {
            Ok(None)
        }
    }

    /// All documents under the entity's prefix, in key order.
    pub fn list<D: Entity + DeserializeOwned>(&mut self) -> Result<Vec<D>, Error> {
        let rows = self.client.query(LIST_SQL, &[&D::PREFIX])?;
        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let json: serde_json::Value = row.get(0);
            documents.push(serde_json::from_value(json)?);
        }
        Ok(documents)
    }

    /// Removes the document with the given key. Removing an absent key
    /// is a no-op; the return value says whether a row went away.
    pub fn delete<D: Entity>(&mut self, key: &str) -> Result<bool, Error> {
        let nrows = self.client.execute(DELETE_SQL, &[&D::PREFIX, &key])?;
        debug!("Delete of {}/{} removed {} rows", D::PREFIX, key, nrows);
        Ok(nrows > 0)
    }

    /// Documents under the prefix whose `field` equals `value` exactly,
    /// by PostgreSQL text equality (case-sensitive).
    pub fn find_by<D: Entity + DeserializeOwned>(
        &mut self,
        field: &str,
        value: &str,
    ) -> Result<Vec<D>, Error> {
        let rows = self.client.query(FIND_BY_SQL, &[&D::PREFIX, &field, &value])?;
        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let json: serde_json::Value = row.get(0);
            documents.push(serde_json::from_value(json)?);
        }
        Ok(documents)
    }
}

impl DocumentConnectionManager {
    pub fn new(manager: PostgresConnectionManager<NoTls>) -> Self {
        DocumentConnectionManager(manager)
    }
}

impl r2d2::ManageConnection for DocumentConnectionManager {
    type Connection = Documents;
    type Error = postgres::Error;

    fn connect(&self) -> Result<Documents, postgres::Error> {
        self.0.connect().map(Documents::wrap)
    }

    fn is_valid(&self, conn: &mut Documents) -> Result<(), postgres::Error> {
        self.0.is_valid(conn.client())
    }

    fn has_broken(&self, conn: &mut Documents) -> bool {
        self.0.has_broken(conn.client())
    }
}
