use std::sync::Arc;

use tokio_postgres::{Client, NoTls, Row};
use uuid::Uuid;

use crate::{
    consts::consts::{EntityId, PERSON_TABLE_NAME},
    error::{PersonError, PersonResult},
    model::person::{NewPerson, Person},
    validation::PersonSchema,
};

/// Persists people as JSONB documents in PostgreSQL, the database assigns the ids
#[derive(Clone)]
pub struct DocumentStore {
    client: Arc<Client>,
    schema: PersonSchema,
}

impl DocumentStore {
    pub async fn connect(database_url: &str) -> PersonResult<Self> {
        let (client, connection) = tokio_postgres::connect(database_url, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("Document store connection error: {}", e);
            }
        });

        let store = Self {
            client: Arc::new(client),
            schema: PersonSchema::default(),
        };

        store.init().await?;

        log::info!("Connected to document store [Table: {}]", PERSON_TABLE_NAME);

        Ok(store)
    }

    async fn init(&self) -> PersonResult<()> {
        let create_table = format!(
            r#"
            CREATE TABLE IF NOT EXISTS "public"."{}" (
                "id" uuid NOT NULL DEFAULT gen_random_uuid(),
                "data" jsonb NOT NULL,
                "created_at" timestamptz NOT NULL DEFAULT now(),
                PRIMARY KEY ("id")
            );
            "#,
            PERSON_TABLE_NAME
        );

        self.client.batch_execute(&create_table).await?;

        Ok(())
    }

    pub async fn list(&self) -> PersonResult<Vec<Person>> {
        let select = format!(
            r#"SELECT "id", "data" FROM "public"."{}" ORDER BY "created_at";"#,
            PERSON_TABLE_NAME
        );

        let rows = self.client.query(&select, &[]).await?;

        rows.iter().map(person_from_row).collect()
    }

    pub async fn count(&self) -> PersonResult<usize> {
        let count = format!(r#"SELECT COUNT(*) FROM "public"."{}";"#, PERSON_TABLE_NAME);

        let row = self.client.query_one(&count, &[]).await?;
        let count: i64 = row.try_get(0)?;

        Ok(count as usize)
    }

    pub async fn get_by_id(&self, id: &EntityId) -> PersonResult<Option<Person>> {
        let uuid = parse_id(id)?;

        let select = format!(
            r#"SELECT "id", "data" FROM "public"."{}" WHERE "id" = $1;"#,
            PERSON_TABLE_NAME
        );

        let row = self.client.query_opt(&select, &[&uuid]).await?;

        row.as_ref().map(person_from_row).transpose()
    }

    pub async fn create(&self, new_person: NewPerson) -> PersonResult<Person> {
        self.schema.validate(&new_person)?;

        let insert = format!(
            r#"INSERT INTO "public"."{}" ("data") VALUES ($1) RETURNING "id", "data";"#,
            PERSON_TABLE_NAME
        );

        let data = serde_json::to_value(&new_person)?;

        let row = self.client.query_one(&insert, &[&data]).await?;

        person_from_row(&row)
    }

    /// A malformed id is reported before the number is validated
    pub async fn update_number(&self, id: &EntityId, number: &str) -> PersonResult<Option<Person>> {
        let uuid = parse_id(id)?;

        self.schema.validate_number(number)?;

        let update = format!(
            r#"
            UPDATE "public"."{}"
            SET "data" = jsonb_set("data", '{{number}}', to_jsonb($2::text))
            WHERE "id" = $1
            RETURNING "id", "data";
            "#,
            PERSON_TABLE_NAME
        );

        let row = self.client.query_opt(&update, &[&uuid, &number]).await?;

        row.as_ref().map(person_from_row).transpose()
    }

    pub async fn delete_by_id(&self, id: &EntityId) -> PersonResult<()> {
        let uuid = parse_id(id)?;

        let delete = format!(
            r#"DELETE FROM "public"."{}" WHERE "id" = $1;"#,
            PERSON_TABLE_NAME
        );

        let removed = self.client.execute(&delete, &[&uuid]).await?;

        log::debug!("Deleted {} record(s) [id: {}]", removed, id);

        Ok(())
    }
}

fn parse_id(id: &EntityId) -> PersonResult<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| PersonError::InvalidIdentifierFormat(id.to_string()))
}

fn person_from_row(row: &Row) -> PersonResult<Person> {
    let id: Uuid = row.try_get("id")?;
    let data: serde_json::Value = row.try_get("data")?;

    let new_person: NewPerson = serde_json::from_value(data)?;

    Ok(Person::new(EntityId(id.to_string()), new_person))
}
