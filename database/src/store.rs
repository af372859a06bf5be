use crate::{
    consts::consts::EntityId,
    database::{database::Database, options::DatabaseOptions, request_manager::RequestManager},
    error::PersonResult,
    model::person::{NewPerson, Person},
    persistence::document::DocumentStore,
};

/// Which backing collection holds the people
#[derive(Debug, Clone)]
pub enum StorageEngine {
    /// Transient table on a database thread, names must be unique
    Memory(DatabaseOptions),
    /// PostgreSQL connection string, writes are checked against the person schema
    Document(String),
}

/// Single entry point for the route handlers, whatever the backing collection is
#[derive(Clone)]
pub enum PersonStore {
    Memory(RequestManager),
    Document(DocumentStore),
}

impl PersonStore {
    pub async fn connect(engine: StorageEngine) -> PersonResult<Self> {
        let store = match engine {
            StorageEngine::Memory(options) => PersonStore::Memory(Database::new(options).run()),
            StorageEngine::Document(database_url) => {
                PersonStore::Document(DocumentStore::connect(&database_url).await?)
            }
        };

        Ok(store)
    }

    pub fn new_seeded_test() -> Self {
        PersonStore::Memory(Database::new(DatabaseOptions::default()).run())
    }

    pub async fn list(&self) -> PersonResult<Vec<Person>> {
        match self {
            PersonStore::Memory(rm) => rm.send_list().await,
            PersonStore::Document(store) => store.list().await,
        }
    }

    pub async fn count(&self) -> PersonResult<usize> {
        match self {
            PersonStore::Memory(rm) => rm.send_count().await,
            PersonStore::Document(store) => store.count().await,
        }
    }

    pub async fn get_by_id(&self, id: EntityId) -> PersonResult<Option<Person>> {
        match self {
            PersonStore::Memory(rm) => rm.send_get(id).await,
            PersonStore::Document(store) => store.get_by_id(&id).await,
        }
    }

    pub async fn create(&self, new_person: NewPerson) -> PersonResult<Person> {
        match self {
            PersonStore::Memory(rm) => rm.send_add(new_person).await,
            PersonStore::Document(store) => store.create(new_person).await,
        }
    }

    pub async fn update_number(&self, id: EntityId, number: String) -> PersonResult<Option<Person>> {
        match self {
            PersonStore::Memory(rm) => rm.send_update_number(id, number).await,
            PersonStore::Document(store) => store.update_number(&id, &number).await,
        }
    }

    /// Succeeds whether or not the record existed
    pub async fn delete_by_id(&self, id: EntityId) -> PersonResult<()> {
        match self {
            PersonStore::Memory(rm) => rm.send_remove(id).await,
            PersonStore::Document(store) => store.delete_by_id(&id).await,
        }
    }
}
