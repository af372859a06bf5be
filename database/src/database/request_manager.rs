use tokio::time::timeout;

use crate::{
    consts::consts::{EntityId, DATABASE_RESPONSE_TIMEOUT},
    error::{PersonError, PersonResult},
    model::{
        person::{NewPerson, Person},
        statement::{Statement, StatementResult},
    },
};

use super::commands::{DatabaseCommand, DatabaseCommandRequest, DatabaseCommandResponse};

/// Goal of the request manager is to provide a simple interface for interacting with the database thread
///
/// The request manager provides the following APIs, sorted by the easiest to use to the most complex
/// 1. CRUD operations on a single person -- these are completely type safe
/// 2. Statement based API -- not type safe because you need to know what Statement maps to what StatementResult
///
/// Cloning is cheap, each clone shares the same channel to the database thread.
#[derive(Clone)]
pub struct RequestManager {
    database_sender: flume::Sender<DatabaseCommandRequest>,
}

impl RequestManager {
    pub fn new(database_sender: flume::Sender<DatabaseCommandRequest>) -> Self {
        Self { database_sender }
    }

    pub async fn send_add(&self, new_person: NewPerson) -> PersonResult<Person> {
        match self.send_statement(Statement::Add(new_person)).await? {
            StatementResult::Single(person) => Ok(person),
            other => Err(unexpected_result(other)),
        }
    }

    pub async fn send_update_number(
        &self,
        id: EntityId,
        number: String,
    ) -> PersonResult<Option<Person>> {
        match self
            .send_statement(Statement::UpdateNumber(id, number))
            .await?
        {
            StatementResult::GetSingle(person) => Ok(person),
            other => Err(unexpected_result(other)),
        }
    }

    pub async fn send_remove(&self, id: EntityId) -> PersonResult<()> {
        match self.send_statement(Statement::Remove(id)).await? {
            StatementResult::SuccessStatus(_) => Ok(()),
            other => Err(unexpected_result(other)),
        }
    }

    pub async fn send_get(&self, id: EntityId) -> PersonResult<Option<Person>> {
        match self.send_statement(Statement::Get(id)).await? {
            StatementResult::GetSingle(person) => Ok(person),
            other => Err(unexpected_result(other)),
        }
    }

    pub async fn send_list(&self) -> PersonResult<Vec<Person>> {
        match self.send_statement(Statement::List).await? {
            StatementResult::List(persons) => Ok(persons),
            other => Err(unexpected_result(other)),
        }
    }

    pub async fn send_count(&self) -> PersonResult<usize> {
        match self.send_statement(Statement::Count).await? {
            StatementResult::Count(count) => Ok(count),
            other => Err(unexpected_result(other)),
        }
    }

    /// Sends a shutdown request to the database and returns the database's response
    pub async fn send_shutdown_request(&self) -> PersonResult<String> {
        match self.send_command(DatabaseCommand::Shutdown).await? {
            DatabaseCommandResponse::Control(message) => Ok(message),
            DatabaseCommandResponse::Statement(result) => Err(PersonError::Storage(format!(
                "Unexpected response to shutdown: {:?}",
                result
            ))),
        }
    }

    /// Sends a single statement to the database and returns its result
    pub async fn send_statement(&self, statement: Statement) -> PersonResult<StatementResult> {
        match self.send_command(DatabaseCommand::Statement(statement)).await? {
            DatabaseCommandResponse::Statement(result) => result,
            DatabaseCommandResponse::Control(message) => Err(PersonError::Storage(format!(
                "Unexpected control response to statement: {}",
                message
            ))),
        }
    }

    async fn send_command(&self, command: DatabaseCommand) -> PersonResult<DatabaseCommandResponse> {
        let (resolver, response_receiver) = oneshot::channel::<DatabaseCommandResponse>();

        // Sends the request to the database thread, the database will respond
        //  on the response_receiver once it has finished processing the request
        self.database_sender
            .send_async(DatabaseCommandRequest { resolver, command })
            .await
            .map_err(|_| PersonError::DatabaseUnavailable)?;

        match timeout(DATABASE_RESPONSE_TIMEOUT, response_receiver).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(_)) => Err(PersonError::DatabaseUnavailable),
            Err(_) => Err(PersonError::DatabaseTimeout),
        }
    }
}

fn unexpected_result(result: StatementResult) -> PersonError {
    PersonError::Storage(format!("Unexpected statement result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use crate::database::{database::Database, options::DatabaseOptions};

    use super::*;

    #[tokio::test]
    async fn crud_round_trip() {
        let request_manager = Database::new(DatabaseOptions::default()).run();

        let created = request_manager
            .send_add(NewPerson::new("Grace Hopper", "12-3456789"))
            .await
            .unwrap();

        assert_eq!(
            request_manager.send_get(created.id.clone()).await.unwrap(),
            Some(created.clone())
        );

        let updated = request_manager
            .send_update_number(created.id.clone(), "98-7654321".to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Grace Hopper");
        assert_eq!(updated.number, "98-7654321");

        request_manager.send_remove(created.id.clone()).await.unwrap();

        assert_eq!(request_manager.send_get(created.id).await.unwrap(), None);
        assert_eq!(request_manager.send_count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn dropped_database_is_unavailable() {
        let (database_sender, database_receiver) = flume::unbounded::<DatabaseCommandRequest>();
        drop(database_receiver);

        let request_manager = RequestManager::new(database_sender);

        assert_eq!(
            request_manager.send_list().await,
            Err(PersonError::DatabaseUnavailable)
        );
    }

    #[tokio::test]
    async fn unanswered_request_times_out() {
        let (database_sender, _database_receiver) = flume::unbounded::<DatabaseCommandRequest>();

        let request_manager = RequestManager::new(database_sender);

        assert_eq!(
            request_manager.send_count().await,
            Err(PersonError::DatabaseTimeout)
        );
    }
}
