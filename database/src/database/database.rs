use std::thread;

use crate::{
    error::PersonResult,
    model::statement::{Statement, StatementResult},
};

use super::{
    commands::{DatabaseCommand, DatabaseCommandRequest, DatabaseCommandResponse},
    options::DatabaseOptions,
    request_manager::RequestManager,
    table::table::PersonTable,
};

/// Owns the in-memory person table, every read and write goes through the database thread
pub struct Database {
    person_table: PersonTable,
}

impl Database {
    pub fn new(options: DatabaseOptions) -> Self {
        let person_table = match options.seed {
            true => PersonTable::new_seeded(),
            false => PersonTable::new(),
        };

        Self { person_table }
    }

    pub fn new_test() -> Self {
        Self::new(DatabaseOptions::new_test())
    }

    /// Moves the database onto its own thread and returns a handle for sending it requests
    pub fn run(self) -> RequestManager {
        let (database_sender, database_receiver) = flume::unbounded::<DatabaseCommandRequest>();

        thread::spawn(move || self.start_thread(database_receiver));

        RequestManager::new(database_sender)
    }

    fn start_thread(mut self, database_receiver: flume::Receiver<DatabaseCommandRequest>) {
        log::info!(
            "📀 Database started [Rows: {}]",
            self.person_table.persons.len()
        );

        // Process incoming requests from the channel, exits once every sender has been dropped
        while let Ok(DatabaseCommandRequest { command, resolver }) = database_receiver.recv() {
            log::debug!("Received command: {}", command.log_format());

            let response = match command {
                DatabaseCommand::Statement(statement) => {
                    DatabaseCommandResponse::Statement(self.process_statement(statement))
                }
                DatabaseCommand::Shutdown => {
                    let _ = resolver.send(DatabaseCommandResponse::Control(
                        "Successfully shutdown database".to_string(),
                    ));

                    log::info!("Database shutdown");

                    return;
                }
            };

            // The requester may have given up waiting, there is nobody left to tell
            let _ = resolver.send(response);
        }

        log::info!("Database stopped, all request managers dropped");
    }

    pub fn process_statement(&mut self, statement: Statement) -> PersonResult<StatementResult> {
        let is_mutation = statement.is_mutation();

        let result = self.person_table.apply(statement);

        if is_mutation {
            match &result {
                Ok(_) => log::debug!("✅ Applied mutation"),
                Err(err) => log::debug!("⚠️  Rejected mutation: {}", err),
            }
        }

        result
    }
}
