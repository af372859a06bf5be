use crate::{
    error::PersonResult,
    model::statement::{Statement, StatementResult},
};

/// Database commands are how we interact with the database thread
///
/// Almost everything is a statement (add, update, remove, etc), the only control command
/// is a shutdown which stops the thread once every earlier command has been answered.
#[derive(Debug)]
pub enum DatabaseCommand {
    Statement(Statement),
    Shutdown,
}

impl DatabaseCommand {
    /// Prints complex logs in a more readable format
    pub fn log_format(&self) -> String {
        match self {
            DatabaseCommand::Statement(Statement::Add(_)) => format!("{:#?}", self),
            _ => format!("{:?}", self),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DatabaseCommandResponse {
    Statement(PersonResult<StatementResult>),
    /// Successfully performed the control command
    Control(String),
}

pub struct DatabaseCommandRequest {
    pub resolver: oneshot::Sender<DatabaseCommandResponse>,
    pub command: DatabaseCommand,
}
