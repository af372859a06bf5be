use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

use super::person::{NewPerson, Person};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Statement {
    Add(NewPerson),
    UpdateNumber(EntityId, String),
    Remove(EntityId),
    Get(EntityId),
    /// Returns a list of Person
    List,
    Count,
}

impl Statement {
    pub fn is_mutation(&self) -> bool {
        match self {
            Statement::Add(_) | Statement::Remove(_) | Statement::UpdateNumber(_, _) => true,
            Statement::List | Statement::Count | Statement::Get(_) => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum StatementResult {
    /// Used for database status messages
    SuccessStatus(String),
    Single(Person),
    GetSingle(Option<Person>),
    List(Vec<Person>),
    Count(usize),
}
