use crate::{
    consts::consts::EntityId,
    error::PersonResult,
    model::{
        person::{seed_people, NewPerson, Person},
        statement::{Statement, StatementResult},
    },
    validation::ensure_unique_name,
};

use super::id_generator::generate_id;

/// Transient, insertion ordered collection of people
#[derive(Debug, Default)]
pub struct PersonTable {
    pub persons: Vec<Person>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self { persons: vec![] }
    }

    pub fn new_seeded() -> Self {
        Self {
            persons: seed_people(),
        }
    }

    pub fn apply(&mut self, statement: Statement) -> PersonResult<StatementResult> {
        let statement_result = match statement {
            Statement::Add(new_person) => StatementResult::Single(self.add(new_person)?),
            Statement::UpdateNumber(id, number) => {
                StatementResult::GetSingle(self.update_number(&id, number))
            }
            Statement::Remove(id) => {
                self.remove(&id);

                StatementResult::SuccessStatus(format!("Removed record [id: {}]", id))
            }
            Statement::Get(id) => StatementResult::GetSingle(self.get(&id).cloned()),
            Statement::List => StatementResult::List(self.persons.clone()),
            Statement::Count => StatementResult::Count(self.persons.len()),
        };

        Ok(statement_result)
    }

    // Uniqueness is checked against the table as it is when the statement is applied,
    //  the database thread applies one statement at a time so nothing can slip in between
    fn add(&mut self, new_person: NewPerson) -> PersonResult<Person> {
        ensure_unique_name(&self.persons, &new_person.name)?;

        let person = Person::new(generate_id(&self.persons), new_person);

        self.persons.push(person.clone());

        Ok(person)
    }

    fn update_number(&mut self, id: &EntityId, number: String) -> Option<Person> {
        let person = self.persons.iter_mut().find(|person| &person.id == id)?;

        person.number = number;

        Some(person.clone())
    }

    fn remove(&mut self, id: &EntityId) {
        self.persons.retain(|person| &person.id != id);
    }

    fn get(&self, id: &EntityId) -> Option<&Person> {
        self.persons.iter().find(|person| &person.id == id)
    }
}
