use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
    pub number: String,
}

impl Person {
    pub fn new(id: EntityId, new_person: NewPerson) -> Self {
        Person {
            id,
            name: new_person.name,
            number: new_person.number,
        }
    }

    pub fn new_test() -> Self {
        Person {
            id: EntityId("1".to_string()),
            name: "Arto Hellas".to_string(),
            number: "040-123456".to_string(),
        }
    }
}

/// Raw body of a create request, either field may be missing
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PersonFields {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonFields {
    pub fn new(name: &str, number: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            number: Some(number.to_string()),
        }
    }
}

/// Raw body of an update request, only the number can be changed
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NumberUpdate {
    pub number: Option<String>,
}

/// Create input that passed the presence checks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub number: String,
}

impl NewPerson {
    pub fn new(name: &str, number: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
        }
    }
}

/// People the memory store starts with
pub fn seed_people() -> Vec<Person> {
    [
        ("1", "Arto Hellas", "040-123456"),
        ("2", "Ada Lovelace", "39-44-5323523"),
        ("3", "Dan Abramov", "12-43-234345"),
        ("4", "Mary Poppendieck", "39-23-6423122"),
    ]
    .into_iter()
    .map(|(id, name, number)| Person {
        id: EntityId::from(id),
        name: name.to_string(),
        number: number.to_string(),
    })
    .collect()
}
