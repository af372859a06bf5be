//! Checks applied to incoming person data before a write is accepted.
//!
//! Everything here is pure, the store decides which checks apply:
//! the memory store enforces name uniqueness while the document store
//! enforces [`PersonSchema`].

use crate::{
    error::{Field, PersonError, PersonResult},
    model::person::{NewPerson, NumberUpdate, Person, PersonFields},
};

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Name is checked before number, an empty string counts as missing
pub fn require_fields(fields: PersonFields) -> PersonResult<NewPerson> {
    let PersonFields { name, number } = fields;

    let name = present(name).ok_or(PersonError::MissingField(Field::Name))?;
    let number = present(number).ok_or(PersonError::MissingField(Field::Number))?;

    Ok(NewPerson { name, number })
}

pub fn require_number(update: NumberUpdate) -> PersonResult<String> {
    present(update.number).ok_or(PersonError::MissingField(Field::Number))
}

pub fn ensure_unique_name(persons: &[Person], name: &str) -> PersonResult<()> {
    if persons.iter().any(|person| person.name == name) {
        return Err(PersonError::DuplicateName);
    }

    Ok(())
}

/// Field constraints enforced on every write to the document store
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSchema {
    pub name_min_length: usize,
    pub number_min_length: usize,
}

impl Default for PersonSchema {
    fn default() -> Self {
        Self {
            name_min_length: 3,
            number_min_length: 8,
        }
    }
}

impl PersonSchema {
    /// Collects one message per violated constraint across all fields
    pub fn validate(&self, person: &NewPerson) -> PersonResult<()> {
        let mut messages = self.name_violations(&person.name);
        messages.extend(self.number_violations(&person.number));

        Self::into_result(messages)
    }

    pub fn validate_number(&self, number: &str) -> PersonResult<()> {
        Self::into_result(self.number_violations(number))
    }

    fn into_result(messages: Vec<String>) -> PersonResult<()> {
        if messages.is_empty() {
            Ok(())
        } else {
            Err(PersonError::ValidationFailure(messages))
        }
    }

    fn name_violations(&self, name: &str) -> Vec<String> {
        let mut messages = vec![];

        if name.chars().count() < self.name_min_length {
            messages.push(format!(
                "name: `{}` is shorter than the minimum allowed length ({})",
                name, self.name_min_length
            ));
        }

        messages
    }

    fn number_violations(&self, number: &str) -> Vec<String> {
        let mut messages = vec![];

        if number.chars().count() < self.number_min_length {
            messages.push(format!(
                "number: `{}` is shorter than the minimum allowed length ({})",
                number, self.number_min_length
            ));
        }

        if !is_phone_number(number) {
            messages.push(format!(
                "number: `{}` is not a valid phone number, expected XX-XXXXXX or XXX-XXXXX",
                number
            ));
        }

        messages
    }
}

/// Two or three digits, a hyphen, then at least one more digit
fn is_phone_number(number: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    match number.split_once('-') {
        Some((prefix, rest)) => {
            (2..=3).contains(&prefix.len()) && all_digits(prefix) && all_digits(rest)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    mod presence {
        use super::*;

        #[rstest]
        #[case(PersonFields { name: None, number: Some("040-123456".into()) }, Field::Name)]
        #[case(PersonFields { name: Some("".into()), number: Some("040-123456".into()) }, Field::Name)]
        #[case(PersonFields { name: Some("Ada".into()), number: None }, Field::Number)]
        #[case(PersonFields { name: Some("Ada".into()), number: Some("".into()) }, Field::Number)]
        #[case(PersonFields { name: None, number: None }, Field::Name)]
        fn missing_fields_are_reported(#[case] fields: PersonFields, #[case] field: Field) {
            assert_eq!(require_fields(fields), Err(PersonError::MissingField(field)));
        }

        #[test]
        fn complete_fields_pass() {
            let new_person = require_fields(PersonFields::new("Ada", "040-123456")).unwrap();

            assert_eq!(new_person, NewPerson::new("Ada", "040-123456"));
        }

        #[test]
        fn update_requires_number() {
            assert_eq!(
                require_number(NumberUpdate { number: None }),
                Err(PersonError::MissingField(Field::Number))
            );
            assert_eq!(
                require_number(NumberUpdate {
                    number: Some("12-345678".into())
                }),
                Ok("12-345678".to_string())
            );
        }
    }

    mod uniqueness {
        use super::*;

        #[test]
        fn duplicate_name_is_rejected() {
            let persons = vec![Person::new_test()];

            assert_eq!(
                ensure_unique_name(&persons, "Arto Hellas"),
                Err(PersonError::DuplicateName)
            );
        }

        #[test]
        fn names_compare_exactly() {
            let persons = vec![Person::new_test()];

            assert_eq!(ensure_unique_name(&persons, "arto hellas"), Ok(()));
            assert_eq!(ensure_unique_name(&[], "Arto Hellas"), Ok(()));
        }
    }

    mod schema {
        use super::*;

        #[rstest]
        #[case("09-1234556")]
        #[case("040-22334455")]
        #[case("12-12345")]
        fn accepts_valid_numbers(#[case] number: &str) {
            let schema = PersonSchema::default();

            assert_eq!(schema.validate(&NewPerson::new("Ada", number)), Ok(()));
        }

        #[rstest]
        #[case("0912-34556")]
        #[case("1-22334455")]
        #[case("10-22-334455")]
        #[case("1234556789")]
        fn rejects_malformed_numbers(#[case] number: &str) {
            let schema = PersonSchema::default();

            assert!(matches!(
                schema.validate(&NewPerson::new("Ada", number)),
                Err(PersonError::ValidationFailure(_))
            ));
        }

        #[test]
        fn collects_messages_across_fields() {
            let schema = PersonSchema::default();

            let err = schema
                .validate(&NewPerson::new("Al", "12-34"))
                .unwrap_err();

            let PersonError::ValidationFailure(messages) = err.clone() else {
                panic!("expected a validation failure, got {:?}", err);
            };

            assert_eq!(messages.len(), 2);
            assert!(messages[0].starts_with("name:"));
            assert!(messages[1].starts_with("number:"));
            assert_eq!(err.to_string(), messages.join(", "));
        }

        #[test]
        fn number_only_validation_ignores_name() {
            let schema = PersonSchema::default();

            assert_eq!(schema.validate_number("040-123456"), Ok(()));
            assert!(schema.validate_number("040").is_err());
        }
    }
}
