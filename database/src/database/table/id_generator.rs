use crate::{
    consts::consts::{EntityId, FIRST_ENTITY_ID},
    model::person::Person,
};

/// Next id for the memory store: one past the largest numeric id in use.
///
/// Ids that are not decimal numbers are skipped, an empty table starts at `"1"`.
pub fn generate_id(persons: &[Person]) -> EntityId {
    let next = persons
        .iter()
        .filter_map(|person| person.id.as_number())
        .max()
        .map(|max_id| max_id + 1)
        .unwrap_or(FIRST_ENTITY_ID);

    EntityId(next.to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn with_ids(ids: &[&str]) -> Vec<Person> {
        ids.iter()
            .map(|id| Person {
                id: EntityId::from(*id),
                ..Person::new_test()
            })
            .collect()
    }

    #[rstest]
    #[case(&[], "1")]
    #[case(&["1", "2", "3", "4"], "5")]
    #[case(&["7", "2"], "8")]
    #[case(&["1", "3"], "4")]
    #[case(&["abc", "2"], "3")]
    #[case(&["abc"], "1")]
    fn next_id_is_one_past_max(#[case] ids: &[&str], #[case] expected: &str) {
        assert_eq!(generate_id(&with_ids(ids)), EntityId::from(expected));
    }
}
