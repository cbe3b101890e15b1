use crate::domain::model::Person;
use crate::utils::error::{PlannerError, Result};
use std::collections::BTreeMap;

/// Owns every registered person, ordered by SSN.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    persons: BTreeMap<String, Person>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person; an SSN already present is rejected, never overwritten.
    pub fn insert(&mut self, person: Person) -> Result<()> {
        if self.persons.contains_key(&person.ssn) {
            return Err(PlannerError::record(&person.ssn, "duplicate SSN"));
        }
        self.persons.insert(person.ssn.clone(), person);
        Ok(())
    }

    pub fn get(&self, ssn: &str) -> Option<&Person> {
        self.persons.get(ssn)
    }

    pub(crate) fn get_mut(&mut self, ssn: &str) -> Option<&mut Person> {
        self.persons.get_mut(ssn)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub fn allocated_count(&self) -> usize {
        self.persons.values().filter(|p| p.is_allocated()).count()
    }

    pub(crate) fn clear_allocations(&mut self) {
        self.persons.values_mut().for_each(Person::clear_allocated);
    }
}
