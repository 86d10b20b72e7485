use crate::utils::formatting::fold_diacritics;
use serde::Serialize;

/// The fixed crew roster. Every roster member owns one checkbox column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Person {
    Vagner,
    Vasak,
    Tomecek,
    Tichy,
    Stod,
}

impl Person {
    /// Roster in column order.
    pub const ROSTER: [Person; 5] = [
        Person::Vagner,
        Person::Vasak,
        Person::Tomecek,
        Person::Tichy,
        Person::Stod,
    ];

    /// Proper name, also used verbatim as the column header.
    pub fn name(&self) -> &'static str {
        match self {
            Person::Vagner => "Vágner",
            Person::Vasak => "Vašák",
            Person::Tomecek => "Tomeček",
            Person::Tichy => "Tichý",
            Person::Stod => "Štod",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolve a name (case-insensitive, diacritics optional).
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = fold_diacritics(s.trim());
        Person::ROSTER
            .iter()
            .find(|p| fold_diacritics(p.name()) == wanted)
            .copied()
    }
}

/// Per-row assignment flags, one slot per roster member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assignment([bool; 5]);

impl Assignment {
    pub fn get(&self, person: Person) -> bool {
        self.0[person.index()]
    }

    pub fn set(&mut self, person: Person, value: bool) {
        self.0[person.index()] = value;
    }

    /// Builder-style helper, mostly for tests and fixtures.
    pub fn with(mut self, person: Person, value: bool) -> Self {
        self.set(person, value);
        self
    }

    /// Iterate over the assigned people, in roster order.
    pub fn assigned(&self) -> impl Iterator<Item = Person> + '_ {
        Person::ROSTER.into_iter().filter(|p| self.get(*p))
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|v| *v)
    }
}
