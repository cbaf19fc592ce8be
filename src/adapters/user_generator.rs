use rand::Rng;
use std::sync::Arc;

use crate::adapters::random_generator::RandomGenerator;
use crate::domain::{Address, User};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "David", "Eve", "Fiona", "George", "Hannah", "Ian", "Julia",
    "Kevin", "Laura", "Michael", "Nora", "Oliver", "Penelope", "Quentin", "Rachel", "Steven", "Tina",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
    "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin",
];

const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio", "San Diego", "Dallas", "San Jose",
    "London", "Paris", "Tokyo", "Berlin", "Rome", "Madrid", "Moscow", "Beijing", "Sydney", "Rio de Janeiro",
];

const COUNTRIES: &[&str] = &[
    "USA", "Canada", "UK", "France", "Germany", "Italy", "Spain", "Russia", "China", "Japan", "Australia", "Brazil",
];

const STREETS: &[&str] = &["Main St", "Oak Ave", "Pine Ln", "Maple Dr", "Elm St", "Cedar Rd"];

/// Builds synthetic user records from the static name tables and the value
/// generator. Cannot fail: every range it draws from is valid.
pub struct UserGenerator {
    random: Arc<RandomGenerator>,
}

impl UserGenerator {
    pub fn new(random: Arc<RandomGenerator>) -> Self {
        Self { random }
    }

    pub fn random_user(&self) -> User {
        let first_name = pick(FIRST_NAMES).to_string();
        let last_name = pick(LAST_NAMES).to_string();
        let email = format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );
        // Ranges below are constant and valid, so the generator cannot error.
        let age = self.random.generate_integer(18, 80).unwrap_or(18);

        User {
            first_name,
            last_name,
            age,
            email,
            address: self.random_address(),
        }
    }

    fn random_address(&self) -> Address {
        Address {
            street: pick(STREETS).to_string(),
            house_number: self.random.generate_integer(1, 999).unwrap_or(1),
            zip_code: self.random.generate_string(5, false).unwrap_or_default(),
            city: pick(CITIES).to_string(),
            country: pick(COUNTRIES).to_string(),
        }
    }
}

fn pick(entries: &'static [&'static str]) -> &'static str {
    let index = rand::thread_rng().gen_range(0..entries.len());
    entries[index]
}
