use rand::Rng;
use thiserror::Error;

const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Topic table: lowercase topic name to its associated words. Lookup
/// normalizes the incoming topic to lowercase; the fallback message keeps the
/// caller's original casing.
pub const TOPIC_TABLE: &[(&str, &[&str])] = &[
    (
        "science",
        &["Physics", "Chemistry", "Biology", "Astronomy", "Genetics", "Quantum Mechanics"],
    ),
    (
        "technology",
        &["Artificial Intelligence", "Blockchain", "Cloud Computing", "Cybersecurity", "IoT", "Robotics"],
    ),
    (
        "art",
        &["Impressionism", "Surrealism", "Cubism", "Renaissance", "Abstract", "Baroque"],
    ),
    (
        "history",
        &["Ancient Rome", "World War II", "Industrial Revolution", "The Cold War", "The Renaissance", "The Middle Ages"],
    ),
    (
        "nature",
        &["Forest", "Ocean", "Mountain", "Desert", "Rainforest", "Savanna"],
    ),
];

/// Known flight destinations.
pub const DESTINATIONS: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix",
    "Philadelphia", "San Antonio", "San Diego", "Dallas", "San Jose",
    "Austin", "Seattle", "Denver", "Boston", "Miami",
    "Atlanta", "Las Vegas", "Portland", "Detroit", "Minneapolis",
    "London", "Paris", "Berlin", "Madrid", "Rome",
    "Amsterdam", "Vienna", "Prague", "Budapest", "Warsaw",
    "Lisbon", "Dublin", "Brussels", "Copenhagen", "Stockholm",
    "Oslo", "Helsinki", "Zurich", "Geneva", "Munich",
    "Barcelona", "Milan", "Venice", "Florence", "Athens",
    "Istanbul", "Moscow", "Saint Petersburg", "Kyiv", "Bucharest",
    "Tokyo", "Osaka", "Kyoto", "Seoul", "Beijing",
    "Shanghai", "Hong Kong", "Taipei", "Singapore", "Bangkok",
    "Kuala Lumpur", "Jakarta", "Manila", "Hanoi", "Mumbai",
    "Delhi", "Bangalore", "Dubai", "Abu Dhabi", "Doha",
    "Tel Aviv", "Cairo", "Casablanca", "Nairobi", "Cape Town",
    "Johannesburg", "Lagos", "Accra", "Addis Ababa", "Marrakesh",
    "Sydney", "Melbourne", "Brisbane", "Perth", "Auckland",
    "Wellington", "Toronto", "Vancouver", "Montreal", "Mexico City",
    "Cancun", "Havana", "San Juan", "Bogota", "Lima",
    "Santiago", "Buenos Aires", "Sao Paulo", "Rio de Janeiro", "Quito",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Min value cannot be greater than Max value")]
    InvalidRange,
    #[error("Length cannot be negative")]
    NegativeLength,
}

/// Stateless random value generator. Safe to share across requests; the only
/// state it touches is the thread-local RNG and the read-only tables above.
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Uniformly-distributed integer in `[min, max]` inclusive.
    pub fn generate_integer(&self, min: i64, max: i64) -> Result<i64, GeneratorError> {
        if min > max {
            return Err(GeneratorError::InvalidRange);
        }
        Ok(rand::thread_rng().gen_range(min..=max))
    }

    /// Random version-4 UUID in RFC 4122 textual form (lowercase, hyphenated).
    pub fn generate_guid(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Random string of exactly `length` characters drawn from the
    /// alphanumeric set, extended with punctuation when `special` is set.
    pub fn generate_string(&self, length: i64, special: bool) -> Result<String, GeneratorError> {
        if length < 0 {
            return Err(GeneratorError::NegativeLength);
        }
        Ok(self.random_chars(length as usize, special))
    }

    /// Word associated with `topic` (case-insensitive lookup), or a fallback
    /// message carrying a fresh 8-character random word. The fallback embeds
    /// the topic exactly as the caller wrote it.
    pub fn generate_from_topic(&self, topic: &str) -> String {
        let normalized = topic.to_lowercase();
        if let Some((_, words)) = TOPIC_TABLE.iter().find(|(name, _)| *name == normalized) {
            let index = rand::thread_rng().gen_range(0..words.len());
            return words[index].to_string();
        }

        format!(
            "No specific data for topic '{}'. Random word: {}",
            topic,
            self.random_chars(8, false)
        )
    }

    /// Random city from the destination list.
    pub fn generate_destination(&self) -> &'static str {
        let index = rand::thread_rng().gen_range(0..DESTINATIONS.len());
        DESTINATIONS[index]
    }

    fn random_chars(&self, length: usize, special: bool) -> String {
        let charset = if special {
            [ALPHANUMERIC, SPECIAL].concat()
        } else {
            ALPHANUMERIC.to_string()
        };
        let bytes = charset.as_bytes();

        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| bytes[rng.gen_range(0..bytes.len())] as char)
            .collect()
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}
