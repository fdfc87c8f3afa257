//! Word pools and small builders for synthetic ticket text.

use rand::seq::IndexedRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carla", "Dmitri", "Elena", "Farah", "Gustavo", "Hana", "Ivan", "Jade",
    "Kofi", "Lena", "Marco", "Nadia", "Omar", "Priya", "Quinn", "Rosa", "Samir", "Tessa",
    "Uma", "Victor", "Wen", "Ximena", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Baptiste", "Castillo", "Dubois", "Eriksen", "Fontaine", "Garcia", "Hughes",
    "Ibarra", "Jensen", "Kowalski", "Lindqvist", "Moreno", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Schmidt", "Tanaka", "Urquhart", "Varga", "Whitaker", "Yilmaz",
    "Zielinski",
];

const LOREM: &[&str] = &[
    "account", "after", "again", "agent", "already", "answer", "app", "attach", "before",
    "billing", "broken", "browser", "cannot", "card", "change", "charge", "checkout", "client",
    "confirm", "connect", "crash", "customer", "dashboard", "data", "delay", "delivery",
    "device", "download", "email", "error", "export", "failed", "feature", "file", "form",
    "help", "invoice", "issue", "item", "login", "message", "missing", "mobile", "network",
    "note", "notice", "order", "page", "password", "payment", "phone", "please", "problem",
    "profile", "refund", "reset", "report", "request", "screen", "search", "second",
    "settings", "shipping", "slow", "still", "support", "sync", "system", "ticket", "today",
    "update", "upgrade", "upload", "user", "wait", "website", "week", "wrong",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or("ticket")
}

/// A "First Last" display name.
pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// A lowercase `first.lastNN@example.tld` address.
pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}{}@{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase(),
        rng.random_range(1..100),
        pick(rng, EMAIL_DOMAINS),
    )
}

/// `count` space-separated words with the first one capitalised.
pub fn phrase<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    let mut words: Vec<String> = (0..count.max(1))
        .map(|_| pick(rng, LOREM).to_string())
        .collect();
    if let Some(first) = words.first_mut() {
        *first = capitalize(first);
    }
    words.join(" ")
}

/// A sentence of 4 to 10 words terminated by a period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.random_range(4..=10);
    format!("{}.", phrase(rng, count))
}

/// `sentences` sentences joined by single spaces.
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize) -> String {
    (0..sentences.max(1))
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn phrase_has_requested_word_count_and_no_period() {
        let mut rng = StdRng::seed_from_u64(7);
        let subject = phrase(&mut rng, 4);
        assert_eq!(subject.split(' ').count(), 4);
        assert!(!subject.contains('.'));
        assert!(subject.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn paragraph_has_three_sentences() {
        let mut rng = StdRng::seed_from_u64(11);
        let text = paragraph(&mut rng, 3);
        assert_eq!(text.matches('.').count(), 3);
        assert!(text.ends_with('.'));
    }

    #[test]
    fn email_has_local_part_and_example_domain() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let address = email(&mut rng);
            let (local, domain) = address.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.starts_with("example."));
        }
    }

    #[test]
    fn person_name_is_two_words() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(person_name(&mut rng).split(' ').count(), 2);
    }
}
