use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "amber", "brisk", "calm", "daring", "eager", "frosty", "gentle", "hasty",
    "keen", "lively", "mellow", "nimble", "patient", "quiet", "rapid", "steady",
];

const NOUNS: &[&str] = &[
    "badger", "crane", "dolphin", "falcon", "heron", "jackal", "lemur", "marten",
    "osprey", "puffin", "raven", "stoat", "tapir", "vole", "weasel", "wren",
];

pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    format!("{}-{}", adjective, noun)
}
