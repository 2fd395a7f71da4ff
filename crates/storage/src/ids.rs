use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;

pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

const ID_LEN: usize = 16;

pub fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

pub fn default_generator() -> IdGenerator {
    Arc::new(random_id)
}
