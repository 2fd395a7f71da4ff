use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
mod ids;
mod memory;
mod models;
mod repo;

pub use ids::{default_generator, random_id, IdGenerator};
pub use memory::MemoryStore;

#[derive(Clone)]
pub struct Db {
    pub(crate) pool: PgPool,
    pub(crate) next_id: IdGenerator,
}

impl Db {
    pub async fn connect(db_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_url)
            .await
            .with_context(|| format!("Failed to connect to {}", redact(db_url)))?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            next_id: default_generator(),
        }
    }

    pub fn with_id_generator(mut self, next_id: IdGenerator) -> Self {
        self.next_id = next_id;
        self
    }
}

// 日志与错误链中隐藏数据库密码
fn redact(db_url: &str) -> &str {
    match db_url.rsplit_once('@') {
        Some((_, host)) => host,
        None => db_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        assert_eq!(redact("postgres://u:p@db:5432/forum"), "db:5432/forum");
        assert_eq!(redact("postgres://localhost/forum"), "postgres://localhost/forum");
    }
}
