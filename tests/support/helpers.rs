// tests/support/helpers.rs
use std::collections::HashSet;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// `RUST_LOG` を尊重してトレーシングを初期化する（複数回呼んでも安全）
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "warn,slugger=debug".to_string());

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

pub fn taken(slugs: &[&str]) -> HashSet<String> {
    slugs.iter().map(ToString::to_string).collect()
}

pub fn is_fallback_slug(slug: &str) -> bool {
    slug.len() == 6 && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
