// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod random;
pub mod repos;

// 乱数関連
pub use random::{FixedRandom, SequenceRandom};

// リポジトリ関連
pub use repos::{FailingSlugRepo, InMemorySlugRepo};
