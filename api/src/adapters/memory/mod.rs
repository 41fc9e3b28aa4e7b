//! In-memory stores

pub mod review_repo;

pub use review_repo::MemoryReviewRepository;
