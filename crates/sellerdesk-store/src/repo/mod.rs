//! Repository layer
//!
//! SQLite implementations of the core DAO traits, plus the row mapping and
//! per-query department cache used to rebuild joined results.

pub mod department_cache;
pub mod department_repo;
pub mod factory;
pub mod mapper;
pub mod row;
pub mod seller_repo;

pub use department_cache::DepartmentCache;
pub use department_repo::DepartmentDaoSqlite;
pub use factory::DaoFactory;
pub use row::NamedRow;
pub use seller_repo::SellerDaoSqlite;

use std::time::Instant;

/// Milliseconds since `start`, as logged in `duration_ms`
pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_ms_counts_whole_milliseconds() {
        let start = Instant::now() - Duration::from_millis(25);
        assert!(elapsed_ms(start) >= 25);
    }
}
