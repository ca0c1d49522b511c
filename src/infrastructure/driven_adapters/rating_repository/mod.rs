//! Rating Repository Adapters

mod postgres;

pub use postgres::PostgresRatingRepository;
