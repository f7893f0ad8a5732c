pub mod fixture_source;
pub mod traits;

pub use fixture_source::FixtureSource;
pub use traits::DataSource;
