pub mod dataset;
pub mod error;
pub mod models;

pub use dataset::Dataset;
pub use error::Error;
pub use models::Article;

pub type Result<T> = std::result::Result<T, Error>;
