pub mod config;
pub mod error;
pub mod provider;
pub mod query;
pub mod types;

pub use config::AppConfig;
pub use error::Error;
pub use provider::HeadlineProvider;
pub use query::{country_name, Category, Country, HeadlineQuery, COUNTRIES};
pub use types::{Article, ArticleSource, HeadlinesResponse, RawHeadlines};

pub type Result<T> = std::result::Result<T, Error>;
