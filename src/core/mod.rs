pub mod mapper;
pub mod parser;
pub mod processor;

pub use crate::domain::cdm::EconomicTerms;
pub use crate::domain::model::Record;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
