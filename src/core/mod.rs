pub mod forms;
pub mod import;

pub use crate::domain::model::{C2rmfId, FormData, ObjectGroupCleanedData, PartialObjectGroup};
pub use crate::domain::ports::{ConfigProvider, ObjectGroupFetcher};
pub use crate::utils::error::Result;
