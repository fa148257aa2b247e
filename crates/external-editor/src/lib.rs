mod error;
mod external;

pub use self::{error::Error, external::ExternalEditor};
