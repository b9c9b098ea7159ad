pub mod error;
pub mod records;
pub mod role;
pub mod session;

pub use error::{CoreError, Result};
pub use records::{PatientSummary, VaccineRecord};
pub use role::Role;
pub use session::{Credentials, Session};
