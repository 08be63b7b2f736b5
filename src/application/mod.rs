// Application layer - the session that owns the ledger and the views the
// presentation layer renders from it.

pub mod error;
pub mod reporting;
pub mod session;

pub use error::*;
pub use reporting::*;
pub use session::*;
