//! Command implementations

mod eval;
mod init;
mod list;
mod run;

pub use eval::eval;
pub use init::init;
pub use list::list;
pub use run::run;
