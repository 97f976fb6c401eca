mod ledger;
mod money;
mod operation;
mod time;

pub use ledger::*;
pub use money::*;
pub use operation::*;
pub use time::*;
