pub mod ledger_state;
pub mod pool;
pub mod reward_pool;

pub use ledger_state::*;
pub use pool::*;
pub use reward_pool::*;
