pub mod ledger;
pub mod scenario;

pub use ledger::{Ledger, RpcLedger};
pub use scenario::ScenarioRunner;
