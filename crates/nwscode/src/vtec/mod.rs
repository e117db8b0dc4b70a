//! Valid Time Event Codes

mod action;
mod flood;
mod hydrologic;
mod phenomenon;
mod primary;
mod significance;

pub use action::{Action, FixedIdentifier};
pub use flood::{FloodSeverity, ImmediateCause, RecordStatus};
pub use hydrologic::Hvtec;
pub use phenomenon::Phenomenon;
pub use primary::Pvtec;
pub use significance::Significance;
