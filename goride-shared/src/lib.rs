pub mod duration;
pub mod money;
pub mod pii;

pub use duration::TripDuration;
pub use money::format_inr;
pub use pii::Masked;
