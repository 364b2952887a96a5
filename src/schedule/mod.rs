pub mod reference;
pub mod window;

pub use window::{last_tuesday, next_tuesday, WeekWindow};
