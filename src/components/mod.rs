mod button;
mod progress;

pub use button::{Button, ButtonColor, ButtonId, ButtonManager};
pub use progress::{Progress, TOTAL_STEPS};
