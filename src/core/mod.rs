pub mod clock;
pub mod planner;
pub mod shared;
pub mod summary;

pub use clock::{Clock, FixedClock, SystemClock};
pub use planner::{month_bounds, ExpensePlanner};
pub use shared::SharedPlanner;
pub use summary::{CategoryBudgetStatus, ExpenseSummary};
