pub mod action;
pub mod resource;
pub mod view_state;

pub use action::UpdateAction;
pub use resource::{Fetcher, PollingResource};
pub use view_state::{StalePolicy, Visible};
