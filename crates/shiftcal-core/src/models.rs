pub mod anchor;
pub mod work_state;

pub use anchor::AnchorDate;
pub use work_state::{ColorToken, WorkState, CYCLE};
