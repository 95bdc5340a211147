// Dashboard: mock fixtures, page composition and the tab endpoints.
// No scoring happens here; see fixtures.rs for where every number comes from.

pub mod compose;
pub mod fixtures;
pub mod handlers;
pub mod skill_gap;
