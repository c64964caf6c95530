//! Named checks and the groups they are evaluated in.

mod check;
mod group;

pub use check::{Check, MatchMode, RegexFlag, RegexFlags};
pub use group::CheckGroup;
