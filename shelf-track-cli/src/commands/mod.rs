//! One module per menu option.

pub(crate) mod add;
pub(crate) mod delete;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod update;
