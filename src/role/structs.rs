//! The structs
//!
/// The roles that can be expected; these are the names `INFO` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Master,
    Slave,
}
/// The expected role. `expected` None disables the role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RolePolicy {
    pub expected: Option<Role>,
}
