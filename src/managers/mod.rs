// LendHand state managers
// Managers own mutable client state: the signed-in account and the
// per-user bookmark set.

pub mod bookmark_store;
pub mod session_manager;
