//! Domain-level frontend features (auth, theme, users) and their shared
//! logic. Routes import these modules to keep view code focused while keeping
//! security and API handling in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod theme;
pub(crate) mod users;
