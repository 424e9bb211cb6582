//! Procedural pixel content: the animated gradient background and the moving markers.

pub(crate) mod ants;
pub(crate) mod gradient;
