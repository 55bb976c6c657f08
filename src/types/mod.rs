pub mod challenge;
pub mod decision;
pub mod identity;
pub mod route;
pub mod session;
