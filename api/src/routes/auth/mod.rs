//! Authentication endpoints
//!
//! Registration, login and refresh are public; both logout variants require
//! a valid access token.

pub mod login;
pub mod logout;
pub mod logout_all;
pub mod refresh;
pub mod register;
