//! Password hashing and the opaque session tokens carried by the
//! `fertiflow.sid` cookie.

pub mod password;
pub mod session;
