//! Host engine bindings
//!
//! A binding projects [`ScalarValue`](crate::core::ScalarValue) tags onto the
//! host's own value representation and registers functions under their
//! configured names.

#[cfg(feature = "sqlite")]
pub mod sqlite;
