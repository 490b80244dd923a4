//! SQLite host binding
//!
//! Registers every function of a [`FunctionRegistry`] on a `rusqlite`
//! connection so SQL can call them by name.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{Connection, Error};

use crate::core::{ScalarValue, UDF0003, UdfError};
use crate::registry::{FunctionRegistry, ScalarFunction, dispatch};

/// Register all functions of `registry` on `conn`.
///
/// Names get the registry's configured prefix. Functions are registered as
/// deterministic UTF-8 functions with their exact signature arity.
pub fn register_functions(conn: &Connection, registry: &FunctionRegistry) -> rusqlite::Result<()> {
    for name in registry.list_functions() {
        let Some(evaluator) = registry.get_function(name) else {
            continue;
        };
        let sql_name = registry.config().registered_name(name);
        let arity = evaluator.metadata().signature.arity() as i32;

        let mut flags = FunctionFlags::SQLITE_UTF8;
        if evaluator.metadata().deterministic {
            flags |= FunctionFlags::SQLITE_DETERMINISTIC;
        }

        log::debug!("registering SQLite function {}/{}", sql_name, arity);

        let evaluator = AssertUnwindSafe(Arc::clone(evaluator));
        let config = registry.config().clone();

        conn.create_scalar_function(sql_name.as_str(), arity, flags, move |ctx| {
            let args = read_args(ctx)?;
            let evaluator: &Arc<dyn ScalarFunction> = &evaluator;
            dispatch(evaluator.as_ref(), &args, &config)
                .map(to_sql_value)
                .map_err(|e| Error::UserFunctionError(Box::new(e)))
        })?;
    }

    Ok(())
}

fn read_args(ctx: &Context<'_>) -> rusqlite::Result<Vec<ScalarValue>> {
    (0..ctx.len())
        .map(|i| from_sql_value(ctx.get_raw(i), i))
        .collect()
}

/// Project an SQLite argument into the scalar union. SQLite has a single
/// integer and a single float storage class, so they map to the 64-bit
/// variants.
pub fn from_sql_value(value: ValueRef<'_>, position: usize) -> rusqlite::Result<ScalarValue> {
    match value {
        ValueRef::Null => Ok(ScalarValue::Null),
        ValueRef::Integer(i) => Ok(ScalarValue::BigInt(i)),
        ValueRef::Real(f) => Ok(ScalarValue::Double(f)),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(ScalarValue::from)
            .map_err(|e| Error::UserFunctionError(Box::new(e))),
        ValueRef::Blob(_) => Err(Error::UserFunctionError(Box::new(
            UdfError::argument_error(
                UDF0003,
                format!("Argument {} expects a scalar, got blob", position + 1),
            )
            .at_position(position),
        ))),
    }
}

/// Project a scalar result onto an SQLite value. Booleans become 0/1.
pub fn to_sql_value(value: ScalarValue) -> Value {
    match value {
        ScalarValue::Null => Value::Null,
        ScalarValue::Text(s) => Value::Text(s),
        ScalarValue::Boolean(b) => Value::Integer(i64::from(b)),
        ScalarValue::Int(i) => Value::Integer(i64::from(i)),
        ScalarValue::BigInt(i) => Value::Integer(i),
        ScalarValue::Real(f) => Value::Real(f64::from(f)),
        ScalarValue::Double(f) => Value::Real(f),
    }
}
