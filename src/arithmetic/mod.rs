//! Digit-level arithmetic over the ascii digit buffer
//!
//! These routines own the carry/borrow loops; the operator impls in
//! the `impl_ops*` modules are thin wrappers around them. All of them
//! leave the left operand canonical (trimmed) on success.

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
