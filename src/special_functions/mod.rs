//! Custom implementations of special functions not
//! provided by the standard lib.

mod legendre;

pub use legendre::*;
