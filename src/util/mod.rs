pub(crate) mod arith;
pub(crate) mod b;
pub(crate) mod common;
pub(crate) mod escape;
pub(crate) mod t;
