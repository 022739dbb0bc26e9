//! This module simply brings the most common Vermilion functionality under a single namespace, to
//! prevent excessive imports: the [`Color`] object, its [`ColorContext`], the [`Space`] and
//! [`ColorValue`] types used for generic conversion, the [`NameLookup`] trait with its CSV-backed
//! [`NameTable`], and the crate's error type. The individual conversion functions in
//! [`colors`](crate::colors) are not included.

pub use crate::color::{convert, Color};
pub use crate::context::ColorContext;
pub use crate::error::{Error, Result};
pub use crate::names::{NameLookup, NameTable};
pub use crate::space::{ColorValue, Space};
