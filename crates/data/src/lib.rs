// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod errors;
mod in_mem;
mod sled_store;
mod sled_utils;
mod traits;

pub use errors::*;
pub use in_mem::*;
pub use sled_store::*;
pub use traits::*;
