use alloc::string::String;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ModifierData;

#[cfg(feature = "std")]
pub(crate) type DataMap<H> = HashMap<String, ModifierData<H>>;
#[cfg(not(feature = "std"))]
pub(crate) type DataMap<H> = BTreeMap<String, ModifierData<H>>;
