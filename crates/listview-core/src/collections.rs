//! Map type for widget and kind lookups: `FxHashMap` unless the `std-hash`
//! feature selects the standard hasher.

#[cfg(not(feature = "std-hash"))]
pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(feature = "std-hash")]
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V>;
