pub use mapcfg_types::prelude::*;
pub use mapcfg_types::RawConfig;

// vim: ts=4
