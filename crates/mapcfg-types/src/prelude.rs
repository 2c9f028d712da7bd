pub use crate::error::{Error, McResult};
pub use crate::value::{EnumConstant, RawValue, SettingValue};

// vim: ts=4
