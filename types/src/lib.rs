mod error;
pub mod procurement;

pub use error::{Error, Result};
pub use procurement::{Icon, ModuleDescriptor, ProcurementModule};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
