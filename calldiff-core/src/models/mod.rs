pub mod call;

// re-export for cleaner imports
pub use self::call::{Call, Phaseset, check_call_fields, fmt_call};
