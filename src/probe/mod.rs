pub mod check;
pub mod result;

pub use check::{PROBE_TIMEOUT, check_endpoint, extract_domain};
pub use result::ProbeResult;
