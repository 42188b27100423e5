pub mod diff;
pub mod label_type;
pub mod metrics;
pub mod names;
pub mod report;

pub use diff::*;
pub use label_type::*;
pub use metrics::*;
pub use names::*;
pub use report::*;
