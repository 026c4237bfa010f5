//! Testing utilities and harness for listview-core

pub mod assertions;
pub mod host;
pub mod rows;
pub mod rule;

pub use assertions::*;
pub use host::{HostError, HostNode, TestHost};
pub use rows::{label_rows, label_text, sectioned_rows, TestRow, HEADER, LABEL};
pub use rule::ListViewTestRule;

pub mod prelude {
    pub use crate::assertions;
    pub use crate::host::{HostError, TestHost};
    pub use crate::rows::{label_rows, sectioned_rows, TestRow, HEADER, LABEL};
    pub use crate::rule::ListViewTestRule;
    pub use listview_core::prelude::*;
}
