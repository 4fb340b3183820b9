//! Domain types: the status catalog and the homework feed.

mod homework;
mod status;

pub use homework::{HomeworkEntry, StatusFeed};
pub use status::{render_status, ReviewStatus};
