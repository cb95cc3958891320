#![allow(unused_imports)]

mod mock_repositories;

pub use mock_repositories::{MockQueryLogRepository, MockQueryLogSink, MockRecordResolver};
