//! Command implementations for simrec

pub mod dispatch;
pub mod ingest;
pub mod list;
pub mod recommend;
pub mod show;
pub mod stats;
