mod feed_snapshot;

pub use feed_snapshot::*;
