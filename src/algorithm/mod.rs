pub mod cancel;
pub mod dijkstra;
pub mod observer;
pub mod path;
pub mod traits;

pub use cancel::CancellationToken;
pub use observer::{NoopObserver, SettleStep, StepObserver, StepRecorder, StepSnapshot};
pub use path::{reconstruct, PathReconstructor};
pub use traits::{
    DistanceTable, PredecessorTable, Route, RunStats, ShortestPathAlgorithm, ShortestPathResult,
    VisitedSet,
};
