// Session orchestration: the one mutator of container state, owner of the
// logs, and the only caller of the reaction engine and hazard classifier.
pub mod clock;
pub mod lab_session;

pub use clock::LabClock;
pub use lab_session::{
    ContainerSpec, ContainerView, ContentView, LabMode, LabSession, ReactionLogEntry,
    SessionSnapshot,
};
