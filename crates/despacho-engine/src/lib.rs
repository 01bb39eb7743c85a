//! `despacho-engine` implements the listado projection, same-expediente
//! consolidation and recipient distribution that drive every export.
//!
//! The split functions are pure; cross-invocation continuation state lives
//! in [`session::DistributionSession`], which owns one loaded dataset and
//! its cursor and is replaced wholesale on reload.

pub mod consolidate;
pub mod distribute;
pub mod listado;
pub mod session;
pub mod stats;

pub use consolidate::merge_by_expediente;
pub use distribute::{
    split_continuation, split_initial, ContinuationSplit, DistributeError, InitialSplit,
    PER_LIST_DEFAULT,
};
pub use listado::{build_listados, ListadoError};
pub use session::{DistributionSession, SessionError, SplitCursor};
pub use stats::{summarize, DatasetSummary};
