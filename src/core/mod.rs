pub mod celebration;
pub mod constants;
pub mod graph;
pub mod lifecycle;
pub mod melody;
pub mod particles;
pub mod schedule;

pub use celebration::*;
pub use graph::LazyGraph;
pub use lifecycle::View;
pub use melody::*;
pub use particles::*;
pub use schedule::Scheduler;
