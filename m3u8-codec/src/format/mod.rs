pub mod directives;
mod macros;
mod master;
mod master_attrs;
mod media;
mod media_tags;
mod playlist;
mod segment_tags;
mod tags;

pub use master::*;
pub use master_attrs::*;
pub use media::*;
pub use media_tags::*;
pub use playlist::*;
pub use segment_tags::*;
pub use tags::*;
