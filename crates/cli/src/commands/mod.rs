pub mod filter;
pub mod parse;
pub mod session;
pub mod tags;
pub mod util;

pub use filter::*;
pub use parse::*;
pub use session::*;
pub use tags::*;
pub use util::*;
