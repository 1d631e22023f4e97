pub mod clock;
pub mod pointer;

pub use clock::Clock;
pub use pointer::PointerState;
