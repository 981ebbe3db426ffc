pub mod crop;
pub mod display;
pub mod impact;
pub mod observation;

pub use crop::*;
pub use display::*;
pub use impact::*;
pub use observation::*;
