pub mod gamemove;
pub mod piece;
pub mod position;
pub mod record;
pub mod side;
pub mod square;

pub use gamemove::*;
pub use piece::*;
pub use position::*;
pub use record::*;
pub use side::*;
pub use square::*;
