pub use crate::scanning::{Scannable, Scanner};

pub mod sl {
    pub use crate::cursor::{Bounded, Cursor};
}
