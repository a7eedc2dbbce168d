pub mod composer;
pub mod processor;

pub use composer::{ChangeCategory, PixelChange, Rgb, compose_change};
pub use processor::{ChangeProcessor, ProcessError};
