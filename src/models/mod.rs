pub mod image;
pub mod keyword;
pub mod suggestion;

pub use image::*;
pub use keyword::*;
pub use suggestion::*;
