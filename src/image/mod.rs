pub mod io;
pub mod pixel;
pub mod traits;

pub use self::pixel::{Pixel, PixelBuffer};
pub use self::traits::{ImageView, ImageViewMut, Rows};
