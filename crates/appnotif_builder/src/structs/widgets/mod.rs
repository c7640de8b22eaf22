pub mod button;
pub mod text;

pub use button::{Button, ButtonStyle};
pub use text::Text;
