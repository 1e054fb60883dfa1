mod gallery;
mod generate_button;
mod logo_creator;
mod model_selector;
mod prompt_input;

pub use gallery::*;
pub use generate_button::*;
pub use logo_creator::*;
pub use model_selector::*;
pub use prompt_input::*;
