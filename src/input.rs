pub mod input_render;
mod input_state;

pub use input_state::{FieldEvent, InputField};
