pub mod melody;
pub mod note;
pub mod output;
pub mod pitch;
pub mod render;
pub mod synth;
