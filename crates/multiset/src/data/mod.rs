pub mod datasets;
pub mod keybindings_data;
