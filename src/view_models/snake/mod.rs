pub mod input_adapter;
pub mod snake_view_model;
