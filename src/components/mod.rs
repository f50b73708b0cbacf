pub mod controls;
pub mod export;
pub mod listings;
pub mod matrix_canvas;
pub mod panels;
