pub mod header;
pub mod exercise_selector;
pub mod upload_area;
pub mod submit_button;
pub mod preview_overlay;
pub mod result_overlay;
pub mod score_ring;
