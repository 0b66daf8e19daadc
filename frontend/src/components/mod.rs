pub mod copy_button;
pub mod handlers;
pub mod header;
pub mod how_to_modal;
pub mod image_upload;
pub mod preview_area;
pub mod signature_form;
pub mod theme_toggle;
pub mod utils;
