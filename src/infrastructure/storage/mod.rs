pub mod image_attachment;

pub use image_attachment::{FileImageAttachments, encode_data_uri, mime_for_path};
