pub mod manifest;
pub mod report_renderer;
