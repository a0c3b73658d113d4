pub mod headless_surface;

pub use headless_surface::HeadlessMapSurface;
