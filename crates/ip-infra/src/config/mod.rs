pub mod loader;

pub use loader::load_app_config;
