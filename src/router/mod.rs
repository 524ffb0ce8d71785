mod service;

pub use service::Router;
