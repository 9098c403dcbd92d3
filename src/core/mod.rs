pub mod observable;
pub mod panel_surface;
pub mod view_model;
