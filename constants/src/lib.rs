pub mod contact;
pub mod moon;
pub mod point_fields;
pub mod render_settings;
