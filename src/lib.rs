#![deny(rust_2018_idioms)]

mod catalog;
mod country;
mod phone;
mod runtime;
pub mod ui;
mod widget;

pub use catalog::{CatalogService, ServiceTag};
pub use country::{flag_glyph, Country, CountryRegistry};
pub use phone::watcher::NumberWatcher;
pub use phonenumber::PhoneNumber;
pub use runtime::PhoneInputUI;
pub use widget::{
    collapsed_label, list_label, locale_region, CountrySelect, DeviceServices, Focus,
    InputListener, NoDevice, PhoneInput, PhoneInputOptions, TextField,
};

pub mod prelude {
    pub use super::{Country, CountryRegistry, PhoneInput, PhoneInputOptions, PhoneInputUI};
}
