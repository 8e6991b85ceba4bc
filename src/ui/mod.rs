pub mod banner;
pub mod contact_form;
pub mod contact_list;
pub mod dialogs;
pub mod main_window;
pub mod setup;

use adw::Application;
use phonebook::app::{Settings, URL_ENV};

pub fn build_ui(app: &Application) {
    if Settings::exists() || std::env::var_os(URL_ENV).is_some() {
        main_window::show_main_window(app, Settings::load());
    } else {
        setup::show_setup_window(app);
    }
}
