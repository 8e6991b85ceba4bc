mod ui;

use adw::prelude::*;
use adw::Application;
use phonebook::Settings;

fn main() -> glib::ExitCode {
    let settings = Settings::load();
    if let Err(e) = phonebook::logging::init(&settings.log_level) {
        eprintln!("{e}");
    }

    let app = Application::builder()
        .application_id("com.example.PhonebookGtk")
        .build();
    app.connect_activate(|app| {
        crate::ui::build_ui(app);
    });
    app.run()
}
