use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use log::{info, warn};
use phonebook::app::Settings;
use phonebook::ApiClient;

pub fn show_setup_window(app: &Application) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Phonebook Server")
        .default_width(420)
        .default_height(220)
        .resizable(false)
        .build();

    let toast_overlay = adw::ToastOverlay::new();

    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let title = gtk::Label::new(Some("Connect to a phonebook server"));
    title.add_css_class("title-2");
    title.set_halign(gtk::Align::Start);
    root.append(&title);

    let current = Settings::load();
    let server_entry = gtk::Entry::new();
    server_entry.set_placeholder_text(Some("Server URL (e.g. http://localhost:3001)"));
    server_entry.set_text(&current.base_url);
    server_entry.set_hexpand(true);
    root.append(&server_entry);

    let status = gtk::Label::new(None);
    status.add_css_class("dim-label");
    status.set_halign(gtk::Align::Start);
    root.append(&status);

    let connect_btn = gtk::Button::with_label("Connect");
    connect_btn.add_css_class("suggested-action");
    connect_btn.set_halign(gtk::Align::End);
    root.append(&connect_btn);

    toast_overlay.set_child(Some(&root));
    let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk::Label::new(Some("Phonebook"));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&toast_overlay);
    window.set_content(Some(&container));

    let on_connect = {
        let app = app.clone();
        let window = window.clone();
        let overlay = toast_overlay.clone();
        let server_entry = server_entry.clone();
        move || {
            let url = phonebook::utils::normalize_url(&server_entry.text());
            if url.is_empty() {
                overlay.add_toast(adw::Toast::new("Please enter the server URL."));
                return;
            }

            let mut settings = Settings::load();
            settings.base_url = url;
            let client = match ApiClient::from_settings(&settings) {
                Ok(client) => client,
                Err(e) => {
                    overlay.add_toast(adw::Toast::new(&format!("Invalid server URL: {}", e)));
                    return;
                }
            };

            status.set_label("Connecting…");
            let rx = phonebook::utils::run_async_to_main(async move { client.ping().await });

            let status = status.clone();
            let app = app.clone();
            let window = window.clone();
            let overlay = overlay.clone();
            glib::spawn_future_local(async move {
                match rx.await {
                    Ok(Ok(code)) => {
                        info!("server {} answered with HTTP {}", settings.base_url, code);
                        status.set_label("Connected");
                        if let Err(e) = settings.save() {
                            overlay.add_toast(adw::Toast::new(&format!("Failed to save settings: {}", e)));
                        }
                        crate::ui::main_window::show_main_window(&app, settings);
                        window.close();
                    }
                    Ok(Err(err)) => {
                        warn!("server check failed: {}", err);
                        status.set_label("Connection failed");
                        overlay.add_toast(adw::Toast::new("Could not reach the server. Check the URL."));
                    }
                    Err(_) => status.set_label("Connection failed"),
                }
            });
        }
    };

    use std::rc::Rc;
    let on_connect: Rc<dyn Fn()> = Rc::new(on_connect);
    {
        let on_connect = on_connect.clone();
        connect_btn.connect_clicked(move |_| (on_connect)());
    }
    {
        let on_connect = on_connect.clone();
        server_entry.connect_activate(move |_| (on_connect)());
    }

    window.present();
}
