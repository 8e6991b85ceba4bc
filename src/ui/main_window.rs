use std::rc::Rc;

use adw::prelude::*;
use adw::Application;
use log::{debug, error};
use phonebook::utils::OnRuntime;
use phonebook::{ApiClient, Phonebook, Settings};

use crate::ui::banner::Banners;
use crate::ui::contact_form::ContactForm;
use crate::ui::contact_list::ContactList;
use crate::ui::dialogs::DialogPrompter;

type Book = Phonebook<OnRuntime<ApiClient>, DialogPrompter>;

pub fn show_main_window(app: &Application, settings: Settings) {
    let client = match ApiClient::from_settings(&settings) {
        Ok(client) => client,
        Err(e) => {
            error!("unusable server url {}: {}", settings.base_url, e);
            crate::ui::setup::show_setup_window(app);
            return;
        }
    };

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Phonebook")
        .default_width(640)
        .default_height(720)
        .build();

    let book: Rc<Book> = Rc::new(Phonebook::new(OnRuntime::new(client), DialogPrompter::new(&window)));

    let root = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);

    let banners = Banners::new();
    banners.attach(&root);

    let filter_entry = gtk4::Entry::new();
    filter_entry.set_placeholder_text(Some("Filter shown with"));
    filter_entry.set_primary_icon_name(Some("system-search-symbolic"));
    root.append(&filter_entry);

    let form = ContactForm::new();
    root.append(&form.widget());

    let list = Rc::new(ContactList::new());
    root.append(&list.widget());

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("Phonebook"));
    header.set_title_widget(Some(&title));

    let server_btn = gtk4::Button::with_label("Server");
    header.pack_end(&server_btn);
    container.append(&header);
    container.append(&root);
    window.set_content(Some(&container));

    // Redraws the rows; `render` also redraws the banners.
    let refresh: Rc<dyn Fn()> = {
        let book = book.clone();
        let list = list.clone();
        Rc::new(move || {
            list.set_items(book.filtered(), book.pending());
        })
    };
    let render: Rc<dyn Fn()> = {
        let refresh = refresh.clone();
        let book = book.clone();
        let banners = banners.clone();
        Rc::new(move || {
            refresh();
            banners.redraw(&book);
        })
    };

    {
        let book = book.clone();
        let refresh = refresh.clone();
        filter_entry.connect_changed(move |entry| {
            book.set_filter(&entry.text());
            refresh();
        });
    }

    {
        let book = book.clone();
        let render = render.clone();
        let form_for_submit = form.clone();
        form.connect_submit(move || {
            let (name, number) = form_for_submit.values();
            let book = book.clone();
            let render = render.clone();
            let form = form_for_submit.clone();
            glib::spawn_future_local(async move {
                let on_dispatch = {
                    let render = render.clone();
                    move || {
                        form.clear();
                        render();
                    }
                };
                let outcome = book.submit_with(&name, &number, on_dispatch).await;
                debug!("submit {:?} -> {:?}", name, outcome);
                render();
            });
        });
    }

    {
        let book = book.clone();
        let render = render.clone();
        list.connect_delete(move |id| {
            let book = book.clone();
            let render = render.clone();
            glib::spawn_future_local(async move {
                let outcome = book.delete(&id).await;
                debug!("delete {} -> {:?}", id, outcome);
                render();
            });
        });
    }

    {
        let app = app.clone();
        let window = window.clone();
        server_btn.connect_clicked(move |_| {
            crate::ui::setup::show_setup_window(&app);
            window.close();
        });
    }

    window.present();

    let render_loaded = render.clone();
    glib::spawn_future_local(async move {
        if let Ok(count) = book.load().await {
            debug!("showing {} contacts", count);
        }
        render_loaded();
    });
}
