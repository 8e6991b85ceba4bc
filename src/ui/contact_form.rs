use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;

/// "Add a new" form: name, number and an add button.
#[derive(Clone)]
pub struct ContactForm {
    root: gtk::Box,
    name: gtk::Entry,
    number: gtk::Entry,
    add_btn: gtk::Button,
}

impl ContactForm {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);

        let heading = gtk::Label::new(Some("Add a new"));
        heading.add_css_class("title-4");
        heading.set_halign(gtk::Align::Start);
        root.append(&heading);

        let name = gtk::Entry::new();
        name.set_placeholder_text(Some("Name"));
        name.set_hexpand(true);
        let number = gtk::Entry::new();
        number.set_placeholder_text(Some("Number"));
        number.set_hexpand(true);

        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        let add_btn = gtk::Button::with_label("Add");
        add_btn.add_css_class("suggested-action");
        row.append(&name);
        row.append(&number);
        row.append(&add_btn);
        root.append(&row);

        Self { root, name, number, add_btn }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Current (name, number) exactly as typed.
    pub fn values(&self) -> (String, String) {
        (self.name.text().to_string(), self.number.text().to_string())
    }

    pub fn clear(&self) {
        self.name.set_text("");
        self.number.set_text("");
        self.name.grab_focus();
    }

    /// Runs `f` on the add button and on Enter in either field.
    pub fn connect_submit<F: Fn() + 'static>(&self, f: F) {
        let submit: Rc<dyn Fn()> = Rc::new(f);
        {
            let submit = submit.clone();
            self.add_btn.connect_clicked(move |_| (submit)());
        }
        {
            let submit = submit.clone();
            self.name.connect_activate(move |_| (submit)());
        }
        self.number.connect_activate(move |_| (submit)());
    }
}
