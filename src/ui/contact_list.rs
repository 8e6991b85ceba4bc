use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use phonebook::Contact;

pub struct ContactList {
    root: gtk::Box,
    list: gtk::ListBox,
    on_delete: RefCell<Option<Rc<dyn Fn(String)>>>,
}

impl ContactList {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);

        let title = gtk::Label::new(Some("Numbers"));
        title.add_css_class("title-4");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let list = gtk::ListBox::new();
        list.set_selection_mode(gtk::SelectionMode::None);
        list.add_css_class("boxed-list");
        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .child(&list)
            .build();
        root.append(&scroller);

        Self { root, list, on_delete: RefCell::new(None) }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    /// Called with the contact id when a row's delete button is pressed.
    pub fn connect_delete<F: Fn(String) + 'static>(&self, f: F) {
        *self.on_delete.borrow_mut() = Some(Rc::new(f));
    }

    /// Rebuilds the rows. Pending contacts are dimmed and cannot be deleted yet.
    pub fn set_items(&self, contacts: Vec<Contact>, pending: Vec<Contact>) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for contact in contacts {
            let row = Self::row(&contact);
            if let Some(on_delete) = self.on_delete.borrow().clone() {
                let delete_btn = gtk::Button::with_label("delete");
                delete_btn.add_css_class("destructive-action");
                let id = contact.id.clone();
                delete_btn.connect_clicked(move |_| on_delete(id.clone()));
                row.append(&delete_btn);
            }
            self.append(row);
        }
        for contact in pending {
            let row = Self::row(&contact);
            row.add_css_class("dim-label");
            self.append(row);
        }
    }

    fn row(contact: &Contact) -> gtk::Box {
        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        row.set_margin_top(8);
        row.set_margin_bottom(8);
        row.set_margin_start(8);
        row.set_margin_end(8);
        let label = gtk::Label::new(Some(&format!("{} {}", contact.name, contact.number)));
        label.set_halign(gtk::Align::Start);
        label.set_hexpand(true);
        row.append(&label);
        row
    }

    fn append(&self, content: gtk::Box) {
        let row = gtk::ListBoxRow::new();
        row.set_child(Some(&content));
        self.list.append(&row);
    }
}
