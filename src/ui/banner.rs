use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use gtk4 as gtk;
use gtk4::prelude::*;
use phonebook::{ContactStore, Notice, NoticeKind, Phonebook, Prompter};

/// One notification strip. Holds at most one pending hide timer, which is
/// replaced with every new notice and cancelled when the widget goes away.
pub struct Banner {
    label: gtk::Label,
    timer: Rc<RefCell<Option<glib::SourceId>>>,
}

impl Banner {
    pub fn new(kind: NoticeKind) -> Self {
        let label = gtk::Label::new(None);
        label.add_css_class("heading");
        label.add_css_class(kind.css_class());
        label.set_halign(gtk::Align::Start);
        label.set_margin_top(4);
        label.set_margin_bottom(4);
        label.set_visible(false);

        let timer: Rc<RefCell<Option<glib::SourceId>>> = Rc::new(RefCell::new(None));
        {
            let timer = timer.clone();
            label.connect_destroy(move |_| {
                if let Some(id) = timer.borrow_mut().take() {
                    id.remove();
                }
            });
        }
        Self { label, timer }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.label.clone().upcast()
    }

    /// Shows `notice` (or hides the strip) and schedules `on_expire` for `expires_at`.
    pub fn show(&self, notice: Option<Notice>, expires_at: Option<Instant>, on_expire: Rc<dyn Fn()>) {
        if let Some(id) = self.timer.borrow_mut().take() {
            id.remove();
        }

        match notice {
            Some(notice) => {
                self.label.set_label(&notice.message);
                self.label.set_visible(true);
            }
            None => {
                self.label.set_visible(false);
                return;
            }
        }

        if let Some(at) = expires_at {
            let delay = at.saturating_duration_since(Instant::now());
            let timer = self.timer.clone();
            let id = glib::timeout_add_local_once(delay, move || {
                timer.borrow_mut().take();
                on_expire();
            });
            *self.timer.borrow_mut() = Some(id);
        }
    }
}

/// Success and failure strips, redrawn from the synchronizer's notice board.
pub struct Banners {
    success: Banner,
    failure: Banner,
}

impl Banners {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            success: Banner::new(NoticeKind::Success),
            failure: Banner::new(NoticeKind::Failure),
        })
    }

    pub fn attach(&self, parent: &gtk::Box) {
        parent.append(&self.success.widget());
        parent.append(&self.failure.widget());
    }

    pub fn redraw<S, P>(self: &Rc<Self>, book: &Rc<Phonebook<S, P>>)
    where
        S: ContactStore + 'static,
        P: Prompter + 'static,
    {
        book.prune_notices();
        let on_expire: Rc<dyn Fn()> = {
            let me = Rc::downgrade(self);
            let book = Rc::downgrade(book);
            Rc::new(move || {
                if let (Some(me), Some(book)) = (me.upgrade(), book.upgrade()) {
                    me.redraw(&book);
                }
            })
        };
        for (banner, kind) in [(&self.success, NoticeKind::Success), (&self.failure, NoticeKind::Failure)] {
            banner.show(book.notice(kind), book.next_expiry(kind), on_expire.clone());
        }
    }
}
