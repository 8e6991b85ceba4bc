//! Contact synchronizer.
//!
//! Owns the local contact list, the search filter and the notice board, and
//! mirrors every change onto a [`ContactStore`]. Methods take `&self`; the
//! state cell is never borrowed across an await, so the UI may read it while
//! a request is in flight. Two overlapping submits each see the list as it is
//! when they start; the later completion wins.

use std::cell::RefCell;
use std::time::Instant;

use log::{debug, error, info};

use crate::api::{ApiError, Contact, ContactDraft, ContactStore};
use crate::notification::{Notice, NoticeBoard, NoticeKind};
use crate::prompt::Prompter;

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Name or number blank after trimming.
    Ignored,
    /// User refused to overwrite an existing number.
    Declined,
    /// Name is new but the number belongs to someone else.
    DuplicateNumber,
    Updated(Contact),
    Created(Contact),
    Failed(ApiError),
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Unknown,
    Declined,
    Deleted(Contact),
    Failed(ApiError),
}

/// Result of looking a submission up against the current list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existing {
    Name(Contact),
    Number(Contact),
    Neither,
}

/// Exact-match lookup. A name match takes precedence over a number match, so
/// a submission that reuses an existing name and some other contact's number
/// is treated as an update of the named contact.
pub fn match_existing(contacts: &[Contact], name: &str, number: &str) -> Existing {
    if let Some(c) = contacts.iter().find(|c| c.name == name) {
        return Existing::Name(c.clone());
    }
    if let Some(c) = contacts.iter().find(|c| c.number == number) {
        return Existing::Number(c.clone());
    }
    Existing::Neither
}

/// Case-insensitive substring match on the name only.
pub fn filter_by_name(contacts: &[Contact], term: &str) -> Vec<Contact> {
    let needle = term.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

#[derive(Debug, Default)]
struct State {
    contacts: Vec<Contact>,
    // creates in flight, keyed by a placeholder id
    pending: Vec<Contact>,
    filter: String,
    notices: NoticeBoard,
}

pub struct Phonebook<S, P> {
    store: S,
    prompt: P,
    state: RefCell<State>,
}

impl<S: ContactStore, P: Prompter> Phonebook<S, P> {
    pub fn new(store: S, prompt: P) -> Self {
        Self { store, prompt, state: RefCell::new(State::default()) }
    }

    /// Replaces the local list with the server's. No retry on failure.
    pub async fn load(&self) -> Result<usize, ApiError> {
        match self.store.list().await {
            Ok(contacts) => {
                let count = contacts.len();
                info!("loaded {} contacts", count);
                self.state.borrow_mut().contacts = contacts;
                Ok(count)
            }
            Err(e) => {
                error!("loading contacts failed: {}", e);
                self.notify(NoticeKind::Failure, "Failed to load contacts".to_string());
                Err(e)
            }
        }
    }

    pub async fn submit(&self, name: &str, number: &str) -> SubmitOutcome {
        self.submit_with(name, number, || {}).await
    }

    /// Like [`submit`](Self::submit); `dispatched` runs right before the
    /// remote request is issued, which is when the form should be cleared.
    pub async fn submit_with(&self, name: &str, number: &str, dispatched: impl FnOnce()) -> SubmitOutcome {
        if is_blank(name) || is_blank(number) {
            return SubmitOutcome::Ignored;
        }

        let existing = match_existing(&self.state.borrow().contacts, name, number);
        let draft = ContactDraft::new(name, number);
        match existing {
            Existing::Name(current) => {
                let question = format!(
                    "{} is already added to the phonebook, replace the old number with a new one?",
                    name
                );
                if !self.prompt.confirm(&question).await {
                    return SubmitOutcome::Declined;
                }
                dispatched();
                self.update(&current, &draft).await
            }
            Existing::Number(_) => {
                self.prompt
                    .alert(&format!("{} is already added to the phonebook", number))
                    .await;
                SubmitOutcome::DuplicateNumber
            }
            Existing::Neither => self.create(draft, dispatched).await,
        }
    }

    async fn update(&self, current: &Contact, draft: &ContactDraft) -> SubmitOutcome {
        debug!("updating contact {} ({})", current.id, current.name);
        match self.store.update(&current.id, draft).await {
            Ok(returned) => {
                {
                    let mut state = self.state.borrow_mut();
                    for c in state.contacts.iter_mut().filter(|c| c.id == current.id) {
                        *c = returned.clone();
                    }
                }
                self.notify(NoticeKind::Success, format!("Updated {}", returned.name));
                SubmitOutcome::Updated(returned)
            }
            Err(e) => {
                error!("updating {} failed: {}", current.name, e);
                self.notify(
                    NoticeKind::Failure,
                    format!("Information of {} has already been removed from the server", draft.name),
                );
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn create(&self, draft: ContactDraft, dispatched: impl FnOnce()) -> SubmitOutcome {
        let placeholder = {
            let mut state = self.state.borrow_mut();
            let placeholder = Contact {
                id: (state.contacts.len() + 1).to_string(),
                name: draft.name.clone(),
                number: draft.number.clone(),
            };
            state.pending.push(placeholder.clone());
            placeholder
        };
        debug!("creating {} as pending #{}", draft.name, placeholder.id);
        dispatched();

        let result = self.store.create(&draft).await;
        {
            let mut state = self.state.borrow_mut();
            if let Some(pos) = state.pending.iter().position(|c| *c == placeholder) {
                state.pending.remove(pos);
            }
        }

        match result {
            Ok(returned) => {
                self.state.borrow_mut().contacts.push(returned.clone());
                self.notify(NoticeKind::Success, format!("Added {}", returned.name));
                SubmitOutcome::Created(returned)
            }
            Err(e) => {
                error!("adding {} failed: {}", draft.name, e);
                self.notify(NoticeKind::Failure, format!("Failed to add {}", draft.name));
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> DeleteOutcome {
        let target = self.state.borrow().contacts.iter().find(|c| c.id == id).cloned();
        let Some(target) = target else {
            debug!("delete of unknown contact {}", id);
            return DeleteOutcome::Unknown;
        };

        if !self.prompt.confirm(&format!("Delete {}?", target.name)).await {
            return DeleteOutcome::Declined;
        }

        match self.store.remove(id).await {
            Ok(()) => {
                self.state.borrow_mut().contacts.retain(|c| c.id != id);
                DeleteOutcome::Deleted(target)
            }
            Err(e) => {
                error!("deleting {} failed: {}", target.name, e);
                self.notify(NoticeKind::Failure, format!("Failed to delete {}", target.name));
                DeleteOutcome::Failed(e)
            }
        }
    }

    pub fn set_filter(&self, term: &str) {
        self.state.borrow_mut().filter = term.to_string();
    }

    pub fn filter(&self) -> String {
        self.state.borrow().filter.clone()
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.state.borrow().contacts.clone()
    }

    /// Contacts matching the current filter.
    pub fn filtered(&self) -> Vec<Contact> {
        let state = self.state.borrow();
        filter_by_name(&state.contacts, &state.filter)
    }

    /// Creates still waiting for the server, filtered like [`filtered`](Self::filtered).
    pub fn pending(&self) -> Vec<Contact> {
        let state = self.state.borrow();
        filter_by_name(&state.pending, &state.filter)
    }

    fn notify(&self, kind: NoticeKind, message: String) {
        self.state.borrow_mut().notices.show(kind, message, Instant::now());
    }

    pub fn notice(&self, kind: NoticeKind) -> Option<Notice> {
        self.state.borrow().notices.current(kind, Instant::now()).cloned()
    }

    pub fn next_expiry(&self, kind: NoticeKind) -> Option<Instant> {
        self.state.borrow().notices.next_expiry(kind)
    }

    pub fn prune_notices(&self) -> bool {
        self.state.borrow_mut().notices.prune(Instant::now())
    }
}
