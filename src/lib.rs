pub mod api;
pub mod app;
pub mod logging;
pub mod notification;
pub mod phonebook;
pub mod prompt;
pub mod utils;

pub use api::{ApiClient, ApiError, Contact, ContactDraft, ContactStore};
pub use app::Settings;
pub use notification::{Notice, NoticeBoard, NoticeKind, NOTICE_TTL};
pub use phonebook::{DeleteOutcome, Phonebook, SubmitOutcome};
pub use prompt::Prompter;
