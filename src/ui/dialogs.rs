use adw::prelude::*;
use async_trait::async_trait;
use phonebook::Prompter;

/// Modal message dialogs on top of the main window.
pub struct DialogPrompter {
    parent: adw::ApplicationWindow,
}

impl DialogPrompter {
    pub fn new(parent: &adw::ApplicationWindow) -> Self {
        Self { parent: parent.clone() }
    }

    fn dialog(&self, message: &str) -> adw::MessageDialog {
        let dialog = adw::MessageDialog::new(Some(&self.parent), Some("Phonebook"), Some(message));
        dialog.set_modal(true);
        dialog
    }
}

#[async_trait(?Send)]
impl Prompter for DialogPrompter {
    async fn confirm(&self, message: &str) -> bool {
        let dialog = self.dialog(message);
        dialog.add_responses(&[("cancel", "_Cancel"), ("ok", "_OK")]);
        dialog.set_response_appearance("ok", adw::ResponseAppearance::Suggested);
        dialog.set_default_response(Some("ok"));
        dialog.set_close_response("cancel");
        dialog.choose_future().await.as_str() == "ok"
    }

    async fn alert(&self, message: &str) {
        let dialog = self.dialog(message);
        dialog.add_response("close", "_Close");
        dialog.set_default_response(Some("close"));
        dialog.set_close_response("close");
        dialog.choose_future().await;
    }
}
