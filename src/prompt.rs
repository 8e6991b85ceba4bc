use async_trait::async_trait;

/// Blocking yes/no questions and alerts shown to the user.
///
/// Futures are not `Send`: implementations usually live on the UI thread.
#[async_trait(?Send)]
pub trait Prompter {
    async fn confirm(&self, message: &str) -> bool;

    async fn alert(&self, message: &str);
}

/// Answers every question the same way and only logs alerts.
#[derive(Debug, Clone, Copy)]
pub struct AutoAnswer(pub bool);

#[async_trait(?Send)]
impl Prompter for AutoAnswer {
    async fn confirm(&self, message: &str) -> bool {
        log::debug!("auto-answering {:?} with {}", message, self.0);
        self.0
    }

    async fn alert(&self, message: &str) {
        log::warn!("{}", message);
    }
}
