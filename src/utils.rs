use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tokio::sync::oneshot;

use crate::api::{ApiError, Contact, ContactDraft, ContactStore, Result};

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

pub fn spawn_async<F>(fut: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    RUNTIME.spawn(fut);
}

/// Runs `fut` on the shared runtime. The receiver can be awaited from any
/// executor, including the GLib main loop.
pub fn run_async_to_main<T, E, Fut>(fut: Fut) -> oneshot::Receiver<std::result::Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    spawn_async(async move {
        let res = fut.await;
        let _ = tx.send(res);
    });
    rx
}

async fn on_runtime<T, Fut>(fut: Fut) -> Result<T>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    run_async_to_main(fut).await.map_err(|_| ApiError::Dropped)?
}

/// Store adapter that drives every request on [`RUNTIME`], so callers polling
/// from a non-tokio executor still get a working reqwest reactor.
pub struct OnRuntime<S> {
    inner: Arc<S>,
}

impl<S> OnRuntime<S> {
    pub fn new(inner: S) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[async_trait]
impl<S> ContactStore for OnRuntime<S>
where
    S: ContactStore + 'static,
{
    async fn list(&self) -> Result<Vec<Contact>> {
        let store = self.inner.clone();
        on_runtime(async move { store.list().await }).await
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact> {
        let store = self.inner.clone();
        let draft = draft.clone();
        on_runtime(async move { store.create(&draft).await }).await
    }

    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<Contact> {
        let store = self.inner.clone();
        let id = id.to_string();
        let draft = draft.clone();
        on_runtime(async move { store.update(&id, &draft).await }).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let store = self.inner.clone();
        let id = id.to_string();
        on_runtime(async move { store.remove(&id).await }).await
    }
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_url_adds_scheme_and_drops_slash() {
        assert_eq!(normalize_url(" localhost:3001/ "), "http://localhost:3001");
        assert_eq!(normalize_url("https://book.example.org"), "https://book.example.org");
        assert_eq!(normalize_url("   "), "");
    }

    #[test]
    fn receiver_resolves_outside_tokio() {
        let rx = run_async_to_main(async { Ok::<_, ()>(21 * 2) });
        let res = block_on(rx);
        assert!(matches!(res, Ok(Ok(42))));
    }

    // Plain thread-park executor; the oneshot receiver does not need a tokio context.
    fn block_on<F: Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::sync::Arc;
        use std::task::{Context, Poll, Wake};
        use std::thread::{self, Thread};

        struct ThreadWaker(Thread);
        impl Wake for ThreadWaker {
            fn wake(self: Arc<Self>) {
                self.0.unpark();
            }
        }

        let waker = Arc::new(ThreadWaker(thread::current())).into();
        let mut cx = Context::from_waker(&waker);
        let mut fut = pin!(fut);
        loop {
            match fut.as_mut().poll(&mut cx) {
                Poll::Ready(out) => return out,
                Poll::Pending => thread::park(),
            }
        }
    }
}
