//! Native upload widget.
//!
//! Drives a [`UploadState`] from tokio tasks. Selecting a file registers the
//! request right away (so sequence numbers follow selection order) and then
//! runs the upload on its own task; the caller is never blocked.
//!
//! The state mutex is only held for the synchronous `begin`/`resolve`
//! transitions, never across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use linreg_core::{render_html, ApplyPolicy, FitResult, RequestStatus, Resolution, UploadState};

use crate::api::{FitService, HttpFitService, LogBroadcaster, LogEntry, SelectedFile};
use crate::config::ClientConfig;

/// Upload widget holding the latest fit result.
pub struct UploadWidget<S> {
    service: Arc<S>,
    state: Arc<Mutex<UploadState>>,
    logs: LogBroadcaster,
}

impl<S> Clone for UploadWidget<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
            logs: self.logs.clone(),
        }
    }
}

impl UploadWidget<HttpFitService> {
    /// Widget talking to the service described by `config`.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(HttpFitService::new(config), config.policy)
    }
}

impl<S: FitService> UploadWidget<S> {
    pub fn new(service: S, policy: ApplyPolicy) -> Self {
        Self {
            service: Arc::new(service),
            state: Arc::new(Mutex::new(UploadState::new(policy))),
            logs: LogBroadcaster::new(),
        }
    }

    /// Upload `file` in the background.
    ///
    /// Must be called from within a tokio runtime. Earlier requests are not
    /// cancelled. The returned handle yields what happened to the response;
    /// dropping it does not abort the upload.
    pub fn handle_file_selected(&self, file: SelectedFile) -> JoinHandle<Resolution> {
        let ticket = self.state().begin();
        self.logs.info(format!(
            "📤 Uploading {} ({} bytes) [request #{}]",
            file.name,
            file.len(),
            ticket.seq()
        ));

        let request = self.service.fit(file);
        let state = Arc::clone(&self.state);
        let logs = self.logs.clone();

        tokio::spawn(async move {
            let outcome = request.await;
            let resolution = lock(&state).resolve(ticket, outcome);

            match &resolution {
                Resolution::Applied => {
                    logs.success(format!("✅ Fit received [request #{}]", ticket.seq()));
                }
                Resolution::Failed(err) => {
                    logs.error(format!("❌ Upload failed [request #{}]: {}", ticket.seq(), err));
                }
                Resolution::Superseded => {
                    logs.warning(format!(
                        "⚠️ Ignored response to superseded request #{}",
                        ticket.seq()
                    ));
                }
                Resolution::Discarded => {
                    log::debug!("Dropped response to request #{} issued before reset", ticket.seq());
                }
            }

            resolution
        })
    }

    /// Copy of the held result.
    pub fn result(&self) -> Option<FitResult> {
        self.state().result().cloned()
    }

    pub fn status(&self) -> RequestStatus {
        self.state().status()
    }

    pub fn policy(&self) -> ApplyPolicy {
        self.state().policy()
    }

    /// Clear the result; responses to earlier requests are discarded.
    pub fn reset(&self) {
        self.state().reset();
        log::debug!("Upload widget reset");
    }

    /// Current widget markup.
    pub fn render_html(&self) -> String {
        render_html(self.state().result())
    }

    /// Diagnostic entries logged from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.logs.subscribe()
    }

    pub fn logs(&self) -> &LogBroadcaster {
        &self.logs
    }

    fn state(&self) -> MutexGuard<'_, UploadState> {
        lock(&self.state)
    }
}

// A panic while holding the lock cannot leave UploadState half-updated,
// so a poisoned lock is still usable.
fn lock(state: &Mutex<UploadState>) -> MutexGuard<'_, UploadState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LogLevel;
    use crate::error::FitError;
    use futures::future::{BoxFuture, FutureExt};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    type Reply = Result<FitResult, FitError>;

    /// Fake service: the n-th call waits for the n-th scripted reply.
    #[derive(Default)]
    struct ScriptedService {
        replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
        received: Arc<Mutex<Vec<SelectedFile>>>,
    }

    impl ScriptedService {
        fn with_calls(n: usize) -> (Self, Vec<oneshot::Sender<Reply>>) {
            let service = Self::default();
            let mut senders = Vec::new();
            for _ in 0..n {
                let (tx, rx) = oneshot::channel();
                service.replies.lock().unwrap().push_back(rx);
                senders.push(tx);
            }
            (service, senders)
        }
    }

    impl FitService for ScriptedService {
        fn fit(&self, file: SelectedFile) -> BoxFuture<'static, Reply> {
            self.received.lock().unwrap().push(file);
            let reply = self.replies.lock().unwrap().pop_front();
            async move {
                match reply {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(FitError::Network("script dropped".into()))),
                    None => Err(FitError::Network("no scripted reply".into())),
                }
            }
            .boxed()
        }
    }

    fn fit(image: &str, slope: f64) -> FitResult {
        FitResult {
            image: image.into(),
            slope,
            intercept: 1.0,
            r_squared: 0.95,
        }
    }

    fn csv(name: &str) -> SelectedFile {
        SelectedFile::new(name, b"x,y\n1,3\n2,5\n".to_vec())
    }

    fn drain_errors(rx: &mut broadcast::Receiver<LogEntry>) -> usize {
        let mut errors = 0;
        while let Ok(entry) = rx.try_recv() {
            if entry.level == LogLevel::Error {
                errors += 1;
            }
        }
        errors
    }

    #[tokio::test]
    async fn test_initial_render_is_empty() {
        let (service, _senders) = ScriptedService::with_calls(0);
        let widget = UploadWidget::new(service, ApplyPolicy::default());

        assert!(widget.result().is_none());
        assert_eq!(widget.status(), RequestStatus::Idle);
        let html = widget.render_html();
        assert!(html.contains("<input type=\"file\""));
        assert!(!html.contains("<img"));
        assert!(!html.contains("slope"));
    }

    #[tokio::test]
    async fn test_success_renders_result() {
        let (service, mut senders) = ScriptedService::with_calls(1);
        let widget = UploadWidget::new(service, ApplyPolicy::default());

        let handle = widget.handle_file_selected(csv("data.csv"));
        assert_eq!(widget.status(), RequestStatus::InFlight);

        senders.remove(0).send(Ok(fit("iVBORw0", 2.0))).unwrap();
        assert_eq!(handle.await.unwrap(), Resolution::Applied);

        assert_eq!(widget.status(), RequestStatus::Succeeded);
        let html = widget.render_html();
        assert!(html.contains("src=\"data:image/png;base64,iVBORw0\""));
        assert!(html.contains("2.0"));
        assert!(html.contains("1.0"));
        assert!(html.contains("0.95"));
    }

    #[tokio::test]
    async fn test_failure_keeps_render_and_logs_once() {
        let (service, mut senders) = ScriptedService::with_calls(1);
        let widget = UploadWidget::new(service, ApplyPolicy::default());
        let mut rx = widget.subscribe();
        let initial = widget.render_html();

        let handle = widget.handle_file_selected(csv("data.csv"));
        senders
            .remove(0)
            .send(Err(FitError::Network("connection refused".into())))
            .unwrap();
        let resolution = handle.await.unwrap();

        assert!(matches!(resolution, Resolution::Failed(FitError::Network(_))));
        assert!(widget.result().is_none());
        assert_eq!(widget.render_html(), initial);
        assert_eq!(widget.status(), RequestStatus::Failed);
        assert_eq!(drain_errors(&mut rx), 1);
    }

    #[tokio::test]
    async fn test_upload_start_logged_once() {
        let (service, mut senders) = ScriptedService::with_calls(1);
        let widget = UploadWidget::new(service, ApplyPolicy::default());
        let mut rx = widget.subscribe();

        let handle = widget.handle_file_selected(csv("data.csv"));
        senders.remove(0).send(Ok(fit("iVBORw0", 2.0))).unwrap();
        handle.await.unwrap();

        let mut starts = 0;
        while let Ok(entry) = rx.try_recv() {
            if entry.message.contains("Uploading data.csv") {
                starts += 1;
            }
        }
        assert_eq!(starts, 1);
    }

    #[tokio::test]
    async fn test_last_resolved_response_wins() {
        let (service, mut senders) = ScriptedService::with_calls(2);
        let widget = UploadWidget::new(service, ApplyPolicy::LastResolved);

        let a = widget.handle_file_selected(csv("a.csv"));
        let b = widget.handle_file_selected(csv("b.csv"));
        let tx_b = senders.pop().unwrap();
        let tx_a = senders.pop().unwrap();

        tx_b.send(Ok(fit("B", 20.0))).unwrap();
        assert_eq!(b.await.unwrap(), Resolution::Applied);
        tx_a.send(Ok(fit("A", 10.0))).unwrap();
        assert_eq!(a.await.unwrap(), Resolution::Applied);

        // A was selected first but resolved last, so A is shown.
        assert_eq!(widget.result(), Some(fit("A", 10.0)));
    }

    #[tokio::test]
    async fn test_latest_request_policy_keeps_newest_selection() {
        let (service, mut senders) = ScriptedService::with_calls(2);
        let widget = UploadWidget::new(service, ApplyPolicy::LatestRequest);
        let mut rx = widget.subscribe();

        let a = widget.handle_file_selected(csv("a.csv"));
        let b = widget.handle_file_selected(csv("b.csv"));
        let tx_b = senders.pop().unwrap();
        let tx_a = senders.pop().unwrap();

        tx_b.send(Ok(fit("B", 20.0))).unwrap();
        b.await.unwrap();
        tx_a.send(Ok(fit("A", 10.0))).unwrap();
        assert_eq!(a.await.unwrap(), Resolution::Superseded);

        assert_eq!(widget.result(), Some(fit("B", 20.0)));
        assert_eq!(drain_errors(&mut rx), 0);
    }

    #[tokio::test]
    async fn test_same_file_twice_sends_two_requests() {
        let (service, mut senders) = ScriptedService::with_calls(2);
        let received = Arc::clone(&service.received);
        let widget = UploadWidget::new(service, ApplyPolicy::default());

        let first = widget.handle_file_selected(csv("data.csv"));
        senders.remove(0).send(Ok(fit("first", 1.0))).unwrap();
        first.await.unwrap();

        let second = widget.handle_file_selected(csv("data.csv"));
        senders.remove(0).send(Ok(fit("second", 3.0))).unwrap();
        second.await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0], received[1]);
        assert_eq!(widget.result(), Some(fit("second", 3.0)));
    }

    #[tokio::test]
    async fn test_reset_discards_inflight_response() {
        let (service, mut senders) = ScriptedService::with_calls(2);
        let widget = UploadWidget::new(service, ApplyPolicy::default());

        let first = widget.handle_file_selected(csv("data.csv"));
        senders.remove(0).send(Ok(fit("first", 1.0))).unwrap();
        first.await.unwrap();
        assert!(widget.result().is_some());

        let pending = widget.handle_file_selected(csv("data.csv"));
        widget.reset();
        assert!(widget.result().is_none());
        assert_eq!(widget.status(), RequestStatus::Idle);

        senders.remove(0).send(Ok(fit("late", 9.0))).unwrap();
        assert_eq!(pending.await.unwrap(), Resolution::Discarded);
        assert!(widget.result().is_none());
    }
}
