use std::sync::Arc;

use egui::Context;
use tokio::runtime::Handle;
use tracing::{info, warn};

use valuation_core::{PropertyForm, ServiceError, Valuation, ValuationService};

use crate::screens::ValuationScreen;
use crate::submit::{Poll, Submission};

/// Error text shown when the service answers with a non-success status.
const MSG_EVALUATION_FAILED: &str = "فشل التقييم";
/// Error text shown for transport and decoding failures.
const MSG_GENERIC_FAILURE: &str = "حدث خطأ";

/// Main application state.
pub struct ValuatorApp {
    pub form: PropertyForm,
    /// The single visible error message; validation and submission
    /// failures overwrite each other here.
    pub error: Option<String>,
    /// Last successful valuation. Replaced wholesale on each success,
    /// never cleared by a failure.
    pub result: Option<Valuation>,
    pending: Option<Submission>,
    service: Arc<dyn ValuationService>,
    runtime: Handle,
    ctx: Context,
}

impl ValuatorApp {
    pub fn new(
        ctx: Context,
        service: Arc<dyn ValuationService>,
        runtime: Handle,
    ) -> Self {
        Self {
            form: PropertyForm::new(),
            error: None,
            result: None,
            pending: None,
            service,
            runtime,
            ctx,
        }
    }

    /// Whether a request is outstanding. The submit affordance is disabled
    /// while this is true.
    pub fn busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates the form and fires the evaluation request.
    ///
    /// A no-op while a previous submission is still in flight, so no
    /// second request can exist concurrently.
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }

        self.error = None;
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                warn!(field = ?e.field(), error = %e, "form rejected");
                self.error = Some(e.to_string());
                return;
            }
        };

        info!(
            region = %request.region,
            city = %request.city,
            area = request.area,
            "submitting evaluation request"
        );
        let ctx = self.ctx.clone();
        self.pending = Some(Submission::spawn(
            &self.runtime,
            Arc::clone(&self.service),
            request,
            move || ctx.request_repaint(),
        ));
    }

    /// Applies the outcome of a finished submission, if any.
    /// Every outcome, success or failure, releases the busy state.
    pub fn poll_pending(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        if let Poll::Done(outcome) = pending.poll() {
            self.pending = None;
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: Result<Valuation, ServiceError>) {
        match outcome {
            Ok(valuation) => {
                info!(prediction = valuation.prediction, "evaluation succeeded");
                self.result = Some(valuation);
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "evaluation failed");
                // A failed attempt never disturbs the previously shown value.
                self.error = Some(
                    match e {
                        ServiceError::Status(_) => MSG_EVALUATION_FAILED,
                        ServiceError::Transport(_) | ServiceError::Malformed(_) => {
                            MSG_GENERIC_FAILURE
                        }
                    }
                    .to_string(),
                );
            }
        }
    }

    /// Swaps in a fresh default record. The last result stays visible
    /// until a new submission overwrites it.
    pub fn reset_form(&mut self) {
        self.form = PropertyForm::new();
        self.error = None;
    }
}

impl eframe::App for ValuatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_pending();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("ملف", |ui| {
                    if ui.button("تقييم جديد").clicked() {
                        self.reset_form();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("خروج").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| ValuationScreen::show(self, ui));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use valuation_core::ValuationRequest;

    use super::*;

    /// Stub service that records calls and answers after a short delay.
    struct StubService {
        calls: AtomicUsize,
        outcome: Result<Valuation, ServiceError>,
    }

    impl StubService {
        fn new(outcome: Result<Valuation, ServiceError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome,
            })
        }
    }

    #[async_trait]
    impl ValuationService for StubService {
        async fn evaluate(
            &self,
            _request: &ValuationRequest,
        ) -> Result<Valuation, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.outcome.clone()
        }
    }

    struct Harness {
        app: ValuatorApp,
        service: Arc<StubService>,
        _runtime: tokio::runtime::Runtime,
    }

    fn harness(outcome: Result<Valuation, ServiceError>) -> Harness {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let service = StubService::new(outcome);
        let app = ValuatorApp::new(
            Context::default(),
            service.clone(),
            runtime.handle().clone(),
        );
        Harness {
            app,
            service,
            _runtime: runtime,
        }
    }

    fn wait_until_idle(app: &mut ValuatorApp) {
        for _ in 0..500 {
            app.poll_pending();
            if !app.busy() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("submission never completed");
    }

    #[test]
    fn successful_submission_stores_the_result() {
        let mut h = harness(Ok(Valuation { prediction: 750000.0 }));

        h.app.submit();
        assert!(h.app.busy());
        wait_until_idle(&mut h.app);

        assert_eq!(h.app.result, Some(Valuation { prediction: 750000.0 }));
        assert_eq!(h.app.error, None);
        assert_eq!(h.service.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn second_submit_while_busy_fires_no_second_request() {
        let mut h = harness(Ok(Valuation { prediction: 1.0 }));

        h.app.submit();
        h.app.submit();
        h.app.submit();
        wait_until_idle(&mut h.app);

        assert_eq!(h.service.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn submission_is_possible_again_after_completion() {
        let mut h = harness(Ok(Valuation { prediction: 1.0 }));

        h.app.submit();
        wait_until_idle(&mut h.app);
        h.app.submit();
        wait_until_idle(&mut h.app);

        assert_eq!(h.service.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn status_failure_sets_the_evaluation_failed_message() {
        let mut h = harness(Err(ServiceError::Status(500)));

        h.app.submit();
        wait_until_idle(&mut h.app);

        assert_eq!(h.app.error.as_deref(), Some(MSG_EVALUATION_FAILED));
        assert!(!h.app.busy());
    }

    #[test]
    fn transport_failure_sets_the_generic_message() {
        let mut h = harness(Err(ServiceError::Transport("boom".to_string())));

        h.app.submit();
        wait_until_idle(&mut h.app);

        assert_eq!(h.app.error.as_deref(), Some(MSG_GENERIC_FAILURE));
    }

    #[test]
    fn failure_keeps_the_previously_displayed_result() {
        let mut h = harness(Err(ServiceError::Status(503)));
        h.app.result = Some(Valuation { prediction: 42.0 });

        h.app.submit();
        wait_until_idle(&mut h.app);

        assert_eq!(h.app.result, Some(Valuation { prediction: 42.0 }));
        assert_eq!(h.app.error.as_deref(), Some(MSG_EVALUATION_FAILED));
    }

    #[test]
    fn validation_failure_blocks_the_request_entirely() {
        let mut h = harness(Ok(Valuation { prediction: 1.0 }));
        h.app.form.city.clear();

        h.app.submit();

        assert!(!h.app.busy());
        assert!(h.app.error.is_some());
        assert_eq!(h.service.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn reset_form_restores_defaults_and_keeps_the_result() {
        let mut h = harness(Ok(Valuation { prediction: 5.0 }));
        h.app.result = Some(Valuation { prediction: 5.0 });
        h.app.error = Some("stale".to_string());
        h.app.form.area = "9999".to_string();

        h.app.reset_form();

        assert_eq!(h.app.form, PropertyForm::new());
        assert_eq!(h.app.error, None);
        assert_eq!(h.app.result, Some(Valuation { prediction: 5.0 }));
    }
}
