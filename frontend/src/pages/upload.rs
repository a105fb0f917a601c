//! Upload page: staging, simulated submission, hand-off to results.
//!
//! The page owns one [`UploadSession`]. Timer events arrive through the
//! simulated transfer stream; its [`TransferHandle`] lives in reactive
//! storage, so disposing the page (or cancelling) aborts the stream and
//! no event reaches the session afterwards.

use std::rc::Rc;

use futures::StreamExt;
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;
use papercheck::site::RESULTS_PATH;
use papercheck::{
    simulate, AppConfig, GradingBackend, Notice, SampleGrading, StagedId, SubmissionState,
    TransferHandle, UploadEffect, UploadSession,
};

use crate::components::{use_toaster, Dropzone, FileList, FileRow, ProgressPanel};
use crate::services::{BrowserFile, ObjectUrl};
use crate::{APP_NAME, JOB_QUERY_PARAM};

type Session = UploadSession<BrowserFile, ObjectUrl>;

#[component]
pub fn UploadPage() -> impl IntoView {
    let toaster = use_toaster();
    let config = expect_context::<AppConfig>();
    let grading = expect_context::<Rc<SampleGrading>>();
    let navigate = use_navigate();

    let session = create_rw_signal(Session::new(config.upload.clone()));
    let transfer = store_value(None::<TransferHandle>);

    on_cleanup(move || {
        transfer.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                log::debug!("Upload page disposed, aborting transfer");
                handle.cancel();
            }
        });
    });

    let rows = Signal::derive(move || session.with(|s| s.files().map(FileRow::from).collect::<Vec<_>>()));
    let busy = Signal::derive(move || session.with(|s| s.is_busy()));
    let can_submit = Signal::derive(move || session.with(|s| s.can_submit()));
    let progress = Signal::derive(move || session.with(|s| s.progress()));
    let in_progress = Signal::derive(move || {
        matches!(session.with(|s| s.state()), SubmissionState::InProgress { .. })
    });

    let on_files = move |batch: Vec<BrowserFile>| {
        match session.try_update(|s| s.offer(batch, ObjectUrl::for_file)) {
            Some(Ok(report)) => {
                for rejection in &report.rejected {
                    toaster.push(Notice::from(rejection));
                }
            }
            Some(Err(e)) => toaster.push(Notice::from(&e)),
            None => {}
        }
    };

    let on_remove = move |id: StagedId| {
        if let Some(Err(e)) = session.try_update(|s| s.remove(&id)) {
            toaster.push(Notice::from(&e));
        }
    };

    let on_cancel = move |_: ()| {
        // Dropping the handle aborts the stream.
        transfer.update_value(|handle| {
            handle.take();
        });
        if session.try_update(|s| s.cancel()) == Some(true) {
            toaster.push(Notice::info(
                "Submission cancelled",
                "Your files are still here when you are ready.",
            ));
        }
    };

    let timing = config.timing;
    let on_submit = move |_| {
        let submission = match session.try_update(|s| s.submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                toaster.push(Notice::from(&e));
                return;
            }
            None => return,
        };

        let ticket = match grading.submit(&submission.batch) {
            Ok(ticket) => ticket,
            Err(e) => {
                log::error!("❌ Grading service refused the batch: {}", e);
                session.update(|s| {
                    s.cancel();
                });
                toaster.push(Notice::error("Submission failed", e.to_string()));
                return;
            }
        };

        let (mut events, handle) = simulate(&timing, gloo_timers::future::sleep);
        transfer.set_value(Some(handle));

        let navigate = navigate.clone();
        spawn_local(async move {
            while let Some(event) = events.next().await {
                match session.try_update(|s| s.apply(submission.attempt, event)).flatten() {
                    Some(UploadEffect::Notify(notice)) => toaster.push(notice),
                    Some(UploadEffect::ShowResults(batch)) => {
                        log::info!("📋 {} file(s) processed, job {}", batch.len(), ticket);
                        navigate(
                            &format!("{}?{}={}", RESULTS_PATH, JOB_QUERY_PARAM, ticket),
                            NavigateOptions::default(),
                        );
                        break;
                    }
                    None => {}
                }
            }
        });
    };

    view! {
        <Title text=format!("Upload Paper • {}", APP_NAME)/>
        <div class="container upload-page">
            <div class="page-header">
                <h1>"Upload Your " <span class="gradient-text">"Paper"</span></h1>
                <p class="page-lead">
                    "Upload your O or A Level exam paper and get instant AI-powered feedback and marking."
                </p>
            </div>

            <Dropzone
                on_files=on_files
                accept=config.upload.accept_attribute()
                max_size=config.upload.max_size_label()
                disabled=busy
            />

            <FileList rows=rows on_remove=on_remove locked=busy/>

            <Show when=move || busy.get() fallback=|| ()>
                <ProgressPanel progress=progress on_cancel=on_cancel cancellable=in_progress/>
            </Show>

            <div class="submit-row">
                <button
                    class="btn btn-hero"
                    disabled=move || !can_submit.get()
                    on:click=on_submit
                >
                    {move || if busy.get() { "⏳ Processing..." } else { "✓ Submit for Checking" }}
                </button>
            </div>

            <div class="info-cards">
                <div class="info-card">
                    <h3>"Supported Subjects"</h3>
                    <p>
                        "Mathematics, Physics, Chemistry, Biology, English, and more O & A Level subjects."
                    </p>
                </div>
                <div class="info-card">
                    <h3>"Best Practices"</h3>
                    <p>
                        "Ensure your paper is clearly visible, well-lit, and the entire page is captured."
                    </p>
                </div>
            </div>
        </div>
    }
}
