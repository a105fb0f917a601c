use std::rc::Rc;

use leptos::*;
use leptos_meta::Title;
use leptos_router::*;
use papercheck::site::UPLOAD_PATH;
use papercheck::{ExpandedQuestions, GradingBackend, GradingResult, JobTicket, Notice, SampleGrading};

use crate::components::use_toaster;
use crate::services::download_report;
use crate::{APP_NAME, JOB_QUERY_PARAM};

/// Result for the `job` query value. Without a job, or with one the
/// service does not know, the sample result is shown.
pub fn load_result(grading: &dyn GradingBackend, job: Option<&str>) -> GradingResult {
    let Some(job) = job else {
        return GradingResult::sample();
    };
    let Some(ticket) = JobTicket::parse(job) else {
        log::warn!("Ignoring malformed job id {:?}", job);
        return GradingResult::sample();
    };
    grading.result(&ticket).unwrap_or_else(|e| {
        log::warn!("{}, showing the sample result", e);
        GradingResult::sample()
    })
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let toaster = use_toaster();
    let grading = expect_context::<Rc<SampleGrading>>();
    let query = use_query_map();

    let result = create_memo(move |_| {
        let job = query.with(|q| q.get(JOB_QUERY_PARAM).cloned());
        load_result(grading.as_ref(), job.as_deref())
    });
    let expanded = create_rw_signal(ExpandedQuestions::new());

    let on_download = move |_| {
        if let Err(e) = result.with_untracked(download_report) {
            log::error!("❌ {}", e);
            toaster.push(Notice::error("Download failed", e));
        }
    };

    let header = move || {
        result.with(|r| {
            let counts = r.status_counts();
            let band = r.grade_band().css_class();
            view! {
                <div class="page-header">
                    <h1>"Your " <span class="gradient-text">"Results"</span></h1>
                    <p class="page-lead">{r.paper_title.clone()} " • " {r.subject.clone()}</p>
                    <p class="submitted-at">
                        "Submitted " {r.submitted_at.format("%B %-d, %Y at %H:%M").to_string()}
                    </p>
                </div>
                <div class="score-cards">
                    <div class="score-card">
                        <span class="score-label">"Total Score"</span>
                        <span class="score-value">{r.achieved_marks} "/" {r.total_marks}</span>
                    </div>
                    <div class="score-card">
                        <span class="score-label">"Percentage"</span>
                        <span class="score-value">{r.percentage} "%"</span>
                    </div>
                    <div class=format!("score-card {}", band)>
                        <span class="score-label">"Grade"</span>
                        <span class="score-value">{r.grade.clone()}</span>
                    </div>
                </div>
                <div class="status-summary">
                    <span class="status-correct">{counts.correct} " correct"</span>
                    <span class="status-partial">{counts.partial} " partial"</span>
                    <span class="status-incorrect">{counts.incorrect} " incorrect"</span>
                </div>
            }
        })
    };

    view! {
        <Title text=format!("Results • {}", APP_NAME)/>
        <div class="container results-page">
            <A href=UPLOAD_PATH class="back-link">"← Check another paper"</A>

            {header}

            <div class="breakdown">
                <div class="breakdown-header">
                    <h2>"Detailed Breakdown"</h2>
                    <button class="btn btn-outline" on:click=on_download>"📥 Download Report"</button>
                </div>

                <For
                    each=move || result.get().questions
                    key=|q| q.question_number.clone()
                    children=move |q| {
                        let number = q.question_number.clone();
                        let feedback = q.feedback.clone();
                        let open = {
                            let number = number.clone();
                            Signal::derive(move || expanded.with(|e| e.is_expanded(&number)))
                        };
                        let toggle = move |_| expanded.update(|e| {
                            e.toggle(&number);
                        });
                        view! {
                            <div class=format!("question {}", q.status.css_class())>
                                <button
                                    class="question-header"
                                    on:click=toggle
                                    aria-expanded=move || open.get().to_string()
                                >
                                    <span class="question-number">"Question " {q.question_number.clone()}</span>
                                    <span class="question-status">{q.status.label()}</span>
                                    <span class="question-marks">
                                        {q.achieved_marks} "/" {q.max_marks} " marks"
                                    </span>
                                    <span class="chevron">{move || if open.get() { "▲" } else { "▼" }}</span>
                                </button>
                                <Show when=move || open.get() fallback=|| ()>
                                    <div class="question-feedback">
                                        <h4>"Feedback"</h4>
                                        <p>{feedback.clone()}</p>
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papercheck::{BatchEntry, SubmissionBatch};

    #[test]
    fn test_load_result_without_job() {
        let grading = SampleGrading::new();
        assert_eq!(load_result(&grading, None), GradingResult::sample());
    }

    #[test]
    fn test_load_result_for_issued_job() {
        let grading = SampleGrading::new();
        let batch = SubmissionBatch {
            files: vec![BatchEntry {
                name: "paper.pdf".into(),
                size: 1024,
                mime_type: "application/pdf".into(),
            }],
        };
        let ticket = grading.submit(&batch).unwrap();
        let result = load_result(&grading, Some(&ticket.to_string()));
        assert_eq!(result.questions.len(), 9);
    }

    #[test]
    fn test_load_result_falls_back_on_bad_job() {
        let grading = SampleGrading::new();
        assert_eq!(load_result(&grading, Some("nope")), GradingResult::sample());
        let unknown = JobTicket::new().to_string();
        assert_eq!(load_result(&grading, Some(&unknown)), GradingResult::sample());
    }
}
