use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, UserSession};
use crate::routes::Route;
use crate::views::{ViewError, ViewState};
use crate::vm::{ExportVm, ResultsVm, format_datetime, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<UserSession>();
    let export_state = use_signal(|| ViewState::<ExportVm>::Idle);

    let on_export = use_callback(move |()| {
        let mut export_state = export_state;
        let service = ctx.assessment();
        let Some(snapshot) = session.assessment.read().clone() else {
            export_state.set(ViewState::Error(ViewError::NotSubmitted));
            return;
        };
        let organization = session
            .user
            .read()
            .as_ref()
            .map(|u| u.organization.clone())
            .unwrap_or_default();
        export_state.set(ViewState::Loading);
        spawn(async move {
            let result = service
                .export(&snapshot, &organization)
                .await
                .map(ExportVm::from);
            if let Err(err) = &result {
                tracing::warn!(%err, "export failed");
            }
            export_state.set(ViewState::from_result(result));
        });
    });

    let (results, completed_at) = {
        let guard = session.assessment.read();
        match guard.as_ref() {
            Some(current) if current.is_complete() => (
                Some(map_results(&current.summary())),
                current.completed_at().map(format_datetime),
            ),
            _ => (None, None),
        }
    };

    let Some(results) = results else {
        return rsx! {
            div { class: "page",
                h2 { "NDPA Compliance Assessment Results" }
                p { class: "alert alert-warning", "{ViewError::NotSubmitted.message()}" }
                p {
                    "Navigate to "
                    Link { to: Route::Questions {}, "Answer Questions" }
                    " to complete the assessment."
                }
            }
        };
    };

    rsx! {
        div { class: "page results",
            h2 { "NDPA Compliance Assessment Results" }
            if let Some(at) = completed_at {
                p { class: "muted", "Submitted {at}" }
            }

            h3 { "Overall Compliance Score" }
            div { class: "metric",
                span { class: "metric-label", "Compliance Score" }
                span { class: "metric-value", "{results.score_label}" }
                span { class: "metric-note",
                    "{results.compliant} compliant of {results.total} questions, {results.answered} answered"
                }
            }

            h3 { "Response Summary by Category" }
            CategoryTable { results: results.clone() }

            div { class: "charts",
                DistributionChart { results: results.clone() }
                RiskChart { results: results.clone() }
            }

            h3 { "Detailed Responses" }
            DetailTable { results: results.clone() }

            div { class: "export",
                button {
                    id: "results-export",
                    class: "btn btn-primary",
                    disabled: export_state.read().is_loading(),
                    onclick: move |_| on_export.call(()),
                    "Export Results"
                }
                match export_state() {
                    ViewState::Idle => rsx! {},
                    ViewState::Loading => rsx! {
                        p { "Generating report..." }
                    },
                    ViewState::Ready(saved) => rsx! {
                        p { class: "alert alert-success", "Report saved: {saved.location}" }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "alert alert-error", "{err.message()}" }
                    },
                }
            }
        }
    }
}

#[component]
fn CategoryTable(results: ResultsVm) -> Element {
    rsx! {
        table { class: "category-table",
            thead {
                tr {
                    th { "Category" }
                    for column in results.columns.iter() {
                        th { "{column}" }
                    }
                }
            }
            tbody {
                for row in results.category_rows.iter() {
                    tr {
                        td { "{row.category}" }
                        for count in row.counts.iter() {
                            td { "{count}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DistributionChart(results: ResultsVm) -> Element {
    rsx! {
        figure { class: "chart",
            figcaption { "Overall Response Distribution" }
            for bar in results.distribution.iter() {
                div { class: "bar-row",
                    span { class: "bar-label", "{bar.label}" }
                    div { class: "bar-track",
                        div { class: "bar", style: "width: {bar.width_percent}%" }
                    }
                    span { class: "bar-count", "{bar.count}" }
                }
            }
        }
    }
}

#[component]
fn RiskChart(results: ResultsVm) -> Element {
    rsx! {
        figure { class: "chart",
            figcaption { "Responses by Category and Risk Level" }
            for bar in results.risk_breakdown.iter() {
                div { class: "bar-row",
                    span { class: "bar-label", "{bar.category} ({bar.risk_label})" }
                    div { class: "bar-track",
                        div { class: "bar {bar.risk_class}", style: "width: {bar.width_percent}%" }
                    }
                    span { class: "bar-count", "{bar.count}" }
                }
            }
        }
    }
}

#[component]
fn DetailTable(results: ResultsVm) -> Element {
    rsx! {
        table { class: "detail-table",
            thead {
                tr {
                    th { "Category" }
                    th { "Question" }
                    th { "Response" }
                    th { "Risk Level" }
                    th { "Comments" }
                }
            }
            tbody {
                for row in results.details.iter() {
                    tr {
                        td { "{row.category}" }
                        td { "{row.question}" }
                        td { "{row.response}" }
                        td { "{row.risk_label}" }
                        td { "{row.comment}" }
                    }
                }
            }
        }
    }
}
