use readiness_core::model::{AnswerBundle, AssessmentBundle, CompletedAssessment, SectionId};

use super::test_harness::{ViewKind, setup_view_harness};

fn unanswered_assessment() -> CompletedAssessment {
    let mut bundle = AssessmentBundle::new();
    for section in SectionId::ALL {
        bundle.insert(AnswerBundle::new(section));
    }
    CompletedAssessment::try_from(bundle).unwrap()
}

#[test]
fn home_view_smoke_renders_landing_copy() {
    let mut harness = setup_view_harness(ViewKind::Home, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Legal UX Specialist"), "missing hero in {html}");
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
    assert!(html.contains("What You&#39;ll Discover") || html.contains("What You'll Discover"));
}

#[test]
fn assessment_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Section 1 of 3"), "missing section badge in {html}");
    assert!(html.contains("Question 1 of 6"), "missing question counter in {html}");
    assert!(html.contains("Psychometric Evaluation"), "missing section title in {html}");
    assert!(html.contains("Next Question"), "missing advance button in {html}");
    assert!(html.contains("0 of 6 questions answered"), "missing answered count in {html}");
}

#[test]
fn results_view_smoke_renders_stashed_report() {
    let mut harness = setup_view_harness(ViewKind::Results, Some(unanswered_assessment()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your Legal UX Fit Score"), "missing score title in {html}");
    assert!(html.contains("Development Needed"), "missing tier in {html}");
    assert!(html.contains("Legal Product Manager"), "missing career path in {html}");
    assert!(html.contains("Retake Assessment"), "missing retake in {html}");

    // The handoff is consumed by the first render.
    assert!(harness.context.take_completed().is_none());
}
