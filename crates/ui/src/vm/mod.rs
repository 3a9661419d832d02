mod assessment_vm;
mod results_vm;

pub use assessment_vm::{
    AnswerInputVm, AssessmentIntent, AssessmentOutcome, AssessmentVm, OptionVm, QuestionVm,
    SectionStepVm, StepState,
};
pub use results_vm::{
    CareerPathVm, ResultsEntry, ResultsVm, ScoreRowVm, results_entry,
};
