mod assessment;
mod home;
mod results;
mod state;

pub use assessment::AssessmentView;
pub use home::HomeView;
pub use results::ResultsView;
pub use state::ViewError;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
