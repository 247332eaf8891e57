mod about;
mod home;
mod login;
mod questions;
mod results;
mod state;
mod upload;

#[cfg(test)]
mod question_intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutView;
pub use home::HomeView;
pub use login::LoginView;
pub use questions::QuestionsView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState};
pub use upload::UploadView;
