mod markdown_vm;
mod question_vm;
mod results_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use question_vm::{OptionVm, QuestionVm, map_current_question, risk_class};
pub use results_vm::{
    BarVm, CategoryRowVm, DetailRowVm, ExportVm, ResultsVm, RiskBarVm, bar_width, map_results,
};
pub use time_fmt::format_datetime;
