mod intro_vm;
mod question_vm;
mod results_vm;
mod time_fmt;

pub use intro_vm::IntroVm;
pub use question_vm::QuestionVm;
pub use results_vm::ResultsVm;
