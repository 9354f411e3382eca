//! Reducer for the job description form.

use crate::ui::mvi::Reducer;

use super::intent::JobIntent;
use super::state::JobFormState;

pub struct JobReducer;

impl Reducer for JobReducer {
    type State = JobFormState;
    type Intent = JobIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            JobIntent::Input(ch) => state.text.push(ch),
            JobIntent::Paste(text) => state.text.push_str(&text),
            JobIntent::Newline => state.text.push('\n'),
            JobIntent::Backspace => {
                state.text.pop();
            }
        }
        state
    }
}
