mod intent;
mod reducer;
mod state;

pub use intent::UploadIntent;
pub use reducer::UploadReducer;
pub use state::UploadFormState;
