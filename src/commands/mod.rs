pub mod edit;
pub mod login;
pub mod revert;
pub mod run;
pub mod status;
pub mod submit;
pub mod sync;

pub use edit::*;
pub use login::*;
pub use revert::*;
pub use run::*;
pub use status::*;
pub use submit::*;
pub use sync::*;
