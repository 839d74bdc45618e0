//! Domain entities
//!
//! The records an external loader populates and the merge engine
//! operates on.
//! - `File` - root aggregate for one parsed application file
//! - `Application` - identity of the deployable unit
//! - `Infrastructure` - a named deployment target
//! - `Foundation` - an add-on attached to an infrastructure target

mod application;
mod file;
mod foundation;
mod infrastructure;

pub use application::Application;
pub use file::File;
pub use foundation::Foundation;
pub use infrastructure::Infrastructure;
