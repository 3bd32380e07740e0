pub use crate::cli::{
    command,
    run::{run_app, run_session},
};
pub use crate::domain::{
    contact::{self, Contact},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, MemStore, TxtStore};
pub use std::collections::HashMap;
