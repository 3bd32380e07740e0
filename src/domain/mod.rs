pub mod contact;
pub mod manager;

use crate::prelude::AppError;
