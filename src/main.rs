use rusty_contacts::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    run_app()
}
