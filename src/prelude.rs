pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, FieldUpdates},
    manager::{ContactManager, Outcome},
    search::search,
    select::{IndexSource, select},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, JsonStorage, MemStorage};
pub use crate::validation::{Field, valid_email, valid_name, valid_phone};
