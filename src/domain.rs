pub mod contact;
pub mod manager;
pub mod search;
pub mod select;

use crate::{errors::AppError, storage::ContactStore};
use contact::{Contact, FieldUpdates};
use select::IndexSource;

pub use manager::{ContactManager, Outcome};
