//! Flat domain models: roster, expenses, chores, and reporting windows.

pub mod category;
pub mod chore;
pub mod date_window;
pub mod expense;
pub mod flat;
pub mod member;

pub use category::{canonical_label, normalize_category, GENERAL_CATEGORY};
pub use chore::{Chore, ChoreStatus};
pub use date_window::DateWindow;
pub use expense::Expense;
pub use flat::Flat;
pub use member::{normalize_email, Member};
