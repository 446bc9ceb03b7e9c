//! Small presentational building blocks shared by every page.

mod badge;
mod button;
mod card;
mod dialog;
mod form;
mod pagination;
mod spinner;

pub use badge::StatusBadge;
pub use button::{Button, ButtonVariant};
pub use card::{Card, StatCard};
pub use dialog::{ConfirmDialog, Modal};
pub use form::{Field, Input, Label, Select, SelectOption, Textarea};
pub use pagination::Pagination;
pub use spinner::{FullPageSpinner, Spinner};
