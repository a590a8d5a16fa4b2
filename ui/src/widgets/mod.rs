mod gradient_picker;
mod pagination;
mod toasts;
pub mod users;

pub use gradient_picker::{RESET_LABEL, gradient_picker};
pub use pagination::{FIRST_LABEL, LAST_LABEL, NEXT_LABEL, PREV_LABEL, pagination_bar};
pub use toasts::show_toasts;
pub use users::users_panel;
