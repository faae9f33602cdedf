pub(crate) mod admin_page;
pub(crate) mod post_card;
pub(crate) mod public_page;
pub(crate) mod toasts;
