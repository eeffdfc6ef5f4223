mod copy_button;
mod skeleton;
mod status_icon;
mod toaster;

pub use copy_button::CopyButton;
pub use skeleton::SwapDetailsSkeleton;
pub use status_icon::StatusIcon;
pub use toaster::{Toast, Toaster, Toasts};
