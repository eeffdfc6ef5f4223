mod find_swap;
mod routes;
mod swap_details;

pub use find_swap::FindSwap;
pub use routes::SwapRoutes;
pub use swap_details::SwapDetails;
