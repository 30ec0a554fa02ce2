mod callback;
mod errors;
mod redirect;

pub use callback::{
    CallbackOutcome, CallbackRequest, disconnect_core, handle_callback_core,
    initiate_provider_core, logout_core,
};
pub use errors::FlowError;
pub use redirect::{RedirectRequest, build_callback_url};
