mod draft;
mod lifecycle;
mod submit;

pub use draft::reduce_draft;
pub use lifecycle::reduce_lifecycle;
pub use submit::reduce_submit;
