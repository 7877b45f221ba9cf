//! Runtime support for code generated by `raml-gen`.
//!
//! Generated resource modules wrap [`ResponseWrapper`] in one newtype per
//! resource method and describe their HTTP bindings with static [`Route`]
//! tables.

mod body;
mod error;
mod response;
mod route;

pub use body::{Body, FormFields, Multipart, MultipartPart, ResponseHeaders, StreamingOutput};
pub use error::SupportError;
pub use http::Method;
pub use response::{RawResponse, ResponseBuilder, ResponseWrapper};
pub use route::{Constraint, ParamLocation, Route, RouteParam};
