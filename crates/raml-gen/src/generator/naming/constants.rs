/// Marks a response header name that stands for any number of headers.
pub const RESPONSE_HEADER_WILDCARD_SYMBOL: &str = "{?}";

pub const GENERIC_PAYLOAD_ARGUMENT_NAME: &str = "entity";
pub const MULTIPLE_RESPONSE_HEADERS_ARGUMENT_NAME: &str = "headers";
pub const STATUS_ARGUMENT_NAME: &str = "status";
pub const GENERIC_RESPONSE_METHOD_NAME: &str = "respond";
/// Local bound by every generated factory body; factory arguments may not use it.
pub const FACTORY_BUILDER_LOCAL: &str = "builder";

/// Support crate items imported by generated modules; interfaces never take these names.
pub const SUPPORT_TYPE_NAMES: [&str; 10] = [
  "Constraint",
  "FormFields",
  "Multipart",
  "ParamLocation",
  "ResponseBuilder",
  "ResponseHeaders",
  "ResponseWrapper",
  "Route",
  "RouteParam",
  "StreamingOutput",
];

pub const RESPONSE_SUFFIX: &str = "Response";
pub const ROOT_INTERFACE_NAME: &str = "Root";
pub const TEMPLATE_SEGMENT_PREFIX: &str = "by";

pub const REQUEST_BODY_DESCRIPTION: &str = "the request body";
pub const RESPONSE_BODY_DESCRIPTION: &str = "the response entity";
pub const STREAM_BODY_DESCRIPTION: &str = "the raw response payload";
pub const STATUS_DESCRIPTION: &str = "the HTTP status code";
