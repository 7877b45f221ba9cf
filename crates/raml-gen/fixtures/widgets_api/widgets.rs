//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Widget API: `Widgets` resource
//! Source: fixtures/widgets.yaml
//! Version: v2
//! Generated by `raml-gen`
#![allow(clippy::doc_markdown)]
#![allow(unused_imports)]

use raml_gen_support::{
    Constraint, ParamLocation, ResponseBuilder, ResponseWrapper, Route, RouteParam,
    StreamingOutput,
};
use super::types::*;
/// Widget catalogue.
#[allow(async_fn_in_trait)]
pub trait Widgets {
    /// `GET /widgets`
    ///
    /// Produces `application/json`.
    async fn get(&self, limit: i64) -> GetResponse;
    /// `POST /widgets`
    ///
    /// Consumes `application/json`.
    async fn post(&self, entity: Widget) -> PostResponse;
    /// `DELETE /widgets/{id}`
    async fn delete_by_id(&self, id: i64);
}
/// Response of [`Widgets::get`].
#[derive(Debug)]
pub struct GetResponse(ResponseWrapper);
impl GetResponse {
    /// # Arguments
    ///
    /// * `entity` - the response entity
    pub fn json_ok(entity: WidgetList) -> Self {
        let builder = ResponseBuilder::status(200);
        let builder = builder.header("Content-Type", "application/json");
        let builder = builder.entity(entity);
        Self(builder.build())
    }
    /// # Arguments
    ///
    /// * `status` - the HTTP status code
    /// * `entity` - the raw response payload
    pub fn respond(status: u16, entity: StreamingOutput) -> Self {
        let builder = ResponseBuilder::status(status);
        let builder = builder.stream(entity);
        Self(builder.build())
    }
    pub fn into_inner(self) -> ResponseWrapper {
        self.0
    }
}
impl From<GetResponse> for ResponseWrapper {
    fn from(response: GetResponse) -> Self {
        response.0
    }
}
/// Response of [`Widgets::post`].
#[derive(Debug)]
pub struct PostResponse(ResponseWrapper);
impl PostResponse {
    pub fn created(location: String) -> Self {
        let builder = ResponseBuilder::status(201);
        let builder = builder.header("Location", location);
        Self(builder.build())
    }
    /// # Arguments
    ///
    /// * `status` - the HTTP status code
    /// * `entity` - the raw response payload
    pub fn respond(status: u16, entity: StreamingOutput) -> Self {
        let builder = ResponseBuilder::status(status);
        let builder = builder.stream(entity);
        Self(builder.build())
    }
    pub fn into_inner(self) -> ResponseWrapper {
        self.0
    }
}
impl From<PostResponse> for ResponseWrapper {
    fn from(response: PostResponse) -> Self {
        response.0
    }
}
/// HTTP bindings of the [`Widgets`] methods, in declaration order.
pub const ROUTES: &[Route] = &[
    Route {
        method: "GET",
        path: "/widgets",
        base_path: "widgets",
        residual_path: None,
        handler: "get",
        consumes: None,
        produces: &["application/json"],
        params: &[
            RouteParam {
                name: "limit",
                argument: "limit",
                location: ParamLocation::Query,
                default_value: Some("10"),
                constraints: &[Constraint::Min(1), Constraint::Max(100)],
            },
        ],
    },
    Route {
        method: "POST",
        path: "/widgets",
        base_path: "widgets",
        residual_path: None,
        handler: "post",
        consumes: Some("application/json"),
        produces: &[],
        params: &[
            RouteParam {
                name: "entity",
                argument: "entity",
                location: ParamLocation::Body,
                default_value: None,
                constraints: &[],
            },
        ],
    },
    Route {
        method: "DELETE",
        path: "/widgets/{id}",
        base_path: "widgets",
        residual_path: Some("{id}"),
        handler: "delete_by_id",
        consumes: None,
        produces: &[],
        params: &[
            RouteParam {
                name: "id",
                argument: "id",
                location: ParamLocation::Path,
                default_value: None,
                constraints: &[Constraint::NotNull],
            },
        ],
    },
];
