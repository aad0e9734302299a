//! Route metadata and the generated machine-readable API description.
//!
//! The router's surface is described once in [`ROUTES`]; [`openapi`] folds
//! that table into an OpenAPI 3.0 document served at
//! `/api-docs/openapi.json`.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Body shape of a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    Article,
    ArticleList,
}

/// The single path parameter of a documented route, if any.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    /// OpenAPI primitive type name.
    pub schema: &'static str,
    pub description: &'static str,
}

/// Static description of one route.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteDoc {
    /// OpenAPI-style path template.
    pub path: &'static str,
    pub method: &'static str,
    pub summary: &'static str,
    pub param: Option<ParamDoc>,
    pub response: ResponseShape,
    /// Whether the route can answer 404 on zero matches.
    pub can_miss: bool,
}

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        path: "/news",
        method: "get",
        summary: "List every loaded article",
        param: None,
        response: ResponseShape::ArticleList,
        can_miss: false,
    },
    RouteDoc {
        path: "/news/random",
        method: "get",
        summary: "Pick one article uniformly at random",
        param: None,
        response: ResponseShape::Article,
        can_miss: true,
    },
    RouteDoc {
        path: "/news/by-id/{id}",
        method: "get",
        summary: "Look up one article by its 1-based position",
        param: Some(ParamDoc {
            name: "id",
            schema: "integer",
            description: "1-based position in the load-order sequence",
        }),
        response: ResponseShape::Article,
        can_miss: true,
    },
    RouteDoc {
        path: "/news/by-date/{date}",
        method: "get",
        summary: "List articles with an exactly matching date",
        param: Some(ParamDoc {
            name: "date",
            schema: "string",
            description: "Date text, compared verbatim",
        }),
        response: ResponseShape::ArticleList,
        can_miss: true,
    },
    RouteDoc {
        path: "/news/by-category/{category}",
        method: "get",
        summary: "List articles with an exactly matching category",
        param: Some(ParamDoc {
            name: "category",
            schema: "string",
            description: "Category label",
        }),
        response: ResponseShape::ArticleList,
        can_miss: true,
    },
    RouteDoc {
        path: "/news/by-author/{author}",
        method: "get",
        summary: "List articles by an author's exact full name",
        param: Some(ParamDoc {
            name: "author",
            schema: "string",
            description: "Full author name, case-sensitive",
        }),
        response: ResponseShape::ArticleList,
        can_miss: true,
    },
    RouteDoc {
        path: "/news/by-author-partial/{partialAuthor}",
        method: "get",
        summary: "List articles whose author name contains a substring",
        param: Some(ParamDoc {
            name: "partialAuthor",
            schema: "string",
            description: "Author name fragment, case-insensitive",
        }),
        response: ResponseShape::ArticleList,
        can_miss: true,
    },
];

fn article_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "category": { "type": "string" },
            "headline": { "type": "string" },
            "authors": { "type": "string" },
            "link": { "type": "string" },
            "short_description": { "type": "string" },
            "date": { "type": "string" }
        }
    })
}

/// Fold the route table into an OpenAPI 3.0 document.
pub fn openapi() -> Value {
    let mut paths = Map::new();
    for route in ROUTES {
        let schema = match route.response {
            ResponseShape::Article => article_schema(),
            ResponseShape::ArticleList => json!({
                "type": "array",
                "items": article_schema()
            }),
        };

        let mut responses = Map::new();
        responses.insert(
            "200".to_string(),
            json!({
                "description": "Matching articles",
                "content": { "application/json": { "schema": schema } }
            }),
        );
        if route.can_miss {
            responses.insert(
                "404".to_string(),
                json!({
                    "description": "No matching articles",
                    "content": { "text/plain": {} }
                }),
            );
        }

        let mut operation = json!({
            "summary": route.summary,
            "responses": Value::Object(responses)
        });
        if let Some(param) = route.param {
            operation["parameters"] = json!([{
                "name": param.name,
                "in": "path",
                "required": true,
                "schema": { "type": param.schema },
                "description": param.description
            }]);
        }

        let mut item = Map::new();
        item.insert(route.method.to_string(), operation);
        paths.insert(route.path.to_string(), Value::Object(item));
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "News API",
            "version": "1.0.0",
            "description": "Read-only filters over the loaded article set"
        },
        "paths": Value::Object(paths)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_appears_in_the_document() {
        let doc = openapi();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), ROUTES.len());
        for route in ROUTES {
            let operation = &paths[route.path][route.method];
            assert!(operation["responses"]["200"].is_object(), "{}", route.path);
        }
    }

    #[test]
    fn miss_capable_routes_document_404() {
        let doc = openapi();
        assert!(doc["paths"]["/news/by-id/{id}"]["get"]["responses"]["404"].is_object());
        assert!(doc["paths"]["/news"]["get"]["responses"]["404"].is_null());
    }

    #[test]
    fn path_params_are_declared() {
        let doc = openapi();
        let params = &doc["paths"]["/news/by-id/{id}"]["get"]["parameters"];
        assert_eq!(params[0]["name"], "id");
        assert_eq!(params[0]["schema"]["type"], "integer");
        assert_eq!(params[0]["in"], "path");
    }
}
