// Request builder: one pure function per pixe.la operation, each
// returning a `RequestSpec` descriptor. Nothing here touches the
// network; the descriptors are executed by the `api` module.

use reqwest::Method;
use serde_json::{json, Value};

/// REST endpoint for the service API, versioned.
pub const DEFAULT_BASE_URL: &str = "https://pixe.la/v1";
/// Public profile pages live at the unversioned site root.
pub const DEFAULT_PROFILE_URL: &str = "https://pixe.la";
/// Header carrying the per-user credential on mutation calls.
pub const TOKEN_HEADER: &str = "X-USER-TOKEN";

/// Graph name used when the caller does not supply one.
pub const DEFAULT_GRAPH_NAME: &str = "My Coding Tracker Graph";

/// Username/token pair. Opaque, supplied by the caller, never mutated.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

/// Fields of a graph to create. `color` must already be a canonical
/// token (see `input::resolve_color`); the graph type is always
/// "float", the only type this client uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSpec {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub color: String,
}

/// One data point for a graph. `date` must already be in `YYYYMMDD`
/// form (see `input::normalize_date`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelEntry {
    pub date: String,
    pub quantity: String,
}

/// Everything the transport needs to issue one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// The two base URLs requests are built against. Split out so tests
/// and alternate deployments can point the client elsewhere.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
    profile: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>, profile: impl Into<String>) -> Self {
        Endpoints {
            base: base.into(),
            profile: profile.into(),
        }
    }

    /// Read the base URL from `PIXELA_BASE_URL` or fall back to the
    /// public service.
    pub fn from_env() -> Self {
        let base = std::env::var("PIXELA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Endpoints::new(base, DEFAULT_PROFILE_URL)
    }

    /// POST /users — register a username/token pair. The terms-of-service
    /// answers are fixed by the wire contract.
    pub fn create_user(&self, creds: &Credentials) -> RequestSpec {
        RequestSpec {
            method: Method::POST,
            url: format!("{}/users", self.base),
            headers: Vec::new(),
            body: Some(json!({
                "token": creds.token,
                "username": creds.username,
                "agreeTermsOfService": "yes",
                "notMinor": "yes",
            })),
        }
    }

    /// POST /users/{username}/graphs — create a graph.
    pub fn create_graph(&self, creds: &Credentials, graph: &GraphSpec) -> RequestSpec {
        RequestSpec {
            method: Method::POST,
            url: format!("{}/users/{}/graphs", self.base, creds.username),
            headers: auth_headers(creds),
            body: Some(json!({
                "id": graph.id,
                "name": graph.name,
                "unit": graph.unit,
                "type": "float",
                "color": graph.color,
            })),
        }
    }

    /// POST /users/{username}/graphs/{graph_id} — append one pixel.
    pub fn add_pixel(&self, creds: &Credentials, graph_id: &str, entry: &PixelEntry) -> RequestSpec {
        RequestSpec {
            method: Method::POST,
            url: format!("{}/users/{}/graphs/{}", self.base, creds.username, graph_id),
            headers: auth_headers(creds),
            body: Some(json!({
                "date": entry.date,
                "quantity": entry.quantity,
            })),
        }
    }

    /// DELETE /users/{username}/graphs/{graph_id} — remove a graph.
    pub fn delete_graph(&self, creds: &Credentials, graph_id: &str) -> RequestSpec {
        RequestSpec {
            method: Method::DELETE,
            url: format!("{}/users/{}/graphs/{}", self.base, creds.username, graph_id),
            headers: auth_headers(creds),
            body: None,
        }
    }

    /// GET the public profile page. No auth header: the page is public.
    pub fn get_user(&self, username: &str) -> RequestSpec {
        RequestSpec {
            method: Method::GET,
            url: format!("{}/@{}", self.profile, username),
            headers: Vec::new(),
            body: None,
        }
    }
}

fn auth_headers(creds: &Credentials) -> Vec<(String, String)> {
    vec![(TOKEN_HEADER.to_string(), creds.token.clone())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(DEFAULT_BASE_URL, DEFAULT_PROFILE_URL)
    }

    fn creds() -> Credentials {
        Credentials {
            username: "alice".into(),
            token: "tok".into(),
        }
    }

    #[test]
    fn create_user_body_has_exactly_the_four_contract_keys() {
        let req = endpoints().create_user(&creds());
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url, "https://pixe.la/v1/users");
        assert!(req.headers.is_empty());

        let body = req.body.unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["token"], "tok");
        assert_eq!(obj["username"], "alice");
        assert_eq!(obj["agreeTermsOfService"], "yes");
        assert_eq!(obj["notMinor"], "yes");
    }

    #[test]
    fn create_graph_sends_token_header_and_float_type() {
        let graph = GraphSpec {
            id: "g1".into(),
            name: "Coding".into(),
            unit: "hour".into(),
            color: "sora".into(),
        };
        let req = endpoints().create_graph(&creds(), &graph);
        assert_eq!(req.url, "https://pixe.la/v1/users/alice/graphs");
        assert_eq!(req.headers, vec![("X-USER-TOKEN".to_string(), "tok".to_string())]);

        let body = req.body.unwrap();
        assert_eq!(body["type"], "float");
        assert_eq!(body["color"], "sora");
        assert_eq!(body.as_object().unwrap().len(), 5);
    }

    #[test]
    fn add_pixel_posts_to_the_graph_path() {
        let entry = PixelEntry {
            date: "20230105".into(),
            quantity: "2.5".into(),
        };
        let req = endpoints().add_pixel(&creds(), "g1", &entry);
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url, "https://pixe.la/v1/users/alice/graphs/g1");
        assert_eq!(req.body.unwrap(), serde_json::json!({"date": "20230105", "quantity": "2.5"}));
    }

    #[test]
    fn delete_graph_has_no_body() {
        let req = endpoints().delete_graph(&creds(), "g1");
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.url, "https://pixe.la/v1/users/alice/graphs/g1");
        assert!(req.body.is_none());
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn get_user_targets_the_profile_page_without_auth() {
        let req = endpoints().get_user("alice");
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url, "https://pixe.la/@alice");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }
}
