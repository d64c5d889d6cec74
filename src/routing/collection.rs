//! The parsed route table.

use serde::{Deserialize, Serialize};

use crate::routing::route::Route;

/// All named routes plus collection-wide defaults. Read-only once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteCollection {
    pub routes: Vec<Route>,
    pub scheme: String,
    pub host: String,
    pub base_url: String,
    pub logout_url: String,
    pub logout_path: String,
}

impl RouteCollection {
    /// Look up a route by name. First match wins.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let collection = RouteCollection {
            routes: vec![
                Route { name: "home".into(), path: "/".into(), ..Route::default() },
                Route { name: "home".into(), path: "/shadowed".into(), ..Route::default() },
            ],
            ..RouteCollection::default()
        };

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get("home").unwrap().path, "/");
        assert!(collection.get("missing").is_none());
    }
}
