//! Navigation table for a host UI: one route per pipeline step.
//!
//! All routes are children of the root layout; visiting `/` redirects to
//! [`ROOT_REDIRECT`]. Views are named, not loaded, here.

use serde::Serialize;

/// Where `/` sends the user.
pub const ROOT_REDIRECT: &str = "/load-file";

/// Display metadata for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub title: &'static str,
    pub icon: &'static str,
}

/// A navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Path relative to the root layout, without a leading `/`.
    pub path: &'static str,
    pub name: &'static str,
    /// View module the host resolves lazily.
    pub view: &'static str,
    pub meta: RouteMeta,
}

static ROUTES: [Route; 7] = [
    Route {
        path: "load-file",
        name: "LoadFile",
        view: "views/load-file",
        meta: RouteMeta {
            title: "加载文档",
            icon: "Upload",
        },
    },
    Route {
        path: "chunk-file",
        name: "ChunkFile",
        view: "views/chunk-file",
        meta: RouteMeta {
            title: "分割文档",
            icon: "Document",
        },
    },
    Route {
        path: "parse-file",
        name: "ParseFile",
        view: "views/parse-file",
        meta: RouteMeta {
            title: "解析文档",
            icon: "Document",
        },
    },
    Route {
        path: "embedding",
        name: "Embedding",
        view: "views/embedding",
        meta: RouteMeta {
            title: "嵌入文档",
            icon: "Connection",
        },
    },
    Route {
        path: "indexing",
        name: "Indexing",
        view: "views/indexing",
        meta: RouteMeta {
            title: "向量数据索引",
            icon: "DataAnalysis",
        },
    },
    Route {
        path: "search",
        name: "Search",
        view: "views/search",
        meta: RouteMeta {
            title: "信息检索",
            icon: "Search",
        },
    },
    Route {
        path: "generation",
        name: "Generation",
        view: "views/generation",
        meta: RouteMeta {
            title: "生成模型",
            icon: "ChatSquare",
        },
    },
];

/// All routes in menu order.
pub fn routes() -> &'static [Route] {
    &ROUTES
}

/// Resolves an absolute path to its route. `/` resolves through [`ROOT_REDIRECT`].
pub fn find(path: &str) -> Option<&'static Route> {
    let path = if path == "/" { ROOT_REDIRECT } else { path };
    let path = path.trim_start_matches('/').trim_end_matches('/');
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_load_file() {
        let route = find("/").unwrap();
        assert_eq!(route.name, "LoadFile");
        assert_eq!(route.meta.icon, "Upload");
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(find("/search").map(|r| r.name), Some("Search"));
        assert_eq!(find("indexing/").map(|r| r.meta.title), Some("向量数据索引"));
        assert!(find("/settings").is_none());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = routes().iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), routes().len());
    }
}
